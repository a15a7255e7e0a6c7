//! The stock ("Can"): cards left over after dealing.
//!
//! The stock only ever shrinks via `draw`; it is replaced wholesale at the
//! next deal and nothing is ever shuffled back in. A short draw is not an
//! error, the shortfall shows up as fewer cards returned.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Card;

/// Cards drawn in one request; replenishment draws at most 2 per player.
pub type Drawn = SmallVec<[Card; 2]>;

/// The reserve of undealt cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    cards: Vec<Card>,
}

impl Stock {
    /// Create an empty stock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stock's contents with the leftover deck cards.
    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Draw up to `n` cards from the top of the stock.
    pub fn draw(&mut self, n: usize) -> Drawn {
        let take = n.min(self.cards.len());
        (0..take).filter_map(|_| self.cards.pop()).collect()
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the stock is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
