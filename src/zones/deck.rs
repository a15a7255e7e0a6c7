//! The deck: all 52 cards, built fresh each round and consumed by dealing.
//!
//! `Deck::fresh()` returns the cards in a fixed canonical order (suit-major,
//! K down to A within each suit) so that a shuffle is observable in tests.
//! Dealing draws from the end of the sequence, mirroring a face-down pile.

use serde::{Deserialize, Serialize};

use crate::core::{Card, GameRng, Rank, Suit};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// An ordered pile of unique cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create a full 52-card deck in canonical order.
    ///
    /// ```
    /// use toucan::zones::{Deck, DECK_SIZE};
    ///
    /// let deck = Deck::fresh();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn fresh() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL_DESCENDING {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Shuffle the deck with an injected randomness source.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Draw one card from the end of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Consume the deck, yielding its remaining cards in order.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// The remaining cards in order, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
