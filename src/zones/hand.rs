//! A player's hand.
//!
//! Card order is display order only; nothing in the rules depends on it.
//! Removal by index set is atomic: either every index is valid and all of
//! the named cards come out, or the hand is left untouched.
//!
//! Backed by `im::Vector` so cloning a hand into a snapshot is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Card, GameError};

/// An ordered, mutable collection of cards owned by one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vector<Card>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card to the end of the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Remove all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Iterate over the cards in display order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// The cards in display order.
    #[must_use]
    pub fn cards(&self) -> Vector<Card> {
        self.cards.clone()
    }

    /// Remove the cards at the given distinct positions, atomically.
    ///
    /// Returned cards follow the order of `indices`, not hand order. Fails
    /// with `IndexOutOfRange` or `DuplicateSelection` without mutating the
    /// hand.
    pub fn remove_many(&mut self, indices: &[usize]) -> Result<Vec<Card>, GameError> {
        for (pos, &index) in indices.iter().enumerate() {
            if index >= self.cards.len() {
                return Err(GameError::IndexOutOfRange {
                    index,
                    hand_size: self.cards.len(),
                });
            }
            if indices[..pos].contains(&index) {
                return Err(GameError::DuplicateSelection { index });
            }
        }

        let removed: Vec<Card> = indices.iter().map(|&i| self.cards[i]).collect();

        // Delete highest index first so earlier positions stay valid.
        let mut order: Vec<usize> = indices.to_vec();
        order.sort_unstable_by(|a, b| b.cmp(a));
        for index in order {
            self.cards.remove(index);
        }

        Ok(removed)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
