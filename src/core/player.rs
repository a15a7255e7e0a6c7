//! Player slots and per-player state.
//!
//! A `Game` owns exactly two players for its whole lifetime. Slots are never
//! created or destroyed, only activated by registration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::zones::Hand;

/// One of the two fixed player slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    /// Both slots in deal order (One before Two).
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::One, PlayerSlot::Two];

    /// Zero-based index for array storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }

    /// The opposing slot.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerSlot::One => write!(f, "Player 1"),
            PlayerSlot::Two => write!(f, "Player 2"),
        }
    }
}

/// A player: slot, registration state, and hand.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub slot: PlayerSlot,
    pub username: Option<String>,
    pub registered: bool,
    pub hand: Hand,
}

impl Player {
    /// Create an unregistered player for a slot.
    #[must_use]
    pub fn new(slot: PlayerSlot) -> Self {
        Self {
            slot,
            username: None,
            registered: false,
            hand: Hand::new(),
        }
    }

    /// The username, or a placeholder for unregistered slots.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("(unregistered)")
    }
}
