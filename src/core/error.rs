//! Engine error taxonomy.
//!
//! Two recoverable categories, no fatal ones:
//! - `Validation`: malformed caller input; state is untouched and the caller
//!   should re-prompt.
//! - `Precondition`: the requested transition is not available in the current
//!   state; only that transition is blocked.
//!
//! The engine never panics on caller input.

use thiserror::Error;

use super::player::PlayerSlot;

/// Coarse error category, mirroring how callers recover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input; re-prompt and retry.
    Validation,
    /// Transition unavailable in the current state.
    Precondition,
}

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("username cannot be empty")]
    EmptyUsername,

    #[error("{slot} is already registered as {username}")]
    AlreadyRegistered { slot: PlayerSlot, username: String },

    #[error("no registered players")]
    NoActivePlayers,

    #[error("not enough cards to deal: need {needed}, available {available}")]
    InsufficientCards { needed: usize, available: usize },

    #[error("card index {index} is out of range for a hand of {hand_size}")]
    IndexOutOfRange { index: usize, hand_size: usize },

    #[error("card index {index} was selected twice")]
    DuplicateSelection { index: usize },

    #[error("{slot} does not have enough cards to play a trick ({have} in hand)")]
    NotEnoughCards { slot: PlayerSlot, have: usize },

    #[error("no leader designated for the current trick")]
    NoLeader,

    #[error("a trick is already in progress")]
    TrickInProgress,

    #[error("both players must be registered and a leader move pending")]
    RolesNotSet,

    #[error("trick is not ready to resolve")]
    TrickIncomplete,

    #[error("{slot} has {have} cards, fewer than the required {needed}")]
    InsufficientHandSize {
        slot: PlayerSlot,
        have: usize,
        needed: usize,
    },

    #[error("no victory claim is active")]
    NoActiveClaim,
}

impl GameError {
    /// Classify this error for recovery handling.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::EmptyUsername
            | GameError::IndexOutOfRange { .. }
            | GameError::DuplicateSelection { .. } => ErrorKind::Validation,

            GameError::AlreadyRegistered { .. }
            | GameError::NoActivePlayers
            | GameError::InsufficientCards { .. }
            | GameError::NotEnoughCards { .. }
            | GameError::NoLeader
            | GameError::TrickInProgress
            | GameError::RolesNotSet
            | GameError::TrickIncomplete
            | GameError::InsufficientHandSize { .. }
            | GameError::NoActiveClaim => ErrorKind::Precondition,
        }
    }
}
