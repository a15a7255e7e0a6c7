//! Core engine types: cards, players, errors, RNG.
//!
//! These are the building blocks the zone and rules layers are written in
//! terms of; nothing here knows about trick flow.

pub mod card;
pub mod error;
pub mod player;
pub mod rng;

pub use card::{Card, Color, Rank, Suit};
pub use error::{ErrorKind, GameError};
pub use player::{Player, PlayerSlot};
pub use rng::{GameRng, GameRngState};
