//! # toucan
//!
//! Rule engine for Toucan, a two-player trick-taking card game.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: no console I/O, no rendering, no prompting. A
//!    presentation layer calls engine operations with already-parsed
//!    arguments and renders the returned summaries.
//!
//! 2. **No ambient state**: a `Game` is a plain value; randomness is
//!    injected as a seeded `GameRng`, so rounds are replayable.
//!
//! 3. **Typed failures**: every operation returns `Result` with a
//!    `GameError` the caller can match on; malformed input never panics.
//!
//! ## Game flow
//!
//! Register both slots, deal a round, then alternate tricks: the leader
//! plays two cards and declares High or Low, the follower answers, the
//! trick resolves (pattern mismatch forfeits to the leader; otherwise rank
//! comparison with leader-favoring tie-breaks), both players replenish from
//! the stock, and the winner leads the next trick. A player holding 27 or
//! more cards may claim victory; the opponent may counter-challenge at the
//! same threshold.
//!
//! ## Modules
//!
//! - `core`: cards, players, errors, RNG
//! - `zones`: deck, hands, stock
//! - `rules`: pattern matching, trick resolution, victory adjudication
//! - `game`: the `Game` state machine and snapshot types

pub mod core;
pub mod game;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{Card, Color, ErrorKind, GameError, GameRng, GameRngState, Player, PlayerSlot, Rank, Suit};

pub use crate::zones::{Deck, Hand, Stock, DECK_SIZE};

pub use crate::rules::{
    matches, resolve, CardPair, Declaration, PatternClass, Resolution, TrickState, TrickWinner,
    VICTORY_THRESHOLD,
};

pub use crate::game::{
    ChallengeOutcome, FollowerMove, Game, LeaderMove, Registration, ReplenishSummary, RoundSummary,
    StateSnapshot, TrickOutcome, TrickRecord, VictoryClaim, CARDS_PER_HAND, REPLENISH_COUNT,
};
