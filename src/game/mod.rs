//! The game state machine and its read-only views.

pub mod engine;
pub mod snapshot;

pub use engine::{Game, CARDS_PER_HAND, REPLENISH_COUNT};
pub use snapshot::{
    ChallengeOutcome, FollowerMove, LeaderMove, PlayerDraw, PlayerSnapshot, Registration,
    ReplenishSummary, RoundSummary, StateSnapshot, TrickOutcome, TrickRecord, VictoryClaim,
};
