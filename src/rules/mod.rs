//! Pure rules: pattern matching, trick resolution, victory adjudication.
//!
//! Everything in this module is a function of its arguments; the stateful
//! orchestration lives in `game`.

pub mod pattern;
pub mod trick;
pub mod victory;

pub use pattern::{matches, PatternClass};
pub use trick::{
    resolve, CardPair, CompareResult, Comparison, Declaration, PairPosition, Resolution,
    TrickState, TrickWinner,
};
pub use victory::{adjudicate, VICTORY_THRESHOLD};
