//! Trick state and resolution.
//!
//! A trick moves through `Idle -> LeaderPlayed -> FollowerPlayed` and is then
//! resolved. Resolution is a pure function of the two pairs and the leader's
//! declaration; it carries no randomness and produces a comparison trail the
//! presentation layer can replay for the players.
//!
//! ## Resolution rules
//!
//! 1. If the follower's pair fails the leader's pattern class, the leader
//!    wins outright and no ranks are compared.
//! 2. **High**: first cards compared, higher rank wins; equal ranks fall
//!    through to the second cards, where equal ranks go to the leader.
//! 3. **Low**: second cards compared, lower rank wins; equal ranks fall
//!    through to the first cards, where equal ranks go to the leader.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, PlayerSlot};
use crate::rules::pattern::{matches, PatternClass};

/// Two cards played together, in the order the player selected them.
pub type CardPair = (Card, Card);

/// The leader's declaration, fixing which pair position is compared first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Declaration {
    High,
    Low,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Declaration::High => write!(f, "High"),
            Declaration::Low => write!(f, "Low"),
        }
    }
}

/// Parse a declaration token, case-insensitively.
impl FromStr for Declaration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Declaration::High),
            "low" => Ok(Declaration::Low),
            other => Err(format!("declaration must be 'High' or 'Low', got '{other}'")),
        }
    }
}

/// The in-progress trick, as a tagged state machine.
///
/// Exists only between the leader's move and resolution; the designated
/// next leader is tracked by the `Game`, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrickState {
    /// No cards on the table.
    Idle,
    /// The leader has played and declared; waiting on the follower.
    LeaderPlayed {
        leader: PlayerSlot,
        pair: CardPair,
        declaration: Declaration,
    },
    /// Both pairs are on the table; ready to resolve.
    FollowerPlayed {
        leader: PlayerSlot,
        pair: CardPair,
        declaration: Declaration,
        follower: PlayerSlot,
        follower_pair: CardPair,
    },
}

impl TrickState {
    /// Whether a trick is ready for `resolve`.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, TrickState::FollowerPlayed { .. })
    }
}

/// Which side of the trick won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrickWinner {
    Leader,
    Follower,
}

/// Which pair position a comparison step looked at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairPosition {
    First,
    Second,
}

/// Outcome of a single rank comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareResult {
    LeaderWins,
    FollowerWins,
    Tie,
}

/// One rank comparison in the resolution trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub position: PairPosition,
    pub leader_card: Card,
    pub follower_card: Card,
    pub result: CompareResult,
}

/// Full resolution of a trick: winner plus how it was decided.
///
/// `trail` is empty when the pattern failed (ranks were never compared).
/// A trailing `Tie` step means the leader won on the tie-break.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub winner: TrickWinner,
    pub pattern_matched: bool,
    pub leader_pattern: PatternClass,
    pub follower_pattern: PatternClass,
    pub trail: SmallVec<[Comparison; 2]>,
}

fn compare(
    position: PairPosition,
    leader_card: Card,
    follower_card: Card,
    declaration: Declaration,
) -> Comparison {
    let (l, f) = (leader_card.rank.value(), follower_card.rank.value());
    let result = match declaration {
        Declaration::High if l > f => CompareResult::LeaderWins,
        Declaration::High if l < f => CompareResult::FollowerWins,
        Declaration::Low if l < f => CompareResult::LeaderWins,
        Declaration::Low if l > f => CompareResult::FollowerWins,
        _ => CompareResult::Tie,
    };
    Comparison {
        position,
        leader_card,
        follower_card,
        result,
    }
}

/// Resolve a trick. Pure and deterministic.
///
/// ```
/// use toucan::rules::{resolve, Declaration, TrickWinner};
///
/// let leader = ("K♥".parse().unwrap(), "Q♥".parse().unwrap());
/// let follower = ("2♠".parse().unwrap(), "3♥".parse().unwrap());
///
/// // Mixed pair against a flush: pattern failure, leader wins outright.
/// let resolution = resolve(leader, Declaration::High, follower);
/// assert_eq!(resolution.winner, TrickWinner::Leader);
/// assert!(!resolution.pattern_matched);
/// ```
#[must_use]
pub fn resolve(leader: CardPair, declaration: Declaration, follower: CardPair) -> Resolution {
    let leader_pattern = PatternClass::classify(leader);
    let follower_pattern = PatternClass::classify(follower);

    if !matches(leader, follower) {
        return Resolution {
            winner: TrickWinner::Leader,
            pattern_matched: false,
            leader_pattern,
            follower_pattern,
            trail: SmallVec::new(),
        };
    }

    // Position compared first depends on the declaration; the other position
    // breaks ties, with equal ranks going to the leader.
    let (primary, secondary) = match declaration {
        Declaration::High => (
            compare(PairPosition::First, leader.0, follower.0, declaration),
            compare(PairPosition::Second, leader.1, follower.1, declaration),
        ),
        Declaration::Low => (
            compare(PairPosition::Second, leader.1, follower.1, declaration),
            compare(PairPosition::First, leader.0, follower.0, declaration),
        ),
    };

    let mut trail: SmallVec<[Comparison; 2]> = SmallVec::new();
    trail.push(primary);

    let winner = match primary.result {
        CompareResult::LeaderWins => TrickWinner::Leader,
        CompareResult::FollowerWins => TrickWinner::Follower,
        CompareResult::Tie => {
            trail.push(secondary);
            match secondary.result {
                CompareResult::FollowerWins => TrickWinner::Follower,
                CompareResult::LeaderWins | CompareResult::Tie => TrickWinner::Leader,
            }
        }
    };

    Resolution {
        winner,
        pattern_matched: true,
        leader_pattern,
        follower_pattern,
        trail,
    }
}
