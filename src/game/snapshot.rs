//! Read-only views returned by engine operations.
//!
//! Every type here is serde-serializable with explicit field names so a
//! presentation layer (or a replay log) can take them straight to JSON.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Card, PlayerSlot};
use crate::rules::{CardPair, Declaration, Resolution, TrickState};

/// Confirmation of a successful registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub slot: PlayerSlot,
    pub username: String,
}

/// What a freshly dealt round looks like.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Hand sizes after the deal, indexed by slot.
    pub hand_sizes: [usize; 2],
    /// Cards left in the stock.
    pub stock_size: usize,
    /// Who leads the first trick.
    pub leader: PlayerSlot,
}

/// The leader's half of a trick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderMove {
    pub leader: PlayerSlot,
    pub pair: CardPair,
    pub declaration: Declaration,
}

/// The follower's half of a trick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowerMove {
    pub follower: PlayerSlot,
    pub pair: CardPair,
}

/// Result of resolving a trick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickOutcome {
    pub winner: PlayerSlot,
    /// Winner of this trick leads the next one.
    pub next_leader: PlayerSlot,
    /// Pattern verdict and rank comparison trail, for display.
    pub resolution: Resolution,
}

/// Cards one player drew during replenishment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDraw {
    pub slot: PlayerSlot,
    pub cards: Vec<Card>,
}

/// Per-player draws after a resolved trick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplenishSummary {
    pub draws: Vec<PlayerDraw>,
    pub stock_size: usize,
}

/// A recorded victory claim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryClaim {
    pub claimant: PlayerSlot,
    pub hand_size: usize,
}

/// Result of a successful challenge: the challenger supersedes the claimant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeOutcome {
    pub winner: PlayerSlot,
    pub superseded_claimant: PlayerSlot,
    pub hand_size: usize,
}

/// Immutable record of a resolved trick, appended to the round history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickRecord {
    pub leader: PlayerSlot,
    pub follower: PlayerSlot,
    pub leader_pair: CardPair,
    pub follower_pair: CardPair,
    pub declaration: Declaration,
    pub winner: PlayerSlot,
    pub pattern_matched: bool,
}

impl TrickRecord {
    /// Cards this trick removed from circulation.
    #[must_use]
    pub fn cards_played(&self) -> [Card; 4] {
        [
            self.leader_pair.0,
            self.leader_pair.1,
            self.follower_pair.0,
            self.follower_pair.1,
        ]
    }
}

/// One player's visible state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub slot: PlayerSlot,
    pub username: Option<String>,
    pub registered: bool,
    pub hand: Vec<Card>,
}

/// Complete read-only view of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub players: [PlayerSnapshot; 2],
    pub stock_size: usize,
    /// Designated leader for the current or next trick.
    pub leader: Option<PlayerSlot>,
    pub trick: TrickState,
    pub history: Vector<TrickRecord>,
    /// Standing victory claim, if any.
    pub claim: Option<PlayerSlot>,
}

impl StateSnapshot {
    /// Total dealt cards accounted for: hands + stock + four per trick.
    #[must_use]
    pub fn cards_accounted(&self) -> usize {
        self.players[0].hand.len()
            + self.players[1].hand.len()
            + self.stock_size
            + 4 * self.history.len()
    }
}
