//! Pattern classification of two-card pairs.
//!
//! Every pair falls into exactly one class, checked in priority order:
//!
//! 1. **Flush** - both cards share a suit.
//! 2. **Color** - same color, different suits.
//! 3. **Mixed** - different colors.
//!
//! The follower must replicate the leader's class, including the concrete
//! suit for a Flush and the concrete color for a Color. Classification is
//! order-insensitive within the pair, so it does not matter which of the two
//! cards a player picked first.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Card, Color, Suit};

/// Suit/color relationship of a two-card pair.
///
/// Payloads carry the shared suit or color, so plain equality between a
/// leader's and a follower's class is the whole matching rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternClass {
    /// Both cards share this suit.
    Flush(Suit),
    /// Same color, different suits.
    Color(Color),
    /// One red card and one black card.
    Mixed,
}

impl PatternClass {
    /// Classify a pair.
    ///
    /// ```
    /// use toucan::core::{Card, Color, Rank, Suit};
    /// use toucan::rules::PatternClass;
    ///
    /// let pair = (
    ///     Card::new(Suit::Hearts, Rank::King),
    ///     Card::new(Suit::Diamonds, Rank::Two),
    /// );
    /// assert_eq!(PatternClass::classify(pair), PatternClass::Color(Color::Red));
    /// ```
    #[must_use]
    pub fn classify(pair: (Card, Card)) -> Self {
        let (a, b) = pair;
        if a.suit == b.suit {
            PatternClass::Flush(a.suit)
        } else if a.color() == b.color() {
            PatternClass::Color(a.color())
        } else {
            PatternClass::Mixed
        }
    }
}

impl fmt::Display for PatternClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternClass::Flush(suit) => write!(f, "two cards of {suit}"),
            PatternClass::Color(Color::Red) => write!(f, "two red cards of different suits"),
            PatternClass::Color(Color::Black) => write!(f, "two black cards of different suits"),
            PatternClass::Mixed => write!(f, "one red and one black card"),
        }
    }
}

/// Whether the follower's pair satisfies the leader's pattern class.
///
/// Pure and symmetric in pair order: swapping the two cards inside either
/// pair never changes the result.
#[must_use]
pub fn matches(leader: (Card, Card), follower: (Card, Card)) -> bool {
    PatternClass::classify(leader) == PatternClass::classify(follower)
}
