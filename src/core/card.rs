//! Playing cards: suits, colors, ranks, and the canonical 52-card order.
//!
//! ## Rank ordering
//!
//! Toucan plays Ace low: A=1 up through K=13. `Rank::value()` exposes the
//! comparison value used by trick resolution.
//!
//! ## Colors
//!
//! Hearts and Diamonds are red; Clubs and Spades are black. Color is what
//! the `Color` pattern class matches on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card suit.
///
/// Declaration order is the canonical suit-major deal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All four suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// The color of this suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }
}

/// Card rank, Ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All thirteen ranks in canonical deal order (K down to A).
    pub const ALL_DESCENDING: [Rank; 13] = [
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
        Rank::Six,
        Rank::Five,
        Rank::Four,
        Rank::Three,
        Rank::Two,
        Rank::Ace,
    ];

    /// Comparison value: A=1 (lowest) through K=13 (highest).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

/// An immutable playing card.
///
/// ## Example
///
/// ```
/// use toucan::core::{Card, Color, Rank, Suit};
///
/// let card = Card::new(Suit::Hearts, Rank::King);
/// assert_eq!(card.color(), Color::Red);
/// assert_eq!(card.rank.value(), 13);
/// assert_eq!(card.to_string(), "K♥");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// The card's color.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        };
        write!(f, "{symbol}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Ace => write!(f, "A"),
            Rank::Jack => write!(f, "J"),
            Rank::Queen => write!(f, "Q"),
            Rank::King => write!(f, "K"),
            r => write!(f, "{}", r.value()),
        }
    }
}

impl fmt::Display for Card {
    /// Format like `K♥`, `10♣`, `A♠`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parse strings like `K♥`, `Kh`, `10c`, `As`.
impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit_ch = s.chars().last().ok_or("empty card string")?;
        let rank_str = &s[..s.len() - suit_ch.len_utf8()];

        let rank = match rank_str {
            "A" | "a" | "1" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" | "t" => Rank::Ten,
            "J" | "j" => Rank::Jack,
            "Q" | "q" => Rank::Queen,
            "K" | "k" => Rank::King,
            _ => return Err(format!("invalid rank: {rank_str}")),
        };

        let suit = match suit_ch {
            '♥' | 'h' | 'H' => Suit::Hearts,
            '♦' | 'd' | 'D' => Suit::Diamonds,
            '♣' | 'c' | 'C' => Suit::Clubs,
            '♠' | 's' | 'S' => Suit::Spades,
            _ => return Err(format!("invalid suit: {suit_ch}")),
        };

        Ok(Card { suit, rank })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values_ace_low() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::King.value(), 13);
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Queen < Rank::King);
    }

    #[test]
    fn test_suit_colors() {
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Clubs.color(), Color::Black);
        assert_eq!(Suit::Spades.color(), Color::Black);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Suit::Hearts, Rank::King).to_string(), "K♥");
        assert_eq!(Card::new(Suit::Clubs, Rank::Ten).to_string(), "10♣");
        assert_eq!(Card::new(Suit::Spades, Rank::Ace).to_string(), "A♠");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("K♥".parse::<Card>().unwrap(), Card::new(Suit::Hearts, Rank::King));
        assert_eq!("10c".parse::<Card>().unwrap(), Card::new(Suit::Clubs, Rank::Ten));
        assert_eq!("As".parse::<Card>().unwrap(), Card::new(Suit::Spades, Rank::Ace));
        assert!("X♥".parse::<Card>().is_err());
        assert!("".parse::<Card>().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let card = Card::new(Suit::Diamonds, Rank::Seven);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
