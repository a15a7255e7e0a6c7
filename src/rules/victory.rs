//! Victory adjudication.
//!
//! A claim or challenge is valid iff the hand holds at least
//! `VICTORY_THRESHOLD` cards. Both checks are read-only: no cards move.

use crate::core::{GameError, PlayerSlot};

/// Minimum hand size required to claim or challenge a win.
pub const VICTORY_THRESHOLD: usize = 27;

/// Check a hand size against the victory threshold.
///
/// Returns the hand size back on success so callers can report it.
pub fn adjudicate(slot: PlayerSlot, hand_size: usize) -> Result<usize, GameError> {
    if hand_size >= VICTORY_THRESHOLD {
        Ok(hand_size)
    } else {
        Err(GameError::InsufficientHandSize {
            slot,
            have: hand_size,
            needed: VICTORY_THRESHOLD,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(adjudicate(PlayerSlot::One, 27), Ok(27));
        assert_eq!(adjudicate(PlayerSlot::One, 52), Ok(52));
        assert_eq!(
            adjudicate(PlayerSlot::One, 26),
            Err(GameError::InsufficientHandSize {
                slot: PlayerSlot::One,
                have: 26,
                needed: 27,
            })
        );
        assert!(adjudicate(PlayerSlot::Two, 0).is_err());
    }
}
