//! Variant scoring rules.
//!
//! The whole rule difference between the one-dice and two-dice games lives
//! in [`score_roll`], a pure function from a roll to a round-score delta
//! plus a bust classification. The turn-switching logic in the engine
//! consumes the outcome uniformly and never branches on the variant itself.
//!
//! The double-6 rules are deliberately asymmetric between variants:
//! one-dice checks 6s across two consecutive rolls (via the previous die),
//! two-dice checks both dice of a single roll.

use serde::{Deserialize, Serialize};

use crate::core::options::GameType;
use crate::core::rng::{DIE_MAX, DIE_MIN};

/// Face values produced by one roll. The shape encodes the variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiceRoll {
    /// One-dice variant: a single face.
    One(u8),
    /// Two-dice variant: two independent faces.
    Two(u8, u8),
}

impl DiceRoll {
    /// The variant this roll belongs to.
    #[must_use]
    pub fn game_type(self) -> GameType {
        match self {
            DiceRoll::One(_) => GameType::OneDice,
            DiceRoll::Two(_, _) => GameType::TwoDice,
        }
    }

    fn assert_valid(self) {
        let check = |d: u8| {
            assert!(
                (DIE_MIN..=DIE_MAX).contains(&d),
                "Die face {d} outside [1,6]"
            );
        };
        match self {
            DiceRoll::One(d) => check(d),
            DiceRoll::Two(d1, d2) => {
                check(d1);
                check(d2);
            }
        }
    }
}

/// How a roll ended the round, if it did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BustKind {
    /// Round continues; the delta is added to the round score.
    #[default]
    None,
    /// Simple bust: the round score is discarded, the turn ends.
    Round,
    /// Double bust: the round score AND the committed total are zeroed.
    Total,
}

/// Result of scoring one roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Amount to add to the round score. Always 0 on a bust.
    pub round_delta: u32,
    /// Whether and how the roll busted.
    pub bust: BustKind,
}

/// Score a roll under the variant's rules.
///
/// `previous_dice` is the first die of the preceding roll within the same
/// round (one-dice variant only; the two-dice rules never look back).
///
/// One-dice, face `d`:
/// - `d == 1`: round bust.
/// - `d == 6` with the previous roll also 6: total bust.
/// - otherwise: add `d`.
///
/// Two-dice, faces `d1`, `d2` (the 1-check takes precedence over the
/// double-6 check):
/// - either die 1 (including 1,1): round bust.
/// - `d1 == d2 == 6`: total bust.
/// - otherwise: add `d1 + d2`.
///
/// Faces outside [1,6] are a contract violation and panic.
#[must_use]
pub fn score_roll(roll: DiceRoll, previous_dice: Option<u8>) -> RollOutcome {
    roll.assert_valid();

    match roll {
        DiceRoll::One(1) => RollOutcome {
            round_delta: 0,
            bust: BustKind::Round,
        },
        DiceRoll::One(6) if previous_dice == Some(6) => RollOutcome {
            round_delta: 0,
            bust: BustKind::Total,
        },
        DiceRoll::One(d) => RollOutcome {
            round_delta: d as u32,
            bust: BustKind::None,
        },
        DiceRoll::Two(d1, d2) if d1 == 1 || d2 == 1 => RollOutcome {
            round_delta: 0,
            bust: BustKind::Round,
        },
        DiceRoll::Two(6, 6) => RollOutcome {
            round_delta: 0,
            bust: BustKind::Total,
        },
        DiceRoll::Two(d1, d2) => RollOutcome {
            round_delta: (d1 + d2) as u32,
            bust: BustKind::None,
        },
    }
}
