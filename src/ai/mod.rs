//! AI decision policies and scheduled-move bookkeeping.
//!
//! Policies are trait-based so strategy stays testable independent of
//! timing: the engine asks `decide` against a snapshot of the turn, and the
//! delay that simulates "thinking" is handled separately by the engine's
//! simulated clock (`Game::advance`). Nothing here touches wall-clock time.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::options::GameType;

/// What the AI chose to do with its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiDecision {
    /// Roll again.
    Roll,
    /// Commit the round score and end the turn.
    Hold,
}

/// Snapshot of the active player's turn, as seen by a policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnView {
    /// Uncommitted score for the current round.
    pub round_score: u32,
    /// The active player's committed total.
    pub total_score: u32,
    /// The opponent's committed total.
    pub opponent_total: u32,
    /// Win threshold for this game.
    pub score_limit: u32,
    /// Active rule set.
    pub game_type: GameType,
}

/// Pluggable AI decision function.
pub trait AiPolicy: Send + Sync {
    /// Decide whether to roll again or hold, given the current turn.
    fn decide(&self, view: &TurnView) -> AiDecision;
}

/// Roll until the round score reaches a threshold, then hold.
///
/// Also holds early whenever holding would win outright.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoldAtThreshold {
    /// Round score at which to stop pressing luck.
    pub threshold: u32,
}

impl Default for HoldAtThreshold {
    fn default() -> Self {
        // The classic "hold at 20" Pig heuristic.
        Self { threshold: 20 }
    }
}

impl AiPolicy for HoldAtThreshold {
    fn decide(&self, view: &TurnView) -> AiDecision {
        // Holding an empty round would end the turn for nothing.
        if view.round_score == 0 {
            return AiDecision::Roll;
        }
        if view.total_score + view.round_score >= view.score_limit {
            return AiDecision::Hold;
        }
        if view.round_score >= self.threshold {
            AiDecision::Hold
        } else {
            AiDecision::Roll
        }
    }
}

/// Roll every time; never hold voluntarily.
///
/// Ends rounds only by busting. Useful as a stress policy in tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlwaysRoll;

impl AiPolicy for AlwaysRoll {
    fn decide(&self, _view: &TurnView) -> AiDecision {
        AiDecision::Roll
    }
}

/// Identifies one scheduled AI move.
///
/// Tokens increase monotonically per game; a cancelled token never fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveToken(pub u64);

/// A pending AI move, armed to fire on the engine's simulated clock.
///
/// The engine keeps at most one of these per turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledMove {
    /// Clock time at which the move fires.
    pub fires_at: Duration,
    /// Cancellation token for this move.
    pub token: MoveToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(round_score: u32, total_score: u32, score_limit: u32) -> TurnView {
        TurnView {
            round_score,
            total_score,
            opponent_total: 0,
            score_limit,
            game_type: GameType::TwoDice,
        }
    }

    #[test]
    fn test_hold_at_threshold_rolls_below() {
        let policy = HoldAtThreshold::default();
        assert_eq!(policy.decide(&view(0, 0, 100)), AiDecision::Roll);
        assert_eq!(policy.decide(&view(19, 40, 100)), AiDecision::Roll);
    }

    #[test]
    fn test_hold_at_threshold_holds_at_threshold() {
        let policy = HoldAtThreshold::default();
        assert_eq!(policy.decide(&view(20, 0, 100)), AiDecision::Hold);
        assert_eq!(policy.decide(&view(31, 40, 100)), AiDecision::Hold);
    }

    #[test]
    fn test_holds_when_hold_would_win() {
        let policy = HoldAtThreshold::default();
        // 5 below threshold, but enough to cross the limit.
        assert_eq!(policy.decide(&view(5, 96, 100)), AiDecision::Hold);
    }

    #[test]
    fn test_zero_round_score_never_holds() {
        let policy = HoldAtThreshold { threshold: 0 };
        // Even a degenerate threshold of 0 must roll at least once;
        // holding nothing would loop forever.
        assert_eq!(policy.decide(&view(0, 99, 100)), AiDecision::Roll);
    }

    #[test]
    fn test_always_roll() {
        assert_eq!(AlwaysRoll.decide(&view(50, 99, 100)), AiDecision::Roll);
    }
}
