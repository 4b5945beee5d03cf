//! Engine-to-host notifications.
//!
//! The engine queues a [`GameEvent`] for every state transition; the host
//! drains the queue after each call and renders alerts, animations, or
//! sounds from it. Events are discrete signals, never polled state.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::game::scoring::{BustKind, DiceRoll};

/// A discrete state-change signal emitted by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player's round began (game start or after a turn switch).
    RoundStarted { player: PlayerId },
    /// The active player rolled.
    DiceRolled { player: PlayerId, roll: DiceRoll },
    /// The active player held, committing the round score.
    RoundHeld {
        player: PlayerId,
        committed: u32,
        total: u32,
    },
    /// The round ended on an unfavorable roll.
    ///
    /// `kind` is never [`BustKind::None`].
    RoundBusted { player: PlayerId, kind: BustKind },
    /// The turn rotated to the other player.
    TurnSwitched { from: PlayerId, to: PlayerId },
    /// A hold pushed the player past the score limit.
    GameWon { winner: PlayerId, score: u32 },
}
