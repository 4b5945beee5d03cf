//! The game engine: scoring rules, events, and the turn state machine.

pub mod engine;
pub mod events;
pub mod scoring;

pub use engine::{Game, GameBuilder, Phase};
pub use events::GameEvent;
pub use scoring::{score_roll, BustKind, DiceRoll, RollOutcome};
