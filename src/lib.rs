//! # pig-dice
//!
//! A turn-based two-player Pig dice engine. The crate is UI-free: a host
//! (mobile app, TUI, test harness) constructs a [`Game`] from [`Options`],
//! drives it with `roll`/`hold`/`next_turn`, and renders the [`GameEvent`]s
//! the engine queues after every transition.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: no rendering, persistence, or localization. The host
//!    owns those and consumes the engine's events and state.
//!
//! 2. **Deterministic**: dice come from a seedable ChaCha8 RNG, so whole
//!    games replay exactly from a seed.
//!
//! 3. **Policy over timers**: the AI's strategy is a pluggable
//!    [`AiPolicy`], and its "thinking" delay runs on a simulated clock
//!    (`Game::advance`), so auto-play is testable without real time.
//!
//! ## Modules
//!
//! - `core`: players, dice RNG, host options
//! - `game`: scoring rules, events, the turn state machine
//! - `ai`: decision policies and scheduled-move types
//!
//! ## Example
//!
//! ```
//! use pig_dice::{GameBuilder, GameType};
//!
//! let mut game = GameBuilder::new()
//!     .game_type(GameType::OneDice)
//!     .score_limit(20)
//!     .build(42);
//!
//! game.roll();
//! for event in game.drain_events() {
//!     println!("{event:?}");
//! }
//! ```

pub mod ai;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    DiceRng, DiceRngState, GameType, Language, Options, Player, PlayerId,
};

pub use crate::game::{
    score_roll, BustKind, DiceRoll, Game, GameBuilder, GameEvent, Phase, RollOutcome,
};

pub use crate::ai::{
    AiDecision, AiPolicy, AlwaysRoll, HoldAtThreshold, MoveToken, ScheduledMove, TurnView,
};
