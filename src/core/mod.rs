//! Core engine types: players, dice RNG, options.
//!
//! These are the building blocks the game state machine is assembled from.
//! Nothing here knows about turns or bust rules; that lives in `game`.

pub mod options;
pub mod player;
pub mod rng;

pub use options::{GameType, Language, Options};
pub use player::{Player, PlayerId};
pub use rng::{DiceRng, DiceRngState, DIE_MAX, DIE_MIN};
