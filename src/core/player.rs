//! Player identification and per-player score state.
//!
//! Pig is strictly two-player: `PlayerId` selects one of the two seats and
//! `other()` rotates the turn. `Player` is a flat value type holding the
//! persistent total score and the transient round state (current dice,
//! previous die, uncommitted round score).

use serde::{Deserialize, Serialize};

use super::options::GameType;
use super::rng::{DiceRng, DIE_MAX, DIE_MIN};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// First player, takes the opening turn.
    One,
    /// Second player, optionally AI-controlled.
    Two,
}

impl PlayerId {
    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 0-based index, for `[Player; 2]` storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::One => write!(f, "Player 1"),
            PlayerId::Two => write!(f, "Player 2"),
        }
    }
}

/// Per-player game state.
///
/// `round_score` accumulates during a round and is committed into
/// `total_score` by [`Player::hold_round_score`], or discarded on a bust.
/// Dice fields are `None` before the round's first roll; `dice2` stays
/// `None` in the one-dice variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name, no rule effect.
    pub name: String,
    /// Whether this player's moves are driven by the AI scheduler.
    pub is_ai: bool,
    /// Current roll's first die.
    pub dice1: Option<u8>,
    /// Current roll's second die (two-dice variant only).
    pub dice2: Option<u8>,
    /// `dice1` of the immediately preceding roll within this round.
    pub previous_dice: Option<u8>,
    /// Accumulated but uncommitted score for the current round.
    pub round_score: u32,
    /// Committed score across all held rounds.
    pub total_score: u32,
}

impl Player {
    /// Create a player with empty round state and zero scores.
    #[must_use]
    pub fn new(name: impl Into<String>, is_ai: bool) -> Self {
        Self {
            name: name.into(),
            is_ai,
            dice1: None,
            dice2: None,
            previous_dice: None,
            round_score: 0,
            total_score: 0,
        }
    }

    /// Roll the dice for the active variant.
    ///
    /// Moves the current `dice1` into `previous_dice`, then draws a fresh
    /// `dice1` (and `dice2` in the two-dice variant). `dice2` is left unset
    /// in the one-dice variant.
    pub fn roll_dice(&mut self, game_type: GameType, rng: &mut DiceRng) {
        self.previous_dice = self.dice1;
        self.dice1 = Some(rng.roll_die());
        self.dice2 = match game_type {
            GameType::OneDice => None,
            GameType::TwoDice => Some(rng.roll_die()),
        };
    }

    /// Add to the round score.
    ///
    /// No upper bound is enforced here; bust and score-limit logic belong
    /// to the game engine.
    pub fn add_round_score(&mut self, amount: u32) {
        self.round_score += amount;
    }

    /// Commit the round score into the total score and reset it.
    ///
    /// Idempotent when the round score is already 0.
    pub fn hold_round_score(&mut self) {
        self.total_score += self.round_score;
        self.round_score = 0;
    }

    /// Full state reset: clears dice, previous die, round score AND total
    /// score. Used when starting over, not for normal round transitions.
    pub fn clear_state_after_round(&mut self) {
        self.clear_round_state();
        self.total_score = 0;
    }

    /// Clear the transient round state (dice, previous die, round score),
    /// leaving the total score committed. Called at every turn end so the
    /// next round starts clean.
    pub fn clear_round_state(&mut self) {
        self.dice1 = None;
        self.dice2 = None;
        self.previous_dice = None;
        self.round_score = 0;
    }

    /// Panics if any stored die face is outside [1,6].
    pub(crate) fn assert_dice_valid(&self) {
        for die in [self.dice1, self.dice2, self.previous_dice].into_iter().flatten() {
            assert!(
                (DIE_MIN..=DIE_MAX).contains(&die),
                "Die face {die} outside [1,6]"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rolled_player(game_type: GameType) -> (Player, DiceRng) {
        let mut rng = DiceRng::new(42);
        let mut player = Player::new("TestPlayer", false);
        player.roll_dice(game_type, &mut rng);
        (player, rng)
    }

    #[test]
    fn test_player_id_other() {
        assert_eq!(PlayerId::One.other(), PlayerId::Two);
        assert_eq!(PlayerId::Two.other(), PlayerId::One);
        assert_eq!(format!("{}", PlayerId::One), "Player 1");
    }

    #[test]
    fn test_first_throw_two_dice() {
        let (player, _) = rolled_player(GameType::TwoDice);

        assert_eq!(player.previous_dice, None);

        let dice1 = player.dice1.expect("dice1 set after the first throw");
        assert!((1..=6).contains(&dice1));

        let dice2 = player.dice2.expect("dice2 set after the first throw");
        assert!((1..=6).contains(&dice2));
    }

    #[test]
    fn test_first_throw_one_dice() {
        let (player, _) = rolled_player(GameType::OneDice);

        assert_eq!(player.previous_dice, None);
        assert!(player.dice1.is_some());
        assert_eq!(player.dice2, None, "dice2 stays unset in one-dice games");
    }

    #[test]
    fn test_next_throw_captures_previous_dice() {
        let (mut player, mut rng) = rolled_player(GameType::TwoDice);
        let first = player.dice1;

        player.roll_dice(GameType::TwoDice, &mut rng);

        assert_eq!(player.previous_dice, first);
        assert!(player.dice1.is_some());
        assert!(player.dice2.is_some());
    }

    #[test]
    fn test_scores_flow() {
        let (mut player, _) = rolled_player(GameType::TwoDice);

        player.add_round_score(player.dice1.unwrap() as u32 + player.dice2.unwrap() as u32);
        player.hold_round_score();

        assert!(player.total_score > 0);
        assert_eq!(player.round_score, 0);
    }

    #[test]
    fn test_hold_is_idempotent() {
        let mut player = Player::new("TestPlayer", false);
        player.add_round_score(12);

        player.hold_round_score();
        assert_eq!(player.total_score, 12);

        player.hold_round_score();
        assert_eq!(player.total_score, 12);
        assert_eq!(player.round_score, 0);
    }

    #[test]
    fn test_clear_state_after_round_is_full_reset() {
        let (mut player, _) = rolled_player(GameType::TwoDice);
        player.add_round_score(8);
        player.hold_round_score();
        assert!(player.total_score > 0);

        player.clear_state_after_round();

        assert_eq!(player.dice1, None);
        assert_eq!(player.dice2, None);
        assert_eq!(player.previous_dice, None);
        assert_eq!(player.round_score, 0);
        assert_eq!(player.total_score, 0);
    }

    #[test]
    fn test_clear_round_state_keeps_total() {
        let (mut player, _) = rolled_player(GameType::TwoDice);
        player.add_round_score(8);
        player.hold_round_score();

        player.clear_round_state();

        assert_eq!(player.dice1, None);
        assert_eq!(player.round_score, 0);
        assert_eq!(player.total_score, 8);
    }

    #[test]
    fn test_player_serde_round_trip() {
        let (player, _) = rolled_player(GameType::TwoDice);
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
