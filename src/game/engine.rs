//! The turn state machine.
//!
//! A [`Game`] owns two players and rotates the active turn between them:
//!
//! ```text
//! AwaitingRoll --roll--> RoundInProgress --hold/bust--> TurnOver
//!      ^                                                   |
//!      +------------------ next_turn ----------------------+
//!                        (or GameOver when a hold wins)
//! ```
//!
//! A `Game` is built fresh per session from [`Options`] (or the builder)
//! and discarded for a new game; it is never mutated back into a starting
//! state. Calling an operation in the wrong phase is a host bug and panics.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ai::{AiDecision, AiPolicy, HoldAtThreshold, MoveToken, ScheduledMove, TurnView};
use crate::core::options::{
    GameType, Options, DEFAULT_AI_MOVE_DELAY, DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER2_NAME,
    DEFAULT_SCORE_LIMIT,
};
use crate::core::player::{Player, PlayerId};
use crate::core::rng::DiceRng;
use crate::game::events::GameEvent;
use crate::game::scoring::{score_roll, BustKind, DiceRoll};

/// Where the game is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Active player's turn, nothing rolled yet this round.
    AwaitingRoll,
    /// At least one safe roll this round; the player may roll again or hold.
    RoundInProgress,
    /// The round ended (hold or bust); waiting for `next_turn`.
    TurnOver,
    /// A hold crossed the score limit. No further moves are permitted.
    GameOver,
}

/// Builder for a [`Game`].
pub struct GameBuilder {
    game_type: GameType,
    score_limit: u32,
    player1_name: String,
    player2_name: String,
    second_player_ai: bool,
    move_delay: Duration,
    policy: Box<dyn AiPolicy>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            game_type: GameType::default(),
            score_limit: DEFAULT_SCORE_LIMIT,
            player1_name: DEFAULT_PLAYER1_NAME.to_string(),
            player2_name: DEFAULT_PLAYER2_NAME.to_string(),
            second_player_ai: false,
            move_delay: DEFAULT_AI_MOVE_DELAY,
            policy: Box::new(HoldAtThreshold::default()),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game_type(mut self, game_type: GameType) -> Self {
        self.game_type = game_type;
        self
    }

    pub fn score_limit(mut self, limit: u32) -> Self {
        assert!(limit > 0, "Score limit must be positive");
        self.score_limit = limit;
        self
    }

    pub fn player_names(mut self, player1: impl Into<String>, player2: impl Into<String>) -> Self {
        self.player1_name = player1.into();
        self.player2_name = player2.into();
        self
    }

    pub fn second_player_ai(mut self, is_ai: bool) -> Self {
        self.second_player_ai = is_ai;
        self
    }

    pub fn move_delay(mut self, delay: Duration) -> Self {
        self.move_delay = delay;
        self
    }

    pub fn ai_policy(mut self, policy: Box<dyn AiPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Build the game with a fixed RNG seed.
    pub fn build(self, seed: u64) -> Game {
        let players = [
            Player::new(self.player1_name, false),
            Player::new(self.player2_name, self.second_player_ai),
        ];

        let mut game = Game {
            players,
            active: PlayerId::One,
            game_type: self.game_type,
            score_limit: self.score_limit,
            phase: Phase::AwaitingRoll,
            winner: None,
            rng: DiceRng::new(seed),
            events: Vec::new(),
            policy: self.policy,
            move_delay: self.move_delay,
            clock: Duration::ZERO,
            pending: None,
            next_token: 0,
        };
        game.emit(GameEvent::RoundStarted {
            player: game.active,
        });
        game
    }
}

/// A single game session.
pub struct Game {
    players: [Player; 2],
    active: PlayerId,
    game_type: GameType,
    score_limit: u32,
    phase: Phase,
    winner: Option<PlayerId>,
    rng: DiceRng,
    events: Vec<GameEvent>,
    policy: Box<dyn AiPolicy>,
    move_delay: Duration,
    clock: Duration,
    pending: Option<ScheduledMove>,
    next_token: u64,
}

impl Game {
    /// Build a game from host options with a fixed seed.
    pub fn from_options(options: &Options, seed: u64) -> Self {
        assert!(options.score_limit > 0, "Score limit must be positive");
        GameBuilder::new()
            .game_type(options.game_type)
            .score_limit(options.score_limit)
            .player_names(options.player1_name.clone(), options.player2_name.clone())
            .second_player_ai(options.is_2nd_player_ai)
            .move_delay(options.ai_move_delay)
            .build(seed)
    }

    /// Build a game from host options, seeded from entropy.
    pub fn new_game(options: &Options) -> Self {
        Self::from_options(options, DiceRng::from_entropy().seed())
    }

    // === Accessors ===

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    pub fn score_limit(&self) -> u32 {
        self.score_limit
    }

    pub fn active_player_id(&self) -> PlayerId {
        self.active
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.active.index()]
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// The winner, once the game is over.
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Drain all queued events in emission order.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Snapshot of the active player's turn, for AI policies and hosts.
    pub fn turn_view(&self) -> TurnView {
        let active = self.active_player();
        let opponent = self.player(self.active.other());
        TurnView {
            round_score: active.round_score,
            total_score: active.total_score,
            opponent_total: opponent.total_score,
            score_limit: self.score_limit,
            game_type: self.game_type,
        }
    }

    // === Moves ===

    /// Roll for the active player and apply the variant's scoring rules.
    ///
    /// Panics unless the phase is `AwaitingRoll` or `RoundInProgress`.
    pub fn roll(&mut self) {
        assert!(
            matches!(self.phase, Phase::AwaitingRoll | Phase::RoundInProgress),
            "roll() called in {:?}",
            self.phase
        );
        // One action per turn: an explicit move supersedes a scheduled one.
        self.cancel_scheduled_move();

        let active = self.active;
        let game_type = self.game_type;
        let player = &mut self.players[active.index()];
        player.roll_dice(game_type, &mut self.rng);
        player.assert_dice_valid();

        let roll = match game_type {
            GameType::OneDice => DiceRoll::One(player.dice1.expect("die rolled")),
            GameType::TwoDice => DiceRoll::Two(
                player.dice1.expect("die rolled"),
                player.dice2.expect("second die rolled"),
            ),
        };
        let previous_dice = player.previous_dice;
        self.emit(GameEvent::DiceRolled {
            player: active,
            roll,
        });

        let outcome = score_roll(roll, previous_dice);
        match outcome.bust {
            BustKind::None => {
                self.players[active.index()].add_round_score(outcome.round_delta);
                self.phase = Phase::RoundInProgress;
            }
            BustKind::Round => {
                self.players[active.index()].round_score = 0;
                self.emit(GameEvent::RoundBusted {
                    player: active,
                    kind: BustKind::Round,
                });
                self.end_turn();
            }
            BustKind::Total => {
                self.players[active.index()].round_score = 0;
                self.players[active.index()].total_score = 0;
                self.emit(GameEvent::RoundBusted {
                    player: active,
                    kind: BustKind::Total,
                });
                self.end_turn();
            }
        }
    }

    /// Hold: commit the round score and end the turn, winning if the new
    /// total reaches the score limit.
    ///
    /// Panics unless the phase is `AwaitingRoll` or `RoundInProgress`.
    pub fn hold(&mut self) {
        assert!(
            matches!(self.phase, Phase::AwaitingRoll | Phase::RoundInProgress),
            "hold() called in {:?}",
            self.phase
        );
        self.cancel_scheduled_move();

        let active = self.active;
        let player = &mut self.players[active.index()];
        let committed = player.round_score;
        player.hold_round_score();
        let total = player.total_score;

        self.emit(GameEvent::RoundHeld {
            player: active,
            committed,
            total,
        });

        // Win detection happens only on hold; a bust can never reach the
        // limit in the same turn.
        if total >= self.score_limit {
            self.phase = Phase::GameOver;
            self.winner = Some(active);
            self.emit(GameEvent::GameWon {
                winner: active,
                score: total,
            });
        } else {
            self.end_turn();
        }
    }

    /// Rotate the turn to the other player after a hold or bust.
    ///
    /// Panics unless the phase is `TurnOver`.
    pub fn next_turn(&mut self) {
        assert!(
            self.phase == Phase::TurnOver,
            "next_turn() called in {:?}",
            self.phase
        );

        let from = self.active;
        let to = from.other();
        self.active = to;
        self.phase = Phase::AwaitingRoll;

        // Transient state was cleared when this player's last round ended.
        debug_assert_eq!(self.players[to.index()].round_score, 0);
        debug_assert_eq!(self.players[to.index()].dice1, None);

        self.emit(GameEvent::TurnSwitched { from, to });
        self.emit(GameEvent::RoundStarted { player: to });
    }

    // === AI scheduling ===

    /// Time on the engine's simulated clock.
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// The currently armed AI move, if any.
    pub fn scheduled_move(&self) -> Option<ScheduledMove> {
        self.pending
    }

    /// Replace the AI decision policy.
    pub fn set_ai_policy(&mut self, policy: Box<dyn AiPolicy>) {
        self.policy = policy;
    }

    /// Arm an AI move to fire after the configured delay.
    ///
    /// Does nothing (returns `None`) unless the active player is AI, a move
    /// is legal, and no move is already pending — at most one scheduled
    /// action exists per turn.
    pub fn schedule_ai_move(&mut self) -> Option<MoveToken> {
        if self.pending.is_some()
            || !self.active_player().is_ai
            || !matches!(self.phase, Phase::AwaitingRoll | Phase::RoundInProgress)
        {
            return None;
        }
        Some(self.arm_move(self.clock + self.move_delay))
    }

    /// Disarm any pending AI move. Safe to call at any time.
    pub fn cancel_scheduled_move(&mut self) {
        self.pending = None;
    }

    /// Advance the simulated clock, firing scheduled AI moves as their
    /// times pass. Each fired move asks the policy for a decision; after a
    /// roll that keeps the round alive, the next move is re-armed one delay
    /// after the previous one fired.
    pub fn advance(&mut self, dt: Duration) {
        self.clock += dt;

        while let Some(pending) = self.pending {
            if pending.fires_at > self.clock {
                break;
            }
            self.pending = None;
            let fired_at = pending.fires_at;

            let decision = self.policy.decide(&self.turn_view());
            match decision {
                AiDecision::Roll => self.roll(),
                AiDecision::Hold => self.hold(),
            }

            if self.active_player().is_ai
                && matches!(self.phase, Phase::AwaitingRoll | Phase::RoundInProgress)
            {
                self.arm_move(fired_at + self.move_delay);
            }
        }
    }

    // === Internals ===

    fn arm_move(&mut self, fires_at: Duration) -> MoveToken {
        let token = MoveToken(self.next_token);
        self.next_token += 1;
        self.pending = Some(ScheduledMove { fires_at, token });
        token
    }

    fn end_turn(&mut self) {
        self.players[self.active.index()].clear_round_state();
        self.phase = Phase::TurnOver;
        self.cancel_scheduled_move();
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("players", &self.players)
            .field("active", &self.active)
            .field("game_type", &self.game_type)
            .field("score_limit", &self.score_limit)
            .field("phase", &self.phase)
            .field("winner", &self.winner)
            .field("clock", &self.clock)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
