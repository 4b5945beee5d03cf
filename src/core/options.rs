//! Process-wide game options.
//!
//! Options are owned and persisted by the host application (simple
//! key-value settings); the engine only consumes the rule parameters
//! (game type, score limit, AI flag). Everything serializes with serde so
//! hosts can store it in whatever format their platform provides.
//!
//! Unrecognized enum values in persisted data fall back to the documented
//! defaults instead of failing the session.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default win threshold.
pub const DEFAULT_SCORE_LIMIT: u32 = 100;
/// Default delay before an AI-controlled move, simulating "thinking".
pub const DEFAULT_AI_MOVE_DELAY: Duration = Duration::from_secs(2);
/// Default first player name.
pub const DEFAULT_PLAYER1_NAME: &str = "Player1";
/// Default second player name.
pub const DEFAULT_PLAYER2_NAME: &str = "Player2";

/// Which rule set a game is played under. Fixed for a game's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameType {
    /// One die per roll; double 6 is checked across consecutive rolls.
    OneDice,
    /// Two dice per roll; double 6 is checked within a single roll.
    TwoDice,
}

impl Default for GameType {
    fn default() -> Self {
        GameType::TwoDice
    }
}

impl From<String> for GameType {
    fn from(value: String) -> Self {
        match value.as_str() {
            // "pigGame*" are the raw keys older saved settings used.
            "OneDice" | "pigGame1Dice" => GameType::OneDice,
            "TwoDice" | "pigGame2Dice" => GameType::TwoDice,
            _ => GameType::default(),
        }
    }
}

impl From<GameType> for String {
    fn from(value: GameType) -> Self {
        match value {
            GameType::OneDice => "OneDice".to_string(),
            GameType::TwoDice => "TwoDice".to_string(),
        }
    }
}

/// UI language. No engine effect; carried for the host's string tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    En,
    Ru,
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        match value.as_str() {
            "En" => Language::En,
            "Ru" => Language::Ru,
            _ => Language::default(),
        }
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        match value {
            Language::En => "En".to_string(),
            Language::Ru => "Ru".to_string(),
        }
    }
}

/// Host-persisted configuration.
///
/// Only `game_type`, `score_limit`, `is_2nd_player_ai`, and `ai_move_delay`
/// affect the engine; the rest is rendering/audio state the host round-trips
/// through its settings store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub language: Language,
    pub game_type: GameType,
    pub player1_name: String,
    pub player2_name: String,
    /// Win threshold; always positive.
    pub score_limit: u32,
    /// Whether player 2's turns are auto-played by the engine.
    pub is_2nd_player_ai: bool,
    /// Delay before each scheduled AI move.
    pub ai_move_delay: Duration,
    pub is_sound_enabled: bool,
    pub is_music_enabled: bool,
    pub is_vibration_enabled: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            language: Language::default(),
            game_type: GameType::default(),
            player1_name: DEFAULT_PLAYER1_NAME.to_string(),
            player2_name: DEFAULT_PLAYER2_NAME.to_string(),
            score_limit: DEFAULT_SCORE_LIMIT,
            is_2nd_player_ai: true,
            ai_move_delay: DEFAULT_AI_MOVE_DELAY,
            is_sound_enabled: true,
            is_music_enabled: true,
            is_vibration_enabled: true,
        }
    }
}

impl Options {
    /// Parse user score-limit input.
    ///
    /// Returns `None` for non-numeric or non-positive input so the caller
    /// keeps the previous value; the engine itself only ever sees validated
    /// positive limits.
    #[must_use]
    pub fn parse_score_limit(input: &str) -> Option<u32> {
        match input.trim().parse::<u32>() {
            Ok(limit) if limit > 0 => Some(limit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();

        assert_eq!(options.score_limit, 100);
        assert_eq!(options.game_type, GameType::TwoDice);
        assert_eq!(options.language, Language::En);
        assert_eq!(options.player1_name, "Player1");
        assert_eq!(options.player2_name, "Player2");
        assert_eq!(options.ai_move_delay, Duration::from_secs(2));
        assert!(options.is_2nd_player_ai);
    }

    #[test]
    fn test_serde_round_trip() {
        let options = Options {
            language: Language::Ru,
            game_type: GameType::OneDice,
            player1_name: "Alice".to_string(),
            score_limit: 50,
            is_2nd_player_ai: false,
            ..Options::default()
        };

        let json = serde_json::to_string(&options).unwrap();
        let deserialized: Options = serde_json::from_str(&json).unwrap();

        assert_eq!(options, deserialized);
    }

    #[test]
    fn test_unknown_enum_values_fall_back_to_defaults() {
        let json = r#"{"language": "Klingon", "game_type": "pigGame3Dice"}"#;
        let options: Options = serde_json::from_str(json).unwrap();

        assert_eq!(options.language, Language::En);
        assert_eq!(options.game_type, GameType::TwoDice);
    }

    #[test]
    fn test_legacy_game_type_keys() {
        let json = r#"{"game_type": "pigGame1Dice"}"#;
        let options: Options = serde_json::from_str(json).unwrap();
        assert_eq!(options.game_type, GameType::OneDice);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let options: Options = serde_json::from_str("{}").unwrap();
        assert_eq!(options, Options::default());
    }

    #[test]
    fn test_parse_score_limit() {
        assert_eq!(Options::parse_score_limit("100"), Some(100));
        assert_eq!(Options::parse_score_limit(" 20 "), Some(20));
        assert_eq!(Options::parse_score_limit("0"), None);
        assert_eq!(Options::parse_score_limit("-5"), None);
        assert_eq!(Options::parse_score_limit("twenty"), None);
        assert_eq!(Options::parse_score_limit(""), None);
    }
}
