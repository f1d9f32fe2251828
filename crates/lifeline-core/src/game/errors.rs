use crate::errors::LifelineError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error("Unknown game mode '{mode}'. Supported modes: yugioh, mtg")]
    UnknownMode { mode: String },

    #[error("Invalid player '{input}'. Use 1 or 2")]
    InvalidPlayer { input: String },

    #[error("Starting total must be greater than zero, got {total}")]
    InvalidStartingTotal { total: i64 },
}

impl LifelineError for GameError {
    fn error_code(&self) -> &'static str {
        match self {
            GameError::UnknownMode { .. } => "GAME_UNKNOWN_MODE",
            GameError::InvalidPlayer { .. } => "GAME_INVALID_PLAYER",
            GameError::InvalidStartingTotal { .. } => "GAME_INVALID_STARTING_TOTAL",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
