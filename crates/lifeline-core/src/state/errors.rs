use crate::errors::LifelineError;
use crate::game::GameError;
use crate::settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl LifelineError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::Game(e) => e.error_code(),
            DispatchError::Settings(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DispatchError::Game(e) => e.is_user_error(),
            DispatchError::Settings(e) => e.is_user_error(),
        }
    }
}
