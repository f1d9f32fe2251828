use crate::errors::LifelineError;
use crate::settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum SoundError {
    #[error("Unknown sound theme '{theme}'. Available: {available}")]
    UnknownTheme { theme: String, available: String },

    #[error("Unknown sound effect '{key}'. Expected one of: LP_counting, LP_updated, LP_empty, Refresh")]
    UnknownEffect { key: String },

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl LifelineError for SoundError {
    fn error_code(&self) -> &'static str {
        match self {
            SoundError::UnknownTheme { .. } => "SOUND_UNKNOWN_THEME",
            SoundError::UnknownEffect { .. } => "SOUND_UNKNOWN_EFFECT",
            SoundError::Settings(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            SoundError::UnknownTheme { .. } | SoundError::UnknownEffect { .. } => true,
            SoundError::Settings(e) => e.is_user_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_display() {
        let error = SoundError::UnknownTheme {
            theme: "Rush".to_string(),
            available: "Basic, GX".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unknown sound theme 'Rush'. Available: Basic, GX"
        );
        assert_eq!(error.error_code(), "SOUND_UNKNOWN_THEME");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_settings_error_passes_through() {
        let error = SoundError::from(SettingsError::SaveFailed {
            message: "read-only".to_string(),
        });
        assert_eq!(error.error_code(), "SETTINGS_SAVE_FAILED");
        assert!(!error.is_user_error());
    }
}
