use crate::errors::LifelineError;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file '{path}': {message}")]
    ReadFailed { path: String, message: String },

    #[error("Settings file '{path}' is not valid JSON: {message}")]
    ParseFailed { path: String, message: String },

    #[error("Failed to save settings: {message}")]
    SaveFailed { message: String },

    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl LifelineError for SettingsError {
    fn error_code(&self) -> &'static str {
        match self {
            SettingsError::ReadFailed { .. } => "SETTINGS_READ_FAILED",
            SettingsError::ParseFailed { .. } => "SETTINGS_PARSE_FAILED",
            SettingsError::SaveFailed { .. } => "SETTINGS_SAVE_FAILED",
            SettingsError::InvalidValue { .. } => "SETTINGS_INVALID_VALUE",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            SettingsError::InvalidValue { .. } | SettingsError::ParseFailed { .. } => true,
            SettingsError::ReadFailed { .. } | SettingsError::SaveFailed { .. } => false,
        }
    }
}
