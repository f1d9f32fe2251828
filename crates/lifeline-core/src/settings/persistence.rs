use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{error, info, warn};

use super::document::SettingsDocument;
use super::errors::SettingsError;
use super::loading::load_settings;
use super::merge::deep_merge;

/// Env var that points at a specific settings file.
pub const CONFIG_FILE_ENV: &str = "LIFELINE_CONFIG_FILE";

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Resolve where the settings file lives.
///
/// Order: explicit path, `LIFELINE_CONFIG_FILE`, `./config.json` when it
/// already exists, then the per-user config directory. Falls back to
/// `./config.json` if the user directory cannot be determined.
pub fn settings_file_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Ok(path_str) = std::env::var(CONFIG_FILE_ENV)
        && !path_str.is_empty()
    {
        return PathBuf::from(path_str);
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }

    match dirs::config_dir() {
        Some(dir) => dir.join("lifeline").join(CONFIG_FILE_NAME),
        None => {
            warn!(
                event = "core.settings.config_dir_not_found",
                fallback = CONFIG_FILE_NAME,
                "Could not determine user config directory - using current directory"
            );
            local
        }
    }
}

/// Read and parse the settings file.
///
/// Returns `Ok(None)` when the file does not exist. A file that parses to
/// anything other than a JSON object is treated as a parse failure.
pub fn read_document(path: &Path) -> Result<Option<Map<String, Value>>, SettingsError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|e| SettingsError::ReadFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => Ok(Some(map)),
        Ok(other) => Err(SettingsError::ParseFailed {
            path: path.display().to_string(),
            message: format!("expected a JSON object, found {}", json_kind(&other)),
        }),
        Err(e) => Err(SettingsError::ParseFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        }),
    }
}

/// Write the whole document as pretty JSON with 4-space indentation.
pub fn write_document(path: &Path, document: &Map<String, Value>) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| SettingsError::SaveFailed {
            message: format!("Failed to create directory ({}): {}", parent.display(), e),
        })?;
    }

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document
        .serialize(&mut serializer)
        .map_err(|e| SettingsError::SaveFailed {
            message: format!("Failed to serialize settings: {}", e),
        })?;

    std::fs::write(path, buffer).map_err(|e| SettingsError::SaveFailed {
        message: format!("Failed to write settings file ({}): {}", path.display(), e),
    })
}

/// Merge a partial update into the settings file on disk.
///
/// The current file is read first (a missing or corrupt file counts as an
/// empty document), `partial` is merged into it recursively, and the result
/// is written back. Sections not named in `partial` are left exactly as they
/// were on disk. Returns the document that was written.
pub fn save_settings(path: &Path, partial: Value) -> Result<Map<String, Value>, SettingsError> {
    let update = match partial {
        Value::Object(update) => update,
        other => {
            return Err(SettingsError::InvalidValue {
                key: "<root>".to_string(),
                message: format!(
                    "settings update must be a JSON object, found {}",
                    json_kind(&other)
                ),
            });
        }
    };

    let mut current = match read_document(path) {
        Ok(Some(map)) => map,
        Ok(None) => Map::new(),
        Err(e) => {
            error!(
                event = "core.settings.read_before_save_failed",
                path = %path.display(),
                error = %e,
                "Existing settings could not be read, saving over them"
            );
            Map::new()
        }
    };

    let sections: Vec<String> = update.keys().cloned().collect();
    deep_merge(&mut current, update);
    write_document(path, &current)?;

    info!(
        event = "core.settings.saved",
        path = %path.display(),
        sections = ?sections
    );

    Ok(current)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A settings file at a fixed, already-resolved path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the path with [`settings_file_path`].
    pub fn resolve(explicit: Option<&Path>) -> Self {
        Self::new(settings_file_path(explicit))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> SettingsDocument {
        load_settings(&self.path)
    }

    pub fn save(&self, partial: Value) -> Result<Map<String, Value>, SettingsError> {
        save_settings(&self.path, partial)
    }
}

/// Test utilities for settings persistence.
///
/// Public so the CLI crate can use the env lock/guard in its tests.
#[doc(hidden)]
pub mod test_helpers {
    use std::sync::Mutex;

    /// Mutex to serialize tests that modify LIFELINE_CONFIG_FILE env var.
    pub static CONFIG_FILE_ENV_LOCK: Mutex<()> = Mutex::new(());

    /// RAII guard that removes LIFELINE_CONFIG_FILE env var on drop.
    pub struct ConfigFileEnvGuard;

    impl ConfigFileEnvGuard {
        pub fn new(path: &std::path::Path) -> Self {
            // SAFETY: Caller must hold CONFIG_FILE_ENV_LOCK to serialize access
            // from Rust test code.
            unsafe { std::env::set_var(super::CONFIG_FILE_ENV, path) };
            Self
        }
    }

    impl Drop for ConfigFileEnvGuard {
        fn drop(&mut self) {
            // SAFETY: Caller must hold CONFIG_FILE_ENV_LOCK throughout guard
            // lifetime. See safety comment in new().
            unsafe { std::env::remove_var(super::CONFIG_FILE_ENV) };
        }
    }
}
