//! Typed views over sections of the settings document.
//!
//! The document itself stays a JSON object so unknown keys survive a
//! load/save cycle. These types are read out of it field by field, with any
//! missing or mistyped field falling back to its default.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use super::defaults::{DEFAULT_VOLUME, default_sound_theme};
use super::errors::SettingsError;
use crate::game::{GameMode, PlayerSlot};
use crate::theme::Appearance;

/// Settings for one game mode (`yugioh` or `mtg` section).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub player1_name: String,
    pub player2_name: String,
    pub starting_lp: i64,
    /// Sound theme display name, or `Custom`.
    pub theme: String,
    /// Sound effect key to theme folder.
    #[serde(default)]
    pub sound_paths: BTreeMap<String, String>,
}

impl GameSettings {
    pub fn defaults_for(mode: GameMode) -> Self {
        let sound_paths = match mode {
            GameMode::YuGiOh => crate::sound::SoundEffect::ALL
                .iter()
                .map(|effect| {
                    (
                        effect.key().to_string(),
                        super::defaults::DEFAULT_SOUND_FOLDER.to_string(),
                    )
                })
                .collect(),
            GameMode::Mtg => BTreeMap::new(),
        };

        Self {
            player1_name: PlayerSlot::One.default_name().to_string(),
            player2_name: PlayerSlot::Two.default_name().to_string(),
            starting_lp: mode.default_starting_total(),
            theme: default_sound_theme(mode).to_string(),
            sound_paths,
        }
    }

    /// Read a game section, defaulting each field that is missing or mistyped.
    pub fn from_section(mode: GameMode, section: Option<&Map<String, Value>>) -> Self {
        let mut settings = Self::defaults_for(mode);
        let Some(section) = section else {
            return settings;
        };

        if let Some(name) = read_field(mode, section, "player1_name", Value::as_str) {
            settings.player1_name = name.to_string();
        }
        if let Some(name) = read_field(mode, section, "player2_name", Value::as_str) {
            settings.player2_name = name.to_string();
        }
        if let Some(total) = read_field(mode, section, "starting_lp", Value::as_i64) {
            if total > 0 {
                settings.starting_lp = total;
            } else {
                warn!(
                    event = "core.settings.starting_total_invalid",
                    mode = %mode,
                    starting_lp = total,
                    "Stored starting total is not positive, using default"
                );
            }
        }
        if let Some(theme) = read_field(mode, section, "theme", Value::as_str) {
            settings.theme = theme.to_string();
        }
        if let Some(paths) = read_field(mode, section, "sound_paths", Value::as_object) {
            settings.sound_paths = paths
                .iter()
                .filter_map(|(key, folder)| {
                    folder.as_str().map(|f| (key.clone(), f.to_string()))
                })
                .collect();
        }

        settings
    }

    pub fn player_name(&self, slot: PlayerSlot) -> &str {
        match slot {
            PlayerSlot::One => &self.player1_name,
            PlayerSlot::Two => &self.player2_name,
        }
    }

    pub fn to_value(&self) -> Result<Value, SettingsError> {
        section_value(self)
    }
}

fn read_field<'a, T>(
    mode: GameMode,
    section: &'a Map<String, Value>,
    key: &str,
    extract: impl Fn(&'a Value) -> Option<T>,
) -> Option<T> {
    let value = section.get(key)?;
    let extracted = extract(value);
    if extracted.is_none() {
        warn!(
            event = "core.settings.field_mistyped",
            mode = %mode,
            key = key,
            found = %value,
            "Settings field has the wrong type, using default"
        );
    }
    extracted
}

/// Settings shared by every game mode (`global` section).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    pub selected_theme: Appearance,
    pub volume: f64,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            selected_theme: Appearance::default(),
            volume: DEFAULT_VOLUME,
        }
    }
}

impl GlobalSettings {
    pub fn from_section(section: Option<&Map<String, Value>>) -> Self {
        let mut settings = Self::default();
        let Some(section) = section else {
            return settings;
        };

        if let Some(appearance) = section
            .get("selected_theme")
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<Appearance>().ok())
        {
            settings.selected_theme = appearance;
        }
        if let Some(volume) = section
            .get("volume")
            .and_then(Value::as_f64)
            .filter(|v| is_valid_volume(*v))
        {
            settings.volume = volume;
        }

        settings
    }

    /// Set the volume, rounded to two decimals.
    pub fn set_volume(&mut self, volume: f64) -> Result<(), SettingsError> {
        if !is_valid_volume(volume) {
            return Err(SettingsError::InvalidValue {
                key: "volume".to_string(),
                message: format!("{} is not between 0 and 1", volume),
            });
        }
        self.volume = (volume * 100.0).round() / 100.0;
        Ok(())
    }

    pub fn to_value(&self) -> Result<Value, SettingsError> {
        section_value(self)
    }
}

/// Serialize a typed section for saving. A section that cannot be
/// serialized is a save failure, never a null that would overwrite the
/// section on disk.
fn section_value<T: Serialize>(section: &T) -> Result<Value, SettingsError> {
    serde_json::to_value(section).map_err(|e| SettingsError::SaveFailed {
        message: format!("could not serialize settings section: {}", e),
    })
}

pub(crate) fn is_valid_volume(volume: f64) -> bool {
    volume.is_finite() && (0.0..=1.0).contains(&volume)
}
