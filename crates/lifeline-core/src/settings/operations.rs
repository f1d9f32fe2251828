//! Settings edits made from the settings screens.
//!
//! Each edit loads the current document, changes one typed section, and
//! saves just that section back through [`SettingsFile::save`] so every other
//! section on disk is left alone.

use std::collections::BTreeMap;

use serde_json::json;
use tracing::info;

use super::defaults::{GLOBAL_SECTION, THEMES_SECTION};
use super::errors::SettingsError;
use super::persistence::SettingsFile;
use super::types::{GameSettings, GlobalSettings};
use crate::game::{GameMode, PlayerSlot};
use crate::input::normalize_name;
use crate::sound::{self, SoundError};
use crate::theme::{self, Appearance};

fn save_game_section(
    file: &SettingsFile,
    mode: GameMode,
    settings: &GameSettings,
) -> Result<(), SettingsError> {
    file.save(json!({ mode.section_key(): settings.to_value()? }))?;
    Ok(())
}

fn save_global_section(file: &SettingsFile, global: &GlobalSettings) -> Result<(), SettingsError> {
    file.save(json!({ GLOBAL_SECTION: global.to_value()? }))?;
    Ok(())
}

/// Save both player names. Blank names fall back to "Player 1" / "Player 2".
pub fn set_player_names(
    file: &SettingsFile,
    mode: GameMode,
    player1: &str,
    player2: &str,
) -> Result<GameSettings, SettingsError> {
    let mut settings = file.load().game(mode);
    settings.player1_name = normalize_name(player1, PlayerSlot::One);
    settings.player2_name = normalize_name(player2, PlayerSlot::Two);
    save_game_section(file, mode, &settings)?;

    info!(
        event = "core.settings.player_names_updated",
        mode = %mode,
        player1 = %settings.player1_name,
        player2 = %settings.player2_name
    );
    Ok(settings)
}

/// Save a single player's name.
pub fn set_player_name(
    file: &SettingsFile,
    mode: GameMode,
    slot: PlayerSlot,
    name: &str,
) -> Result<GameSettings, SettingsError> {
    let mut settings = file.load().game(mode);
    let name = normalize_name(name, slot);
    match slot {
        PlayerSlot::One => settings.player1_name = name,
        PlayerSlot::Two => settings.player2_name = name,
    }
    save_game_section(file, mode, &settings)?;
    Ok(settings)
}

/// Save a new starting total. Must be greater than zero.
pub fn set_starting_total(
    file: &SettingsFile,
    mode: GameMode,
    total: i64,
) -> Result<GameSettings, SettingsError> {
    if total <= 0 {
        return Err(SettingsError::InvalidValue {
            key: "starting_lp".to_string(),
            message: format!("{} is not greater than zero", total),
        });
    }

    let mut settings = file.load().game(mode);
    settings.starting_lp = total;
    save_game_section(file, mode, &settings)?;

    info!(
        event = "core.settings.starting_total_updated",
        mode = %mode,
        starting_lp = total
    );
    Ok(settings)
}

/// Select a named sound theme; every effect switches to that theme's folder.
pub fn set_sound_theme(
    file: &SettingsFile,
    mode: GameMode,
    theme_name: &str,
) -> Result<GameSettings, SoundError> {
    let mut settings = file.load().game(mode);
    sound::select_sound_theme(&mut settings, theme_name)?;
    save_game_section(file, mode, &settings)?;

    info!(
        event = "core.settings.sound_theme_selected",
        mode = %mode,
        theme = %settings.theme
    );
    Ok(settings)
}

/// Switch to the `Custom` sound theme with per-effect theme choices.
pub fn set_custom_sound_theme(
    file: &SettingsFile,
    mode: GameMode,
    overrides: &BTreeMap<String, String>,
) -> Result<GameSettings, SoundError> {
    let mut settings = file.load().game(mode);
    sound::customize_sound_theme(&mut settings, overrides)?;
    save_game_section(file, mode, &settings)?;

    info!(
        event = "core.settings.sound_theme_customized",
        mode = %mode,
        effects = settings.sound_paths.len()
    );
    Ok(settings)
}

pub fn set_volume(file: &SettingsFile, volume: f64) -> Result<GlobalSettings, SettingsError> {
    let mut global = file.load().global();
    global.set_volume(volume)?;
    save_global_section(file, &global)?;
    Ok(global)
}

pub fn set_appearance(
    file: &SettingsFile,
    appearance: Appearance,
) -> Result<GlobalSettings, SettingsError> {
    let mut global = file.load().global();
    global.selected_theme = appearance;
    save_global_section(file, &global)?;
    Ok(global)
}

/// Flip the dark-mode switch.
pub fn toggle_appearance(file: &SettingsFile) -> Result<GlobalSettings, SettingsError> {
    let current = file.load().global().selected_theme;
    set_appearance(file, current.toggle())
}

/// Select a colour palette by name.
pub fn set_palette(file: &SettingsFile, name: &str) -> Result<&'static str, SettingsError> {
    let palette = theme::find_palette(name).ok_or_else(|| SettingsError::InvalidValue {
        key: "themes.selected".to_string(),
        message: format!(
            "unknown palette '{}'. Available: {}",
            name,
            theme::palette_names().join(", ")
        ),
    })?;
    file.save(json!({ THEMES_SECTION: { "selected": palette.name } }))?;
    Ok(palette.name)
}
