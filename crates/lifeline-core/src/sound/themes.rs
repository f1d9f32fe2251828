use std::collections::BTreeMap;

use super::errors::SoundError;
use super::types::{
    CUSTOM_THEME, SoundEffect, find_sound_theme, folder_for_theme, sound_theme_names,
    theme_for_folder,
};
use crate::settings::GameSettings;
use crate::settings::defaults::DEFAULT_SOUND_FOLDER;

fn unknown_theme(name: &str) -> SoundError {
    SoundError::UnknownTheme {
        theme: name.trim().to_string(),
        available: format!("{}, {}", sound_theme_names().join(", "), CUSTOM_THEME),
    }
}

/// The asset folder each effect loads from under the current settings.
pub fn effect_folders(settings: &GameSettings) -> BTreeMap<SoundEffect, String> {
    let custom = settings.theme.eq_ignore_ascii_case(CUSTOM_THEME);
    let theme_folder = folder_for_theme(&settings.theme);

    SoundEffect::ALL
        .into_iter()
        .map(|effect| {
            let folder = if custom {
                settings
                    .sound_paths
                    .get(effect.key())
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_SOUND_FOLDER.to_string())
            } else {
                theme_folder.clone()
            };
            (effect, folder)
        })
        .collect()
}

/// Switch to a catalog theme, or to `Custom` keeping the current folders.
///
/// Selecting a catalog theme points every effect at that theme's folder.
pub fn select_sound_theme(settings: &mut GameSettings, name: &str) -> Result<(), SoundError> {
    if name.trim().eq_ignore_ascii_case(CUSTOM_THEME) {
        settings.theme = CUSTOM_THEME.to_string();
        return Ok(());
    }

    let theme = find_sound_theme(name).ok_or_else(|| unknown_theme(name))?;
    settings.theme = theme.name.to_string();
    settings.sound_paths = SoundEffect::ALL
        .into_iter()
        .map(|effect| (effect.key().to_string(), theme.folder.to_string()))
        .collect();
    Ok(())
}

/// Switch to `Custom` with per-effect theme choices.
///
/// `overrides` maps effect keys (`LP_counting`, ...) to catalog theme names.
/// Effects not named keep their current folder when it belongs to a catalog
/// theme, and otherwise fall back to `basic`. Nothing changes on error.
pub fn customize_sound_theme(
    settings: &mut GameSettings,
    overrides: &BTreeMap<String, String>,
) -> Result<(), SoundError> {
    let mut folders: BTreeMap<SoundEffect, String> = SoundEffect::ALL
        .into_iter()
        .map(|effect| {
            let folder = settings
                .sound_paths
                .get(effect.key())
                .filter(|folder| theme_for_folder(folder).is_some())
                .cloned()
                .unwrap_or_else(|| DEFAULT_SOUND_FOLDER.to_string());
            (effect, folder)
        })
        .collect();

    for (key, theme_name) in overrides {
        let effect: SoundEffect = key.parse()?;
        let theme = find_sound_theme(theme_name).ok_or_else(|| unknown_theme(theme_name))?;
        folders.insert(effect, theme.folder.to_string());
    }

    settings.theme = CUSTOM_THEME.to_string();
    settings.sound_paths = folders
        .into_iter()
        .map(|(effect, folder)| (effect.key().to_string(), folder))
        .collect();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameMode;

    fn ygo() -> GameSettings {
        GameSettings::defaults_for(GameMode::YuGiOh)
    }

    #[test]
    fn test_effect_folders_for_named_theme() {
        let mut settings = ygo();
        settings.theme = "Vrains".to_string();
        let folders = effect_folders(&settings);
        assert!(folders.values().all(|f| f == "vrains"));
        assert_eq!(folders.len(), 4);
    }

    #[test]
    fn test_effect_folders_for_custom_theme() {
        let mut settings = ygo();
        settings.theme = "Custom".to_string();
        settings.sound_paths.clear();
        settings
            .sound_paths
            .insert("LP_empty".to_string(), "gx".to_string());

        let folders = effect_folders(&settings);
        assert_eq!(folders[&SoundEffect::LpEmpty], "gx");
        assert_eq!(folders[&SoundEffect::Refresh], "basic");
    }

    #[test]
    fn test_effect_folders_unknown_theme_lowercases() {
        let mut settings = GameSettings::defaults_for(GameMode::Mtg);
        settings.theme = "Default".to_string();
        assert!(effect_folders(&settings).values().all(|f| f == "default"));
    }

    #[test]
    fn test_select_sound_theme() {
        let mut settings = ygo();
        select_sound_theme(&mut settings, "zexal").unwrap();
        assert_eq!(settings.theme, "Zexal");
        assert!(settings.sound_paths.values().all(|f| f == "zexal"));
    }

    #[test]
    fn test_select_custom_keeps_paths() {
        let mut settings = ygo();
        select_sound_theme(&mut settings, "GX").unwrap();
        select_sound_theme(&mut settings, "custom").unwrap();
        assert_eq!(settings.theme, "Custom");
        assert!(settings.sound_paths.values().all(|f| f == "gx"));
    }

    #[test]
    fn test_select_unknown_theme_fails_without_change() {
        let mut settings = ygo();
        let err = select_sound_theme(&mut settings, "Rush").unwrap_err();
        assert!(err.to_string().contains("Rush"));
        assert_eq!(settings, ygo());
    }

    #[test]
    fn test_customize_rejects_unknown_effect_or_theme() {
        let mut settings = ygo();
        let bad_effect = BTreeMap::from([("Boom".to_string(), "GX".to_string())]);
        assert!(customize_sound_theme(&mut settings, &bad_effect).is_err());

        let bad_theme = BTreeMap::from([("Refresh".to_string(), "Rush".to_string())]);
        assert!(customize_sound_theme(&mut settings, &bad_theme).is_err());

        assert_eq!(settings, ygo());
    }

    #[test]
    fn test_customize_drops_unknown_folders_to_basic() {
        let mut settings = ygo();
        settings
            .sound_paths
            .insert("LP_updated".to_string(), "mystery".to_string());

        let overrides = BTreeMap::from([("LP_counting".to_string(), "5DS".to_string())]);
        customize_sound_theme(&mut settings, &overrides).unwrap();

        assert_eq!(settings.sound_paths["LP_counting"], "5ds");
        assert_eq!(settings.sound_paths["LP_updated"], "basic");
    }
}
