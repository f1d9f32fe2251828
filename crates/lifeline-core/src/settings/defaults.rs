//! The hardcoded settings document that every load is back-filled from.

use serde_json::{Map, Value, json};

use crate::game::GameMode;

pub const GLOBAL_SECTION: &str = "global";
pub const THEMES_SECTION: &str = "themes";

pub const DEFAULT_APPEARANCE: &str = "system";
pub const DEFAULT_VOLUME: f64 = 1.0;
pub const DEFAULT_PALETTE: &str = "Default";

/// Folder used for any sound effect without an explicit theme folder.
pub const DEFAULT_SOUND_FOLDER: &str = "basic";

pub fn default_sound_theme(mode: GameMode) -> &'static str {
    match mode {
        GameMode::YuGiOh => "Basic",
        GameMode::Mtg => "Default",
    }
}

/// Default `global` section.
pub fn default_global_section() -> Value {
    json!({
        "selected_theme": DEFAULT_APPEARANCE,
        "volume": DEFAULT_VOLUME,
    })
}

/// Default section for one game mode.
pub fn default_game_section(mode: GameMode) -> Value {
    let sound_paths = match mode {
        GameMode::YuGiOh => json!({
            "LP_counting": DEFAULT_SOUND_FOLDER,
            "LP_updated": DEFAULT_SOUND_FOLDER,
            "LP_empty": DEFAULT_SOUND_FOLDER,
            "Refresh": DEFAULT_SOUND_FOLDER,
        }),
        GameMode::Mtg => json!({}),
    };

    json!({
        "player1_name": "Player 1",
        "player2_name": "Player 2",
        "starting_lp": mode.default_starting_total(),
        "theme": default_sound_theme(mode),
        "sound_paths": sound_paths,
    })
}

/// Default `themes` section.
pub fn default_themes_section() -> Value {
    json!({ "selected": DEFAULT_PALETTE })
}

/// The full default document, keyed by top-level section.
pub fn default_document() -> Map<String, Value> {
    let mut document = Map::new();
    document.insert(GLOBAL_SECTION.to_string(), default_global_section());
    for mode in GameMode::ALL {
        document.insert(mode.section_key().to_string(), default_game_section(mode));
    }
    document.insert(THEMES_SECTION.to_string(), default_themes_section());
    document
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_sections() {
        let document = default_document();
        let keys: Vec<&str> = document.keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 4);
        for key in ["global", "yugioh", "mtg", "themes"] {
            assert!(document.contains_key(key), "missing section {key}");
            assert!(document[key].is_object());
        }
    }

    #[test]
    fn test_default_starting_totals() {
        let document = default_document();
        assert_eq!(document["yugioh"]["starting_lp"], 8000);
        assert_eq!(document["mtg"]["starting_lp"], 20);
    }

    #[test]
    fn test_yugioh_sound_paths_default_to_basic() {
        let section = default_game_section(GameMode::YuGiOh);
        let sound_paths = section["sound_paths"].as_object().unwrap();
        assert_eq!(sound_paths.len(), 4);
        assert!(sound_paths.values().all(|v| v == "basic"));

        let mtg = default_game_section(GameMode::Mtg);
        assert!(mtg["sound_paths"].as_object().unwrap().is_empty());
        assert_eq!(mtg["theme"], "Default");
    }

    #[test]
    fn test_global_defaults() {
        let global = default_global_section();
        assert_eq!(global["selected_theme"], "system");
        assert_eq!(global["volume"], 1.0);
    }
}
