use serde_json::{Map, Value};

use super::defaults::{DEFAULT_PALETTE, GLOBAL_SECTION, THEMES_SECTION};
use super::types::{GameSettings, GlobalSettings};
use crate::game::GameMode;

/// The whole settings document, back-filled with defaults.
///
/// Kept as a raw JSON object so sections and keys this version does not know
/// about are carried through unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsDocument {
    sections: Map<String, Value>,
}

impl SettingsDocument {
    pub fn from_map(sections: Map<String, Value>) -> Self {
        Self { sections }
    }

    pub fn section(&self, key: &str) -> Option<&Map<String, Value>> {
        self.sections.get(key).and_then(Value::as_object)
    }

    pub fn game(&self, mode: GameMode) -> GameSettings {
        GameSettings::from_section(mode, self.section(mode.section_key()))
    }

    pub fn global(&self) -> GlobalSettings {
        GlobalSettings::from_section(self.section(GLOBAL_SECTION))
    }

    /// Name of the selected colour palette.
    pub fn selected_palette(&self) -> &str {
        self.section(THEMES_SECTION)
            .and_then(|themes| themes.get("selected"))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_PALETTE)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.sections
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.sections
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.sections.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::defaults::default_document;
    use crate::theme::Appearance;
    use serde_json::json;

    #[test]
    fn test_typed_views_over_defaults() {
        let document = SettingsDocument::from_map(default_document());
        assert_eq!(
            document.game(GameMode::YuGiOh),
            GameSettings::defaults_for(GameMode::YuGiOh)
        );
        assert_eq!(document.global().selected_theme, Appearance::System);
        assert_eq!(document.selected_palette(), "Default");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let document = SettingsDocument::default();
        assert_eq!(document.game(GameMode::Mtg).starting_lp, 20);
        assert_eq!(document.global().volume, 1.0);
        assert_eq!(document.selected_palette(), "Default");
    }

    #[test]
    fn test_selected_palette_reads_themes_section() {
        let Value::Object(map) = json!({ "themes": { "selected": "Blue-Eyes" } }) else {
            unreachable!()
        };
        let document = SettingsDocument::from_map(map);
        assert_eq!(document.selected_palette(), "Blue-Eyes");
    }
}
