use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::settings::SettingsError;

/// Light/dark appearance, stored as `global.selected_theme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Dark,
    Light,
    /// Follow the operating system.
    #[default]
    System,
}

impl Appearance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Appearance::Dark => "dark",
            Appearance::Light => "light",
            Appearance::System => "system",
        }
    }

    /// The dark-mode switch: dark turns light, everything else turns dark.
    pub fn toggle(self) -> Self {
        match self {
            Appearance::Dark => Appearance::Light,
            Appearance::Light | Appearance::System => Appearance::Dark,
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Appearance {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Appearance::Dark),
            "light" => Ok(Appearance::Light),
            "system" => Ok(Appearance::System),
            other => Err(SettingsError::InvalidValue {
                key: "selected_theme".to_string(),
                message: format!("'{}' is not one of dark, light, system", other),
            }),
        }
    }
}

/// Colours for one visual theme, as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColourPalette {
    pub name: &'static str,
    pub text_primary: &'static str,
    pub button_hover: &'static str,
    pub background: &'static str,
    pub accent: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appearance_toggle() {
        assert_eq!(Appearance::Dark.toggle(), Appearance::Light);
        assert_eq!(Appearance::Light.toggle(), Appearance::Dark);
        assert_eq!(Appearance::System.toggle(), Appearance::Dark);
    }

    #[test]
    fn test_appearance_parse() {
        assert_eq!("Dark".parse::<Appearance>().unwrap(), Appearance::Dark);
        assert_eq!(" system ".parse::<Appearance>().unwrap(), Appearance::System);
        let err = "sepia".parse::<Appearance>().unwrap_err();
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn test_appearance_serde_matches_settings_strings() {
        let json = serde_json::to_string(&Appearance::Light).unwrap();
        assert_eq!(json, "\"light\"");
        let parsed: Appearance = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, Appearance::Dark);
    }
}
