use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::SoundError;

/// The four sound effects a duel screen plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SoundEffect {
    #[serde(rename = "LP_counting")]
    LpCounting,
    #[serde(rename = "LP_updated")]
    LpUpdated,
    #[serde(rename = "LP_empty")]
    LpEmpty,
    Refresh,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 4] = [
        SoundEffect::LpCounting,
        SoundEffect::LpUpdated,
        SoundEffect::LpEmpty,
        SoundEffect::Refresh,
    ];

    /// Key used in `sound_paths` and as the file stem.
    pub fn key(&self) -> &'static str {
        match self {
            SoundEffect::LpCounting => "LP_counting",
            SoundEffect::LpUpdated => "LP_updated",
            SoundEffect::LpEmpty => "LP_empty",
            SoundEffect::Refresh => "Refresh",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.wav", self.key())
    }
}

impl fmt::Display for SoundEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SoundEffect {
    type Err = SoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SoundEffect::ALL
            .into_iter()
            .find(|effect| effect.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SoundError::UnknownEffect {
                key: trimmed.to_string(),
            })
    }
}

/// A named sound theme and the asset folder holding its effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SoundTheme {
    pub name: &'static str,
    pub folder: &'static str,
}

/// Pseudo-theme whose folders come from `sound_paths`, one per effect.
pub const CUSTOM_THEME: &str = "Custom";

/// Yu-Gi-Oh! sound themes, one per anime series.
pub const SOUND_THEMES: [SoundTheme; 7] = [
    SoundTheme {
        name: "Basic",
        folder: "basic",
    },
    SoundTheme {
        name: "Duel Monsters",
        folder: "dm",
    },
    SoundTheme {
        name: "GX",
        folder: "gx",
    },
    SoundTheme {
        name: "5DS",
        folder: "5ds",
    },
    SoundTheme {
        name: "Zexal",
        folder: "zexal",
    },
    SoundTheme {
        name: "Arc-V",
        folder: "arcv",
    },
    SoundTheme {
        name: "Vrains",
        folder: "vrains",
    },
];

pub fn find_sound_theme(name: &str) -> Option<&'static SoundTheme> {
    let trimmed = name.trim();
    SOUND_THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(trimmed))
}

pub fn sound_theme_names() -> Vec<&'static str> {
    SOUND_THEMES.iter().map(|t| t.name).collect()
}

/// Folder for a theme name; names outside the catalog map to their lowercase form.
pub fn folder_for_theme(name: &str) -> String {
    match find_sound_theme(name) {
        Some(theme) => theme.folder.to_string(),
        None => name.trim().to_lowercase(),
    }
}

/// Display name for a folder, if any catalog theme uses it.
pub fn theme_for_folder(folder: &str) -> Option<&'static str> {
    SOUND_THEMES
        .iter()
        .find(|theme| theme.folder == folder)
        .map(|theme| theme.name)
}
