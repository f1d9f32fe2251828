use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use super::themes::effect_folders;
use super::types::SoundEffect;
use crate::game::GameMode;
use crate::settings::GameSettings;

/// Env var that points at the asset root.
pub const ASSETS_DIR_ENV: &str = "LIFELINE_ASSETS_DIR";

/// Resolve the asset root: explicit path, `LIFELINE_ASSETS_DIR`, then `./assets`.
pub fn assets_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Ok(path_str) = std::env::var(ASSETS_DIR_ENV)
        && !path_str.is_empty()
    {
        return PathBuf::from(path_str);
    }

    PathBuf::from("assets")
}

/// One resolved sound effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoundEntry {
    pub effect: SoundEffect,
    pub folder: String,
    /// Where the file should be; present or not.
    pub expected_path: PathBuf,
    pub available: bool,
}

/// The sound files for one game mode's current sound theme.
///
/// Loading only checks that each file exists. A missing file is logged and
/// its effect resolves to nothing, so cueing it is a silent no-op.
#[derive(Debug, Clone, Default)]
pub struct SoundBank {
    entries: BTreeMap<SoundEffect, SoundEntry>,
}

impl SoundBank {
    pub fn load(assets_root: &Path, mode: GameMode, settings: &GameSettings) -> Self {
        let sounds_dir = assets_root.join("sounds").join(mode.section_key());
        let entries = effect_folders(settings)
            .into_iter()
            .map(|(effect, folder)| {
                let expected_path = sounds_dir.join(&folder).join(effect.file_name());
                let available = expected_path.is_file();
                if !available {
                    warn!(
                        event = "core.sound.asset_missing",
                        effect = %effect,
                        path = %expected_path.display()
                    );
                }
                (
                    effect,
                    SoundEntry {
                        effect,
                        folder,
                        expected_path,
                        available,
                    },
                )
            })
            .collect();

        let bank = Self { entries };
        debug!(
            event = "core.sound.bank_loaded",
            mode = %mode,
            theme = %settings.theme,
            available = bank.available_count()
        );
        bank
    }

    /// Path of a loaded effect, or `None` when its file was missing.
    pub fn path(&self, effect: SoundEffect) -> Option<&Path> {
        self.entries
            .get(&effect)
            .filter(|entry| entry.available)
            .map(|entry| entry.expected_path.as_path())
    }

    pub fn entries(&self) -> impl Iterator<Item = &SoundEntry> {
        self.entries.values()
    }

    pub fn available_count(&self) -> usize {
        self.entries.values().filter(|e| e.available).count()
    }
}
