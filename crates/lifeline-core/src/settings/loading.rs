//! Settings loading with default back-fill.
//!
//! Loading never fails. A missing file is created from the defaults; a
//! corrupt file is logged and treated as empty; every section and first-level
//! key the defaults know about is then filled in.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{error, info, warn};

use super::defaults::{DEFAULT_APPEARANCE, DEFAULT_VOLUME, GLOBAL_SECTION, default_document};
use super::document::SettingsDocument;
use super::merge::backfill;
use super::persistence::{read_document, write_document};
use super::types::is_valid_volume;
use crate::game::GameMode;
use crate::theme::Appearance;

/// Load the settings document at `path`, back-filled with defaults.
pub fn load_settings(path: &Path) -> SettingsDocument {
    let mut sections = match read_document(path) {
        Ok(Some(map)) => map,
        Ok(None) => {
            info!(
                event = "core.settings.file_not_found",
                path = %path.display(),
                "No settings file found, creating one with defaults"
            );
            let defaults = default_document();
            if let Err(e) = write_document(path, &defaults) {
                warn!(
                    event = "core.settings.default_write_failed",
                    path = %path.display(),
                    error = %e
                );
            }
            return SettingsDocument::from_map(defaults);
        }
        Err(e) => {
            // The file exists but is unusable; saved names and totals are
            // ignored for this run and the file is left as it is.
            error!(
                event = "core.settings.load_failed",
                path = %path.display(),
                error = %e,
                "Settings file could not be loaded, using defaults"
            );
            Map::new()
        }
    };

    migrate_legacy_keys(&mut sections);
    backfill(&mut sections, &default_document());
    enforce_global_defaults(&mut sections);

    SettingsDocument::from_map(sections)
}

/// Copy `starting_life` into `starting_lp` for game sections written by
/// older builds of the Magic screen.
fn migrate_legacy_keys(sections: &mut Map<String, Value>) {
    for mode in GameMode::ALL {
        let Some(Value::Object(section)) = sections.get_mut(mode.section_key()) else {
            continue;
        };
        if section.contains_key("starting_lp") {
            continue;
        }
        if let Some(legacy) = section.get("starting_life").cloned() {
            info!(
                event = "core.settings.legacy_key_migrated",
                mode = %mode,
                key = "starting_life"
            );
            section.insert("starting_lp".to_string(), legacy);
        }
    }
}

/// Force `global.selected_theme` and `global.volume` to their defaults when
/// missing or holding a value the app cannot use.
fn enforce_global_defaults(sections: &mut Map<String, Value>) {
    let global = sections
        .entry(GLOBAL_SECTION)
        .or_insert_with(|| Value::Object(Map::new()));
    if !global.is_object() {
        *global = Value::Object(Map::new());
    }
    let Value::Object(global) = global else {
        return;
    };

    let appearance_ok = global
        .get("selected_theme")
        .and_then(Value::as_str)
        .is_some_and(|s| s.parse::<Appearance>().is_ok());
    if !appearance_ok {
        warn!(
            event = "core.settings.global_defaulted",
            key = "selected_theme",
            found = ?global.get("selected_theme")
        );
        global.insert(
            "selected_theme".to_string(),
            Value::String(DEFAULT_APPEARANCE.to_string()),
        );
    }

    let volume_ok = global
        .get("volume")
        .and_then(Value::as_f64)
        .is_some_and(is_valid_volume);
    if !volume_ok {
        warn!(
            event = "core.settings.global_defaulted",
            key = "volume",
            found = ?global.get("volume")
        );
        global.insert("volume".to_string(), Value::from(DEFAULT_VOLUME));
    }
}
