//! Merge rules for the settings document.
//!
//! Two different rules apply:
//! - **Back-fill** (on load): missing sections are copied whole from the
//!   defaults; present sections only gain their missing keys, one level deep.
//! - **Deep merge** (on save): a partial update is merged into the on-disk
//!   document object-into-object at any depth, so a screen can persist one
//!   section without clobbering the others.

use serde_json::{Map, Value};
use tracing::warn;

/// Recursively merge `update` into `base`.
///
/// Objects merge key by key at every depth. Any other value in `update`
/// replaces the value in `base`.
pub fn deep_merge(base: &mut Map<String, Value>, update: Map<String, Value>) {
    for (key, value) in update {
        let Value::Object(incoming) = value else {
            base.insert(key, value);
            continue;
        };

        if let Some(Value::Object(existing)) = base.get_mut(&key) {
            deep_merge(existing, incoming);
            continue;
        }
        base.insert(key, Value::Object(incoming));
    }
}

/// Fill in missing sections and keys from `defaults`.
///
/// Sections that are present but not objects are replaced by their default.
/// Keys nested below the first level are left untouched even when the
/// default has more of them.
pub fn backfill(document: &mut Map<String, Value>, defaults: &Map<String, Value>) {
    for (section, default_section) in defaults {
        match document.get_mut(section) {
            None => {
                document.insert(section.clone(), default_section.clone());
            }
            Some(Value::Object(existing)) => {
                if let Value::Object(default_keys) = default_section {
                    for (key, default_value) in default_keys {
                        if !existing.contains_key(key) {
                            existing.insert(key.clone(), default_value.clone());
                        }
                    }
                }
            }
            Some(other) => {
                warn!(
                    event = "core.settings.section_replaced",
                    section = %section,
                    found = %other,
                    "Settings section is not an object, using defaults"
                );
                document.insert(section.clone(), default_section.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_deep_merge_preserves_siblings() {
        let mut base = object(json!({
            "yugioh": { "player1_name": "Yugi", "starting_lp": 8000 },
            "mtg": { "player1_name": "Jace" }
        }));
        deep_merge(
            &mut base,
            object(json!({ "yugioh": { "player1_name": "Kaiba" } })),
        );

        assert_eq!(base["yugioh"]["player1_name"], "Kaiba");
        assert_eq!(base["yugioh"]["starting_lp"], 8000);
        assert_eq!(base["mtg"]["player1_name"], "Jace");
    }

    #[test]
    fn test_deep_merge_recurses_at_any_depth() {
        let mut base = object(json!({
            "yugioh": { "sound_paths": { "LP_counting": "basic", "Refresh": "basic" } }
        }));
        deep_merge(
            &mut base,
            object(json!({ "yugioh": { "sound_paths": { "Refresh": "gx" } } })),
        );

        assert_eq!(base["yugioh"]["sound_paths"]["Refresh"], "gx");
        assert_eq!(base["yugioh"]["sound_paths"]["LP_counting"], "basic");
    }

    #[test]
    fn test_deep_merge_scalar_replaces_object() {
        let mut base = object(json!({ "themes": { "selected": "Default" } }));
        deep_merge(&mut base, object(json!({ "themes": "broken" })));
        assert_eq!(base["themes"], "broken");

        deep_merge(&mut base, object(json!({ "themes": { "selected": "GX" } })));
        assert_eq!(base["themes"]["selected"], "GX");
    }

    #[test]
    fn test_deep_merge_is_idempotent() {
        let update = object(json!({ "mtg": { "starting_lp": 40 } }));
        let mut base = object(json!({ "mtg": { "starting_lp": 20, "theme": "Default" } }));
        deep_merge(&mut base, update.clone());
        let once = base.clone();
        deep_merge(&mut base, update);
        assert_eq!(base, once);
    }

    #[test]
    fn test_backfill_copies_missing_sections() {
        let defaults = object(json!({ "global": { "volume": 1.0 }, "mtg": { "starting_lp": 20 } }));
        let mut document = Map::new();
        backfill(&mut document, &defaults);
        assert_eq!(document, defaults);
    }

    #[test]
    fn test_backfill_fills_only_missing_keys() {
        let defaults = object(json!({
            "yugioh": { "player1_name": "Player 1", "starting_lp": 8000 }
        }));
        let mut document = object(json!({
            "yugioh": { "starting_lp": 4000, "extra": true }
        }));
        backfill(&mut document, &defaults);

        assert_eq!(document["yugioh"]["starting_lp"], 4000);
        assert_eq!(document["yugioh"]["player1_name"], "Player 1");
        assert_eq!(document["yugioh"]["extra"], true);
    }

    #[test]
    fn test_backfill_is_one_level_deep() {
        let defaults = object(json!({
            "yugioh": { "sound_paths": { "LP_counting": "basic", "Refresh": "basic" } }
        }));
        let mut document = object(json!({
            "yugioh": { "sound_paths": { "Refresh": "dm" } }
        }));
        backfill(&mut document, &defaults);

        let sound_paths = document["yugioh"]["sound_paths"].as_object().unwrap();
        assert_eq!(sound_paths.len(), 1);
        assert_eq!(sound_paths["Refresh"], "dm");
    }

    #[test]
    fn test_backfill_replaces_non_object_section() {
        let defaults = object(json!({ "themes": { "selected": "Default" } }));
        let mut document = object(json!({ "themes": 42 }));
        backfill(&mut document, &defaults);
        assert_eq!(document["themes"]["selected"], "Default");
    }
}
