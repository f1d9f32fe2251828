//! # Settings
//!
//! Per-game-mode settings persisted as a single JSON file.
//!
//! ## Document shape
//!
//! ```json
//! {
//!     "global": { "selected_theme": "system", "volume": 1.0 },
//!     "yugioh": { "player1_name": "Player 1", "player2_name": "Player 2",
//!                 "starting_lp": 8000, "theme": "Basic", "sound_paths": { ... } },
//!     "mtg":    { "player1_name": "Player 1", "player2_name": "Player 2",
//!                 "starting_lp": 20, "theme": "Default", "sound_paths": {} },
//!     "themes": { "selected": "Default" }
//! }
//! ```
//!
//! ## Loading and saving
//!
//! ```rust,no_run
//! use lifeline_core::game::GameMode;
//! use lifeline_core::settings::SettingsFile;
//! use serde_json::json;
//!
//! let file = SettingsFile::resolve(None);
//! let document = file.load(); // never fails; degrades to defaults
//! let yugioh = document.game(GameMode::YuGiOh);
//!
//! // Only the named keys change on disk
//! file.save(json!({ "yugioh": { "player1_name": "Yugi" } })).ok();
//! ```

pub mod defaults;
pub mod document;
pub mod errors;
pub mod loading;
pub mod merge;
pub mod operations;
pub mod persistence;
pub mod types;

pub use document::SettingsDocument;
pub use errors::SettingsError;
pub use loading::load_settings;
pub use merge::{backfill, deep_merge};
pub use persistence::{
    CONFIG_FILE_ENV, CONFIG_FILE_NAME, SettingsFile, save_settings, settings_file_path,
};
pub use types::{GameSettings, GlobalSettings};
