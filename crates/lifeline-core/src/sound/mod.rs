//! Sound themes and sound-effect asset resolution.
//!
//! This module decides *which* file each effect comes from and *when* an
//! effect should play. Decoding and audio output are left to whatever
//! implements [`CuePlayer`].

pub mod bank;
pub mod cues;
pub mod errors;
pub mod themes;
pub mod types;

pub use bank::{ASSETS_DIR_ENV, SoundBank, SoundEntry, assets_root};
pub use cues::{CuePlayer, LoggingCuePlayer, cues_for_event};
pub use errors::SoundError;
pub use themes::{customize_sound_theme, effect_folders, select_sound_theme};
pub use types::{
    CUSTOM_THEME, SOUND_THEMES, SoundEffect, SoundTheme, find_sound_theme, folder_for_theme,
    sound_theme_names,
};
