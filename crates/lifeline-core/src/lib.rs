//! lifeline-core: Core library for the two-player life point counter
//!
//! Holds the counters, their persisted settings, and everything an interface
//! needs to present a change (animation frames and sound cues). The CLI in
//! `crates/lifeline` is one such interface.
//!
//! # Main Entry Points
//!
//! - [`game`] - Players, modes, and the life total arithmetic
//! - [`state`] - Command dispatch over a running game
//! - [`settings`] - The JSON settings file
//! - [`sound`] - Sound themes, asset lookup, and cue selection
//! - [`animation`] - Counting animation frame plans

pub mod animation;
pub mod errors;
pub mod events;
pub mod game;
pub mod input;
pub mod logging;
pub mod settings;
pub mod sound;
pub mod state;
pub mod theme;

// Re-export commonly used types at crate root for convenience
pub use animation::{AnimationFrame, AnimationPlan};
pub use errors::{LifelineError, LifelineResult};
pub use game::{Game, GameError, GameMode, Player, PlayerSlot};
pub use input::{INVALID_PLACEHOLDER, InputError};
pub use settings::{GameSettings, GlobalSettings, SettingsDocument, SettingsError, SettingsFile};
pub use sound::{SoundBank, SoundEffect, SoundError};
pub use state::{Command, DispatchError, DuelStore, Event, Store};
pub use theme::{Appearance, ColourPalette};

// Re-export settings edits as the primary API
pub use settings::operations as settings_ops;

// Re-export logging initialization
pub use logging::init_logging;
