//! Life point counters for two-player duels.
//!
//! A [`Game`] owns exactly two [`Player`]s and the starting total they reset
//! to. All arithmetic lives on [`Player`]; the [`GameMode`] decides whether
//! damage floors at zero.

pub mod duel;
pub mod errors;
pub mod types;

pub use duel::Game;
pub use errors::GameError;
pub use types::{GameMode, Player, PlayerSlot};
