//! Command dispatch over a running game.
//!
//! Interfaces build a [`Command`], hand it to a [`Store`], and react to the
//! returned [`Event`]s. [`DuelStore`] is the in-process implementation.

pub mod dispatch;
pub mod errors;
pub mod events;
pub mod store;
pub mod types;

pub use dispatch::DuelStore;
pub use errors::DispatchError;
pub use events::Event;
pub use store::Store;
pub use types::Command;
