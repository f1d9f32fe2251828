use serde::{Deserialize, Serialize};

use crate::game::PlayerSlot;

/// What changed after a command was applied.
///
/// Failures travel through the `Result` error channel and never show up here.
/// Presentation layers (animation, sound cues) derive everything they need
/// from these values; the counters are already updated when an event exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A player's total moved from `old` to `new`. `old == new` is possible
    /// (e.g. zero damage, or damage at an already-clamped zero).
    LifeChanged {
        player: PlayerSlot,
        old: i64,
        new: i64,
    },
    /// A player's total just reached zero.
    LifeEmptied { player: PlayerSlot },
    /// Both players were reset to `total`.
    LifeReset { total: i64 },
    PlayerRenamed { player: PlayerSlot, name: String },
    /// The starting total changed; both players now hold `total`.
    StartingTotalChanged { total: i64 },
}

impl Event {
    /// The player this event concerns, if it concerns exactly one.
    pub fn player(&self) -> Option<PlayerSlot> {
        match self {
            Event::LifeChanged { player, .. }
            | Event::LifeEmptied { player }
            | Event::PlayerRenamed { player, .. } => Some(*player),
            Event::LifeReset { .. } | Event::StartingTotalChanged { .. } => None,
        }
    }
}
