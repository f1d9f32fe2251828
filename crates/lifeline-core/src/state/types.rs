use serde::{Deserialize, Serialize};

use crate::game::PlayerSlot;

/// Everything a player can do to the counters.
///
/// Amounts are already validated integers; text parsing happens in
/// [`crate::input`] before a command is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Subtract `amount` from a player's total.
    Damage { player: PlayerSlot, amount: i64 },
    /// Add `amount` to a player's total.
    Heal { player: PlayerSlot, amount: i64 },
    /// Signed change: negative values are damage, positive values are healing.
    Adjust { player: PlayerSlot, delta: i64 },
    /// Halve a player's total, rounding toward negative infinity.
    Halve { player: PlayerSlot },
    /// Put both players back to the starting total.
    ResetAll,
    RenamePlayer { player: PlayerSlot, name: String },
    /// Change the starting total and reset both players to it.
    SetStartingTotal { total: i64 },
}
