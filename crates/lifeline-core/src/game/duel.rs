use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::GameError;
use super::types::{GameMode, Player, PlayerSlot};
use crate::input::normalize_name;
use crate::settings::GameSettings;

/// Two players sharing a starting total under one game mode's rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    mode: GameMode,
    starting_total: i64,
    player1: Player,
    player2: Player,
}

impl Game {
    /// New game with default player names.
    pub fn new(mode: GameMode, starting_total: i64) -> Self {
        Self {
            mode,
            starting_total,
            player1: Player::new(PlayerSlot::One.default_name(), starting_total),
            player2: Player::new(PlayerSlot::Two.default_name(), starting_total),
        }
    }

    /// Build a game from a mode's persisted settings section.
    pub fn from_settings(mode: GameMode, settings: &GameSettings) -> Self {
        let mut game = Self::new(mode, settings.starting_lp);
        game.rename(PlayerSlot::One, &settings.player1_name);
        game.rename(PlayerSlot::Two, &settings.player2_name);
        debug!(
            event = "core.game.created_from_settings",
            mode = %mode,
            starting_total = settings.starting_lp
        );
        game
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn starting_total(&self) -> i64 {
        self.starting_total
    }

    /// Look up a player by 1-based index. Returns `None` for anything but 1 or 2.
    pub fn player(&self, index: u8) -> Option<&Player> {
        PlayerSlot::from_index(index).map(|slot| self.slot(slot))
    }

    pub fn player_mut(&mut self, index: u8) -> Option<&mut Player> {
        PlayerSlot::from_index(index).map(|slot| self.slot_mut(slot))
    }

    pub fn slot(&self, slot: PlayerSlot) -> &Player {
        match slot {
            PlayerSlot::One => &self.player1,
            PlayerSlot::Two => &self.player2,
        }
    }

    pub fn slot_mut(&mut self, slot: PlayerSlot) -> &mut Player {
        match slot {
            PlayerSlot::One => &mut self.player1,
            PlayerSlot::Two => &mut self.player2,
        }
    }

    pub fn players(&self) -> [(PlayerSlot, &Player); 2] {
        [
            (PlayerSlot::One, &self.player1),
            (PlayerSlot::Two, &self.player2),
        ]
    }

    pub fn damage(&mut self, slot: PlayerSlot, value: i64) {
        let mode = self.mode;
        self.slot_mut(slot).damage(value, mode);
    }

    /// Add `value` to a player's total. A negative value is damage, so it
    /// still stops at zero in Yu-Gi-Oh!.
    pub fn heal(&mut self, slot: PlayerSlot, value: i64) {
        self.adjust(slot, value);
    }

    pub fn adjust(&mut self, slot: PlayerSlot, delta: i64) {
        let mode = self.mode;
        self.slot_mut(slot).adjust(delta, mode);
    }

    pub fn halve(&mut self, slot: PlayerSlot) {
        self.slot_mut(slot).halve();
    }

    /// Reset both players to the starting total.
    pub fn reset_all(&mut self) {
        let starting = self.starting_total;
        self.player1.reset(starting);
        self.player2.reset(starting);
    }

    /// Change the starting total. Both players are reset to the new value.
    pub fn set_starting_total(&mut self, total: i64) -> Result<(), GameError> {
        if total <= 0 {
            return Err(GameError::InvalidStartingTotal { total });
        }
        self.starting_total = total;
        self.reset_all();
        Ok(())
    }

    /// Rename a player. Blank names fall back to "Player 1" / "Player 2".
    pub fn rename(&mut self, slot: PlayerSlot, name: &str) -> &str {
        let player = self.slot_mut(slot);
        player.name = normalize_name(name, slot);
        &player.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let game = Game::new(GameMode::YuGiOh, 8000);
        assert_eq!(game.starting_total(), 8000);
        assert_eq!(game.player(1).unwrap().name, "Player 1");
        assert_eq!(game.player(2).unwrap().name, "Player 2");
        assert_eq!(game.player(1).unwrap().total, 8000);
    }

    #[test]
    fn test_player_lookup_out_of_range() {
        let mut game = Game::new(GameMode::Mtg, 20);
        assert!(game.player(0).is_none());
        assert!(game.player(3).is_none());
        assert!(game.player_mut(9).is_none());
    }

    #[test]
    fn test_players_are_independent() {
        let mut game = Game::new(GameMode::YuGiOh, 8000);
        game.damage(PlayerSlot::One, 1000);
        assert_eq!(game.slot(PlayerSlot::One).total, 7000);
        assert_eq!(game.slot(PlayerSlot::Two).total, 8000);
    }

    #[test]
    fn test_mode_rules_flow_through_game() {
        let mut ygo = Game::new(GameMode::YuGiOh, 8000);
        ygo.damage(PlayerSlot::Two, 9000);
        assert_eq!(ygo.slot(PlayerSlot::Two).total, 0);

        let mut mtg = Game::new(GameMode::Mtg, 20);
        mtg.damage(PlayerSlot::Two, 25);
        assert_eq!(mtg.slot(PlayerSlot::Two).total, -5);
    }

    #[test]
    fn test_negative_heal_is_clamped_damage() {
        let mut ygo = Game::new(GameMode::YuGiOh, 8000);
        ygo.heal(PlayerSlot::One, -9000);
        assert_eq!(ygo.slot(PlayerSlot::One).total, 0);

        let mut mtg = Game::new(GameMode::Mtg, 20);
        mtg.heal(PlayerSlot::One, -25);
        assert_eq!(mtg.slot(PlayerSlot::One).total, -5);
    }

    #[test]
    fn test_yugioh_never_negative_with_signed_amounts() {
        let mut game = Game::new(GameMode::YuGiOh, 8000);
        for value in [-9000, 9000, -1, i64::MIN, i64::MAX, 0] {
            game.damage(PlayerSlot::Two, value);
            assert!(game.slot(PlayerSlot::Two).total >= 0);
            game.heal(PlayerSlot::Two, value);
            assert!(game.slot(PlayerSlot::Two).total >= 0);
            game.adjust(PlayerSlot::Two, value);
            assert!(game.slot(PlayerSlot::Two).total >= 0);
            game.halve(PlayerSlot::Two);
            assert!(game.slot(PlayerSlot::Two).total >= 0);
        }
    }

    #[test]
    fn test_reset_all() {
        let mut game = Game::new(GameMode::YuGiOh, 8000);
        game.damage(PlayerSlot::One, 500);
        game.halve(PlayerSlot::Two);
        game.reset_all();
        assert_eq!(game.slot(PlayerSlot::One).total, 8000);
        assert_eq!(game.slot(PlayerSlot::Two).total, 8000);
    }

    #[test]
    fn test_set_starting_total_resets_players() {
        let mut game = Game::new(GameMode::YuGiOh, 8000);
        game.damage(PlayerSlot::One, 2000);
        game.set_starting_total(4000).unwrap();
        assert_eq!(game.starting_total(), 4000);
        assert_eq!(game.slot(PlayerSlot::One).total, 4000);
        assert_eq!(game.slot(PlayerSlot::Two).total, 4000);
    }

    #[test]
    fn test_set_starting_total_rejects_non_positive() {
        let mut game = Game::new(GameMode::Mtg, 20);
        assert_eq!(
            game.set_starting_total(0),
            Err(GameError::InvalidStartingTotal { total: 0 })
        );
        assert!(game.set_starting_total(-40).is_err());
        assert_eq!(game.starting_total(), 20);
    }

    #[test]
    fn test_rename_blank_falls_back() {
        let mut game = Game::new(GameMode::YuGiOh, 8000);
        assert_eq!(game.rename(PlayerSlot::One, "  Yugi  "), "Yugi");
        assert_eq!(game.rename(PlayerSlot::Two, "   "), "Player 2");
    }

    #[test]
    fn test_from_settings() {
        let settings = GameSettings {
            player1_name: "Chandra".to_string(),
            player2_name: "".to_string(),
            starting_lp: 40,
            ..GameSettings::defaults_for(GameMode::Mtg)
        };
        let game = Game::from_settings(GameMode::Mtg, &settings);
        assert_eq!(game.mode(), GameMode::Mtg);
        assert_eq!(game.starting_total(), 40);
        assert_eq!(game.slot(PlayerSlot::One).name, "Chandra");
        assert_eq!(game.slot(PlayerSlot::Two).name, "Player 2");
        assert_eq!(game.slot(PlayerSlot::Two).total, 40);
    }
}
