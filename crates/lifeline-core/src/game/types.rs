use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::GameError;

/// Which card game's rules a duel follows.
///
/// The two modes share every counter operation except damage: Yu-Gi-Oh!
/// floors life points at zero, while Magic: The Gathering lets life go
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[serde(rename = "yugioh")]
    YuGiOh,
    Mtg,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::YuGiOh, GameMode::Mtg];

    /// Top-level key of this mode's section in the settings document.
    pub fn section_key(&self) -> &'static str {
        match self {
            GameMode::YuGiOh => "yugioh",
            GameMode::Mtg => "mtg",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GameMode::YuGiOh => "Yu-Gi-Oh!",
            GameMode::Mtg => "Magic: The Gathering",
        }
    }

    pub fn default_starting_total(&self) -> i64 {
        match self {
            GameMode::YuGiOh => 8000,
            GameMode::Mtg => 20,
        }
    }

    /// Whether damage stops at zero in this mode.
    pub fn clamps_at_zero(&self) -> bool {
        matches!(self, GameMode::YuGiOh)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section_key())
    }
}

impl FromStr for GameMode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yugioh" | "ygo" | "yu-gi-oh" | "yu-gi-oh!" => Ok(GameMode::YuGiOh),
            "mtg" | "magic" => Ok(GameMode::Mtg),
            other => Err(GameError::UnknownMode {
                mode: other.to_string(),
            }),
        }
    }
}

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub const BOTH: [PlayerSlot; 2] = [PlayerSlot::One, PlayerSlot::Two];

    /// Look up a slot by its 1-based index. Anything other than 1 or 2 has no slot.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(PlayerSlot::One),
            2 => Some(PlayerSlot::Two),
            _ => None,
        }
    }

    pub fn index(&self) -> u8 {
        match self {
            PlayerSlot::One => 1,
            PlayerSlot::Two => 2,
        }
    }

    pub fn default_name(&self) -> &'static str {
        match self {
            PlayerSlot::One => "Player 1",
            PlayerSlot::Two => "Player 2",
        }
    }

    /// Key of this player's name inside a game-mode settings section.
    pub fn name_key(&self) -> &'static str {
        match self {
            PlayerSlot::One => "player1_name",
            PlayerSlot::Two => "player2_name",
        }
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

impl FromStr for PlayerSlot {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(PlayerSlot::from_index)
            .ok_or_else(|| GameError::InvalidPlayer {
                input: s.trim().to_string(),
            })
    }
}

/// A single player's name and life point total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub total: i64,
}

impl Player {
    pub fn new(name: impl Into<String>, starting_total: i64) -> Self {
        Self {
            name: name.into(),
            total: starting_total,
        }
    }

    /// Subtract `value` from the total. Yu-Gi-Oh! floors the result at zero,
    /// Magic lets it go negative.
    pub fn damage(&mut self, value: i64, mode: GameMode) {
        let next = self.total.saturating_sub(value);
        self.total = if mode.clamps_at_zero() {
            next.max(0)
        } else {
            next
        };
    }

    pub fn heal(&mut self, value: i64) {
        self.total = self.total.saturating_add(value);
    }

    /// Integer halving, rounding toward negative infinity.
    pub fn halve(&mut self) {
        self.total = self.total.div_euclid(2);
    }

    pub fn reset(&mut self, starting_total: i64) {
        self.total = starting_total;
    }

    /// Apply a signed change: negative deltas are damage, the rest is healing.
    pub fn adjust(&mut self, delta: i64, mode: GameMode) {
        if delta < 0 {
            self.damage(delta.saturating_abs(), mode);
        } else {
            self.heal(delta);
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yugioh_damage_scenario() {
        let mut player = Player::new("Yugi", 8000);
        player.damage(3000, GameMode::YuGiOh);
        assert_eq!(player.total, 5000);
        player.damage(6000, GameMode::YuGiOh);
        assert_eq!(player.total, 0, "Yu-Gi-Oh! damage must clamp at zero");
    }

    #[test]
    fn test_mtg_damage_goes_negative() {
        let mut player = Player::new("Jace", 20);
        player.damage(25, GameMode::Mtg);
        assert_eq!(player.total, -5);
    }

    #[test]
    fn test_damage_matches_floor_formula() {
        for total in [0_i64, 1, 7, 500, 8000] {
            for value in [0_i64, 1, 7, 499, 500, 501, 9000] {
                let mut player = Player::new("P", total);
                player.damage(value, GameMode::YuGiOh);
                assert_eq!(player.total, (total - value).max(0));
            }
        }
    }

    #[test]
    fn test_heal_adds() {
        let mut player = Player::new("P", -3);
        player.heal(10);
        assert_eq!(player.total, 7);
    }

    #[test]
    fn test_halve_floors() {
        let mut player = Player::new("P", 7);
        player.halve();
        assert_eq!(player.total, 3);

        let mut negative = Player::new("P", -5);
        negative.halve();
        assert_eq!(negative.total, -3, "halving rounds toward negative infinity");
    }

    #[test]
    fn test_reset_ignores_prior_value() {
        for prior in [-40_i64, 0, 123, 99_999] {
            let mut player = Player::new("P", prior);
            player.reset(8000);
            assert_eq!(player.total, 8000);
        }
    }

    #[test]
    fn test_adjust_routes_by_sign() {
        let mut player = Player::new("P", 100);
        player.adjust(-150, GameMode::YuGiOh);
        assert_eq!(player.total, 0);
        player.adjust(40, GameMode::YuGiOh);
        assert_eq!(player.total, 40);

        let mut mtg = Player::new("P", 3);
        mtg.adjust(-5, GameMode::Mtg);
        assert_eq!(mtg.total, -2);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let mut player = Player::new("P", i64::MAX);
        player.heal(1);
        assert_eq!(player.total, i64::MAX);

        let mut low = Player::new("P", i64::MIN + 1);
        low.damage(5, GameMode::Mtg);
        assert_eq!(low.total, i64::MIN);

        let mut extreme = Player::new("P", 10);
        extreme.adjust(i64::MIN, GameMode::Mtg);
        assert!(extreme.total < 0);
    }

    #[test]
    fn test_player_slot_lookup() {
        assert_eq!(PlayerSlot::from_index(1), Some(PlayerSlot::One));
        assert_eq!(PlayerSlot::from_index(2), Some(PlayerSlot::Two));
        assert_eq!(PlayerSlot::from_index(0), None);
        assert_eq!(PlayerSlot::from_index(3), None);
        assert_eq!("2".parse::<PlayerSlot>().unwrap(), PlayerSlot::Two);
        assert!("three".parse::<PlayerSlot>().is_err());
    }

    #[test]
    fn test_game_mode_parsing() {
        assert_eq!("yugioh".parse::<GameMode>().unwrap(), GameMode::YuGiOh);
        assert_eq!("MTG".parse::<GameMode>().unwrap(), GameMode::Mtg);
        assert!("hearthstone".parse::<GameMode>().is_err());
        assert_eq!(GameMode::YuGiOh.default_starting_total(), 8000);
        assert_eq!(GameMode::Mtg.default_starting_total(), 20);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(Player::new("Kaiba", 4000).to_string(), "Kaiba: 4000");
    }
}
