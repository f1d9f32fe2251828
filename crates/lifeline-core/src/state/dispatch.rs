use tracing::{debug, error, info, warn};

use crate::game::{Game, Player, PlayerSlot};
use crate::settings::SettingsFile;
use crate::settings::operations;
use crate::state::errors::DispatchError;
use crate::state::events::Event;
use crate::state::store::Store;
use crate::state::types::Command;

/// Default Store implementation: applies commands to an in-memory [`Game`].
///
/// With [`DuelStore::with_persistence`], player names and the starting total
/// are also written to the game mode's settings section. Life totals are
/// never persisted.
pub struct DuelStore {
    game: Game,
    settings: Option<SettingsFile>,
}

impl DuelStore {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            settings: None,
        }
    }

    pub fn with_persistence(game: Game, file: SettingsFile) -> Self {
        Self {
            game,
            settings: Some(file),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Both players, for rendering.
    pub fn players(&self) -> [(PlayerSlot, &Player); 2] {
        self.game.players()
    }

    pub fn settings_file(&self) -> Option<&SettingsFile> {
        self.settings.as_ref()
    }

    /// Run `change` on one player and describe the result.
    fn change_life(
        &mut self,
        player: PlayerSlot,
        change: impl FnOnce(&mut Game, PlayerSlot),
    ) -> Vec<Event> {
        let old = self.game.slot(player).total;
        change(&mut self.game, player);
        let new = self.game.slot(player).total;

        let mut events = vec![Event::LifeChanged { player, old, new }];
        if new == 0 && old != 0 {
            events.push(Event::LifeEmptied { player });
        }
        events
    }

    /// Settings writes are best effort: the in-memory game has already
    /// changed, so a failed save is logged and the dispatch still succeeds.
    fn persist(&self, what: &str, save: impl FnOnce(&SettingsFile) -> Result<(), DispatchError>) {
        let Some(file) = &self.settings else {
            return;
        };
        if let Err(e) = save(file) {
            warn!(
                event = "core.state.persist_failed",
                what = what,
                path = %file.path().display(),
                error = %e
            );
        }
    }
}

impl Store for DuelStore {
    type Error = DispatchError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        debug!(event = "core.state.dispatch_started", command = ?cmd);

        let result = match cmd {
            Command::Damage { player, amount } => {
                Ok(self.change_life(player, |game, slot| game.damage(slot, amount)))
            }
            Command::Heal { player, amount } => {
                Ok(self.change_life(player, |game, slot| game.heal(slot, amount)))
            }
            Command::Adjust { player, delta } => {
                Ok(self.change_life(player, |game, slot| game.adjust(slot, delta)))
            }
            Command::Halve { player } => Ok(self.change_life(player, Game::halve)),
            Command::ResetAll => {
                self.game.reset_all();
                Ok(vec![Event::LifeReset {
                    total: self.game.starting_total(),
                }])
            }
            Command::RenamePlayer { player, name } => {
                let name = self.game.rename(player, &name).to_string();
                let mode = self.game.mode();
                self.persist("player_name", |file| {
                    operations::set_player_name(file, mode, player, &name)?;
                    Ok(())
                });
                Ok(vec![Event::PlayerRenamed { player, name }])
            }
            Command::SetStartingTotal { total } => match self.game.set_starting_total(total) {
                Ok(()) => {
                    let mode = self.game.mode();
                    self.persist("starting_total", |file| {
                        operations::set_starting_total(file, mode, total)?;
                        Ok(())
                    });
                    Ok(vec![Event::StartingTotalChanged { total }])
                }
                Err(e) => Err(DispatchError::from(e)),
            },
        };

        match &result {
            Ok(events) => info!(
                event = "core.state.dispatch_completed",
                event_count = events.len(),
                player1 = self.game.slot(PlayerSlot::One).total,
                player2 = self.game.slot(PlayerSlot::Two).total
            ),
            Err(e) => error!(event = "core.state.dispatch_failed", error = %e),
        }

        result
    }
}
