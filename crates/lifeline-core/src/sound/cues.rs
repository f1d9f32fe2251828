use tracing::debug;

use super::bank::SoundBank;
use super::types::SoundEffect;
use crate::state::Event;

/// Sound effects to play for an event, in order.
///
/// A life change counts up or down and then lands on either the "updated"
/// or the "empty" sting. Resets play the refresh sound.
pub fn cues_for_event(event: &Event) -> Vec<SoundEffect> {
    match event {
        Event::LifeChanged { old, new, .. } if old == new => Vec::new(),
        Event::LifeChanged { new, .. } => {
            let finish = if *new == 0 {
                SoundEffect::LpEmpty
            } else {
                SoundEffect::LpUpdated
            };
            vec![SoundEffect::LpCounting, finish]
        }
        Event::LifeReset { .. } | Event::StartingTotalChanged { .. } => vec![SoundEffect::Refresh],
        Event::LifeEmptied { .. } | Event::PlayerRenamed { .. } => Vec::new(),
    }
}

/// Something that can play a sound effect.
///
/// Audio output is not part of this crate; implementors decide what "play"
/// means. Playing an effect with no loaded file must be a no-op.
pub trait CuePlayer {
    fn play(&mut self, effect: SoundEffect);

    fn play_all(&mut self, effects: &[SoundEffect]) {
        for effect in effects {
            self.play(*effect);
        }
    }
}

/// Cue player that records each cue through tracing.
pub struct LoggingCuePlayer {
    bank: SoundBank,
    volume: f64,
}

impl LoggingCuePlayer {
    pub fn new(bank: SoundBank, volume: f64) -> Self {
        Self { bank, volume }
    }

    pub fn bank(&self) -> &SoundBank {
        &self.bank
    }
}

impl CuePlayer for LoggingCuePlayer {
    fn play(&mut self, effect: SoundEffect) {
        let Some(path) = self.bank.path(effect) else {
            return;
        };
        debug!(
            event = "core.sound.cue_played",
            effect = %effect,
            path = %path.display(),
            volume = self.volume
        );
    }
}
