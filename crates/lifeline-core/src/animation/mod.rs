//! Counting animation for life total changes.
//!
//! A plan is a list of timed frames computed up front. Nothing here sleeps;
//! the interface decides how to wait between frames (or skips them entirely).
//! The counter is already at its new value before a plan is built.

use std::time::Duration;

use serde::Serialize;

use crate::game::{GameMode, PlayerSlot};
use crate::state::Event;

/// Yu-Gi-Oh counts through a fixed number of steps over a fixed duration.
pub const YUGIOH_STEPS: u32 = 60;
pub const YUGIOH_DURATION_MS: u64 = 1200;
/// Pause before the first Yu-Gi-Oh frame.
pub const YUGIOH_LEAD_IN_MS: u64 = 100;

/// MTG moves by `1/MTG_STEPS` of the difference every `MTG_STEP_MS`.
pub const MTG_STEPS: u32 = 20;
pub const MTG_STEP_MS: u64 = 30;

/// One displayed value, shown `at_ms` after the animation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnimationFrame {
    pub at_ms: u64,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimationPlan {
    pub player: PlayerSlot,
    pub frames: Vec<AnimationFrame>,
}

impl AnimationPlan {
    /// Frames for a change from `old` to `new` under `mode`'s timing.
    ///
    /// The last frame always shows exactly `new`.
    pub fn for_change(mode: GameMode, player: PlayerSlot, old: i64, new: i64) -> Self {
        let frames = match mode {
            GameMode::YuGiOh => yugioh_frames(old, new),
            GameMode::Mtg => mtg_frames(old, new),
        };
        Self { player, frames }
    }

    /// Plan for a `LifeChanged` event. Other events do not animate.
    pub fn for_event(mode: GameMode, event: &Event) -> Option<Self> {
        match event {
            Event::LifeChanged { player, old, new } if old != new => {
                Some(Self::for_change(mode, *player, *old, *new))
            }
            _ => None,
        }
    }

    pub fn final_value(&self) -> Option<i64> {
        self.frames.last().map(|frame| frame.value)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.frames.last().map_or(0, |frame| frame.at_ms))
    }

    /// Each frame paired with how long to wait after the previous one.
    pub fn paced(&self) -> impl Iterator<Item = (Duration, i64)> + '_ {
        let mut previous = 0;
        self.frames.iter().map(move |frame| {
            let wait = frame.at_ms.saturating_sub(previous);
            previous = frame.at_ms;
            (Duration::from_millis(wait), frame.value)
        })
    }
}

/// Distance from `old` to `new`. Totals saturate at the `i64` bounds, so the
/// difference may not fit in an `i64`.
fn span(old: i64, new: i64) -> f64 {
    (i128::from(new) - i128::from(old)) as f64
}

/// Frame value `index` steps from `old`, kept between `old` and `new`.
fn interpolate(old: i64, new: i64, step: f64, index: u32) -> i64 {
    let value = (old as f64 + step * f64::from(index)).round() as i64;
    value.clamp(old.min(new), old.max(new))
}

fn yugioh_frames(old: i64, new: i64) -> Vec<AnimationFrame> {
    let delay = YUGIOH_DURATION_MS / u64::from(YUGIOH_STEPS);
    let step = span(old, new) / f64::from(YUGIOH_STEPS);

    let mut frames: Vec<AnimationFrame> = (1..=YUGIOH_STEPS)
        .map(|i| AnimationFrame {
            at_ms: YUGIOH_LEAD_IN_MS + delay * u64::from(i - 1),
            value: interpolate(old, new, step, i),
        })
        .collect();
    frames.push(AnimationFrame {
        at_ms: YUGIOH_LEAD_IN_MS + delay * u64::from(YUGIOH_STEPS),
        value: new,
    });
    frames
}

fn mtg_frames(old: i64, new: i64) -> Vec<AnimationFrame> {
    if old == new {
        return vec![AnimationFrame { at_ms: 0, value: new }];
    }

    let step = span(old, new) / f64::from(MTG_STEPS);

    // Stepping stops once the remaining distance is within one step, which
    // is after MTG_STEPS - 1 intermediate frames.
    let mut frames: Vec<AnimationFrame> = (1..MTG_STEPS)
        .map(|i| AnimationFrame {
            at_ms: MTG_STEP_MS * u64::from(i - 1),
            value: interpolate(old, new, step, i),
        })
        .collect();
    frames.push(AnimationFrame {
        at_ms: MTG_STEP_MS * u64::from(MTG_STEPS - 1),
        value: new,
    });
    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yugioh_plan_shape() {
        let plan = AnimationPlan::for_change(GameMode::YuGiOh, PlayerSlot::One, 8000, 5000);
        assert_eq!(plan.frames.len(), 61);
        assert_eq!(
            plan.frames[0],
            AnimationFrame {
                at_ms: 100,
                value: 7950
            }
        );
        assert_eq!(plan.frames[59].value, 5000);
        assert_eq!(plan.final_value(), Some(5000));
        assert_eq!(plan.duration(), Duration::from_millis(1300));
    }

    #[test]
    fn test_yugioh_frames_are_monotonic() {
        let plan = AnimationPlan::for_change(GameMode::YuGiOh, PlayerSlot::Two, 1000, 8000);
        assert!(plan.frames.windows(2).all(|w| w[0].value <= w[1].value));
        assert!(plan.frames.windows(2).all(|w| w[0].at_ms < w[1].at_ms));
    }

    #[test]
    fn test_mtg_plan_shape() {
        let plan = AnimationPlan::for_change(GameMode::Mtg, PlayerSlot::One, 20, 15);
        assert_eq!(plan.frames.len(), 20);
        assert_eq!(plan.frames[0], AnimationFrame { at_ms: 0, value: 20 });
        assert_eq!(plan.frames[3].value, 19);
        assert_eq!(
            plan.frames.last(),
            Some(&AnimationFrame {
                at_ms: 570,
                value: 15
            })
        );
    }

    #[test]
    fn test_mtg_no_change_is_single_frame() {
        let plan = AnimationPlan::for_change(GameMode::Mtg, PlayerSlot::One, 20, 20);
        assert_eq!(plan.frames, vec![AnimationFrame { at_ms: 0, value: 20 }]);
    }

    #[test]
    fn test_mtg_into_negative() {
        let plan = AnimationPlan::for_change(GameMode::Mtg, PlayerSlot::Two, 20, -5);
        assert_eq!(plan.final_value(), Some(-5));
        assert!(plan.frames.iter().all(|f| (-5..=20).contains(&f.value)));
    }

    #[test]
    fn test_frames_at_extreme_totals() {
        let old = -5;
        let new = i64::MAX - 4;
        for mode in GameMode::ALL {
            let plan = AnimationPlan::for_change(mode, PlayerSlot::One, old, new);
            assert_eq!(plan.final_value(), Some(new));
            assert!(plan.frames.windows(2).all(|w| w[0].value <= w[1].value));
        }

        let down = AnimationPlan::for_change(GameMode::Mtg, PlayerSlot::Two, i64::MAX, i64::MIN);
        assert_eq!(down.final_value(), Some(i64::MIN));
        assert!(down.frames.windows(2).all(|w| w[0].value >= w[1].value));
    }

    #[test]
    fn test_for_event_only_animates_changes() {
        let changed = Event::LifeChanged {
            player: PlayerSlot::One,
            old: 8000,
            new: 7000,
        };
        let unchanged = Event::LifeChanged {
            player: PlayerSlot::One,
            old: 0,
            new: 0,
        };
        assert!(AnimationPlan::for_event(GameMode::YuGiOh, &changed).is_some());
        assert!(AnimationPlan::for_event(GameMode::YuGiOh, &unchanged).is_none());
        let reset = Event::LifeReset { total: 8000 };
        assert!(AnimationPlan::for_event(GameMode::YuGiOh, &reset).is_none());
    }

    #[test]
    fn test_paced_waits() {
        let plan = AnimationPlan::for_change(GameMode::YuGiOh, PlayerSlot::One, 100, 0);
        let waits: Vec<Duration> = plan.paced().map(|(wait, _)| wait).collect();
        assert_eq!(waits[0], Duration::from_millis(100));
        assert!(waits[1..].iter().all(|w| *w == Duration::from_millis(20)));
    }
}
