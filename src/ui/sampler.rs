//! Button sampling and press classification.
//!
//! The sampler turns raw pressed/released readings plus a monotonic
//! timestamp into discrete events. Classification happens only at
//! release: a press held beyond [`PRESS_THRESHOLD`] is a long press,
//! anything shorter is a click. The caller is expected to sleep the
//! debounce delay between samples while a press is in progress.

use std::time::Duration;

use log::debug;

use crate::config::PRESS_THRESHOLD;
use crate::ui::PressKind;

/// One sampled button event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sample {
    /// Button up, no press in progress.
    Idle,
    /// Released-to-pressed transition observed on this sample.
    PressStarted,
    /// Still held; carries the duration since the press started.
    Held(Duration),
    /// Pressed-to-released transition; the completed press has been
    /// classified.
    Released(PressKind),
}

/// Tracks the in-progress press. State is owned here exclusively;
/// cleared on release.
#[derive(Debug, Default)]
pub struct ButtonSampler {
    press_start: Option<Duration>,
    last_sample: Option<Duration>,
}

impl ButtonSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw reading taken at monotonic time `now`.
    pub fn sample(&mut self, now: Duration, is_down: bool) -> Sample {
        if is_down {
            self.last_sample = Some(now);
            match self.press_start {
                None => {
                    self.press_start = Some(now);
                    Sample::PressStarted
                }
                Some(start) => Sample::Held(now - start),
            }
        } else {
            let start = self.press_start.take();
            let last = self.last_sample.take();
            match (start, last) {
                (Some(start), Some(last)) => {
                    let held = last.saturating_sub(start);
                    debug!("press released after {held:?}");
                    if held > PRESS_THRESHOLD {
                        Sample::Released(PressKind::LongPress)
                    } else {
                        Sample::Released(PressKind::Click)
                    }
                }
                // Release with no recorded start: broken sequencing,
                // treat as nothing having happened.
                _ => Sample::Idle,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: fn(u64) -> Duration = Duration::from_millis;

    #[test]
    fn idle_while_button_up() {
        let mut sampler = ButtonSampler::new();
        assert_eq!(sampler.sample(MS(0), false), Sample::Idle);
        assert_eq!(sampler.sample(MS(400), false), Sample::Idle);
    }

    #[test]
    fn short_press_classified_as_click() {
        let mut sampler = ButtonSampler::new();
        assert_eq!(sampler.sample(MS(1000), true), Sample::PressStarted);
        assert_eq!(sampler.sample(MS(1050), true), Sample::Held(MS(50)));
        assert_eq!(sampler.sample(MS(1100), true), Sample::Held(MS(100)));
        assert_eq!(
            sampler.sample(MS(1150), false),
            Sample::Released(PressKind::Click)
        );
    }

    #[test]
    fn held_beyond_threshold_classified_as_long_press() {
        let mut sampler = ButtonSampler::new();
        sampler.sample(MS(0), true);
        let mut t = 0;
        while t < 2200 {
            t += 50;
            sampler.sample(MS(t), true);
        }
        assert_eq!(
            sampler.sample(MS(t + 50), false),
            Sample::Released(PressKind::LongPress)
        );
    }

    #[test]
    fn press_of_exactly_threshold_is_still_a_click() {
        // Classification is strictly greater-than.
        let mut sampler = ButtonSampler::new();
        sampler.sample(MS(0), true);
        sampler.sample(MS(2000), true);
        assert_eq!(
            sampler.sample(MS(2050), false),
            Sample::Released(PressKind::Click)
        );
    }

    #[test]
    fn release_without_recorded_start_is_idle() {
        let mut sampler = ButtonSampler::new();
        // Never saw the press begin; the release must fire nothing.
        assert_eq!(sampler.sample(MS(100), false), Sample::Idle);
    }

    #[test]
    fn state_cleared_after_release() {
        let mut sampler = ButtonSampler::new();
        sampler.sample(MS(0), true);
        sampler.sample(MS(100), false);
        // A new press starts fresh; duration must not carry over.
        assert_eq!(sampler.sample(MS(5000), true), Sample::PressStarted);
        assert_eq!(
            sampler.sample(MS(5100), false),
            Sample::Released(PressKind::Click)
        );
    }

    #[test]
    fn duration_measured_from_first_sample() {
        let mut sampler = ButtonSampler::new();
        sampler.sample(MS(10_000), true);
        assert_eq!(sampler.sample(MS(12_500), true), Sample::Held(MS(2500)));
    }
}
