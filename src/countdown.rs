//! Cancellable countdown before a destructive action.
//!
//! Both reboot and shutdown share the same protocol: a one second grace
//! period, then six visible steps counting 6..1, polling the button once
//! per step for a cancel. Execution happens after the sixth step's
//! sleep, so the total visible delay before the privileged command is
//! seven seconds.

use log::info;

use crate::config::{COUNTDOWN_GRACE, COUNTDOWN_STEP, COUNTDOWN_STEPS};
use crate::hal::{Clock, DisplayRenderer, PhysicalButton};
use crate::ui::ActionKind;

/// How a countdown run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// All steps elapsed; the caller must invoke the privileged action
    /// and terminate.
    Executed,
    /// The operator pressed the button; nothing was executed.
    Cancelled,
}

/// Runs the countdown protocol. Holds no state between runs; the
/// remaining count exists only for the duration of [`run`].
///
/// [`run`]: CountdownExecutor::run
#[derive(Debug)]
pub struct CountdownExecutor {
    steps: u32,
}

impl CountdownExecutor {
    pub fn new() -> Self {
        Self {
            steps: COUNTDOWN_STEPS,
        }
    }

    pub fn run<C, B, D>(
        &self,
        clock: &mut C,
        button: &mut B,
        display: &mut D,
        action: ActionKind,
    ) -> Outcome
    where
        C: Clock,
        B: PhysicalButton,
        D: DisplayRenderer,
    {
        info!("{action:?} countdown started");
        clock.sleep(COUNTDOWN_GRACE);

        let mut count = self.steps;
        while count > 0 {
            display.render(action.countdown_screen(), Some(count));
            count -= 1;
            clock.sleep(COUNTDOWN_STEP);
            if button.is_pressed() {
                info!("{action:?} cancelled with {} steps left", count + 1);
                return Outcome::Cancelled;
            }
        }
        Outcome::Executed
    }
}

impl Default for CountdownExecutor {
    fn default() -> Self {
        Self::new()
    }
}
