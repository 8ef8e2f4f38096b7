//! Idle-reset countdown for the display.
//!
//! While the timeout is active the display shows whatever the operator
//! last selected; when it runs out the controller blanks the screen and
//! forgets the menu position. Expiry is edge-triggered: [`tick`] returns
//! true exactly once per armed period.
//!
//! [`tick`]: ActionTimeout::tick

use std::time::Duration;

use log::debug;

/// Remaining display time. Never goes below zero; once it reaches zero
/// it stays there until re-armed with [`ActionTimeout::reset`].
#[derive(Debug, Default)]
pub struct ActionTimeout {
    remaining: Duration,
}

impl ActionTimeout {
    /// Create an expired timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the countdown.
    pub fn reset(&mut self, value: Duration) {
        self.remaining = value;
    }

    /// Whether time remains. The idle phase only runs while this is
    /// false.
    pub fn is_active(&self) -> bool {
        !self.remaining.is_zero()
    }

    /// Advance by one tick. Returns true exactly on the tick that
    /// causes expiry; already-expired timeouts return false.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.remaining.is_zero() {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(delta);
        debug!("action timeout remaining {:?}", self.remaining);
        self.remaining.is_zero()
    }
}
