//! Collaborator traits the controller is written against.
//!
//! The core state machine never touches hardware directly; it drives
//! these narrow interfaces. The device binary supplies rppal/ssd1306
//! backed implementations, tests supply scripted ones.

use std::time::{Duration, Instant};

use crate::ui::{ActionKind, Screen};

/// Monotonic time and bounded waiting.
///
/// All waiting in the controller is an explicit, bounded sleep through
/// this trait, which lets tests run the whole state machine on a
/// virtual clock.
pub trait Clock {
    /// Monotonic time elapsed since the clock was created.
    fn elapsed(&self) -> Duration;

    /// Block for the given duration.
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock backed by [`Instant`] and [`std::thread::sleep`].
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.epoch.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// The single physical push button.
pub trait PhysicalButton {
    /// Instantaneous (raw, undebounced) button state.
    fn is_pressed(&mut self) -> bool;
}

/// The single status LED.
pub trait StatusLed {
    /// Blink continuously with the given on/off times.
    fn set_pulse(&mut self, on: Duration, off: Duration);

    /// Hold a steady brightness level (0.0-1.0).
    fn set_level(&mut self, level: f32);
}

/// The display surface. Rendering is opaque to the core: it supplies a
/// screen identifier and, for countdown screens, the remaining count.
///
/// Implementations absorb their own failures; a screen that cannot be
/// drawn must not take the control loop down.
pub trait DisplayRenderer {
    fn render(&mut self, screen: Screen, count: Option<u32>);
}

/// Disk activity probe, polled once per idle tick.
pub trait DiskActivity {
    fn is_active(&mut self) -> bool;
}

/// Privileged reboot/shutdown launcher. Fire-and-forget: the core does
/// not await or observe the result.
pub trait PrivilegedAction {
    fn execute(&mut self, kind: ActionKind);
}

/// One sample of system statistics for the info screens. Fields that
/// could not be read are absent, not errors.
#[derive(Debug, Clone, Default)]
pub struct StatsSnapshot {
    pub hostname: Option<String>,
    pub ip: Option<String>,
    pub cpu_pct: Option<f32>,
    pub mem_pct: Option<f32>,
    pub uptime_text: Option<String>,
    pub load_text: Option<String>,
    pub kernel_version: Option<String>,
}

/// System statistics source, consumed by the display implementation
/// when it draws the info screens. May be slow or shell-backed.
pub trait SystemStats {
    fn snapshot(&mut self) -> StatsSnapshot;
}
