//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and display
//! constants live here so they can be tuned in one place.

use std::time::Duration;

// GPIO pin assignments (BCM numbering)
//
//   Button → GPIO 20 (pull-up, active low)
//   LED    → GPIO 23 (software PWM)

/// BCM pin number of the front-panel button.
pub const BUTTON_PIN: u8 = 20;

/// BCM pin number of the status LED.
pub const LED_PIN: u8 = 23;

/// I2C bus device the SSD1306 is attached to.
pub const I2C_BUS: &str = "/dev/i2c-1";

/// SSD1306 I2C address.
pub const DISPLAY_ADDR: u8 = 0x3C;

// Timing

/// Display timer at startup, before any interaction.
pub const ACTION_INITIAL_TIMEOUT: Duration = Duration::from_secs(10);

/// Display timer between button interactions.
pub const ACTION_TIMEOUT: Duration = Duration::from_secs(20);

/// Held duration beyond which a press counts as a long press.
pub const PRESS_THRESHOLD: Duration = Duration::from_secs(2);

/// Tick while the action timeout is counting down.
pub const TIMEOUT_TICK: Duration = Duration::from_millis(100);

/// Tick while idle. Balance between responsiveness on the first
/// button click and resource consumption.
pub const IDLE_TICK: Duration = Duration::from_millis(400);

/// Delay between button samples while pressed, to avoid reading
/// multiple signals from contact bounce.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(50);

/// Grace period before the countdown becomes visible.
pub const COUNTDOWN_GRACE: Duration = Duration::from_secs(1);

/// Delay between countdown steps.
pub const COUNTDOWN_STEP: Duration = Duration::from_secs(1);

/// Number of visible countdown steps before a reboot or shutdown
/// executes. The count descends from this value to 1.
pub const COUNTDOWN_STEPS: u32 = 6;

// LED

/// LED resting brightness (duty cycle, 0.0-1.0).
pub const LED_RESTING: f32 = 0.25;

/// LED blink cadence while disk I/O is observed.
pub const LED_ACTIVITY_PULSE: Duration = Duration::from_millis(100);

/// LED blink cadence during the bootup screen.
pub const LED_BOOTUP_PULSE: Duration = Duration::from_millis(400);

// I/O activity source

/// File scanned for disk activity.
pub const DISKSTATS_PATH: &str = "/proc/diskstats";

/// 1-based /proc/diskstats column checked for activity
/// (I/Os currently in progress).
pub const DISKSTATS_FIELD: usize = 12;
