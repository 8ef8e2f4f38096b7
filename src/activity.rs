//! Disk-activity LED decoration.
//!
//! While the device is idle the LED doubles as a rudimentary disk I/O
//! indicator: any nonzero value in the in-flight column of
//! /proc/diskstats, across all device rows, drives a fast blink;
//! otherwise the LED holds a low resting brightness. This is best-effort
//! decoration, not an I/O meter.

use std::time::Duration;

use crate::config::{LED_ACTIVITY_PULSE, LED_RESTING};

/// What the LED should do during the current idle tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LedPattern {
    /// Fast blink with the given on/off times.
    Pulse { on: Duration, off: Duration },
    /// Steady brightness level.
    Level(f32),
}

/// LED pattern for an idle tick given the disk-activity flag.
pub fn led_pattern(disk_active: bool) -> LedPattern {
    if disk_active {
        LedPattern::Pulse {
            on: LED_ACTIVITY_PULSE,
            off: LED_ACTIVITY_PULSE,
        }
    } else {
        LedPattern::Level(LED_RESTING)
    }
}

/// Scan /proc/diskstats content for activity: true if any row has a
/// nonzero value in the given 1-based column. Rows that are too short
/// or non-numeric in that column are skipped, not errors.
pub fn diskstats_active(contents: &str, field: usize) -> bool {
    contents.lines().any(|line| {
        line.split_whitespace()
            .nth(field - 1)
            .and_then(|v| v.parse::<u64>().ok())
            .is_some_and(|v| v != 0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DISKSTATS_FIELD;

    // Field 12 is "I/Os currently in progress".
    const QUIET: &str = "\
 259       0 nvme0n1 124 0 5310 31 210 15 4929 112 0 180 143 0 0 0 0 0 0
 259       1 nvme0n1p1 60 0 4400 14 2 0 10 1 0 20 15 0 0 0 0 0 0
   8       0 sda 10 0 80 3 0 0 0 0 0 3 3 0 0 0 0 0 0";

    const BUSY: &str = "\
 259       0 nvme0n1 124 0 5310 31 210 15 4929 112 0 180 143 0 0 0 0 0 0
   8       0 sda 10 0 80 3 55 0 900 40 3 40 44 0 0 0 0 0 0";

    #[test]
    fn quiet_diskstats_is_inactive() {
        assert!(!diskstats_active(QUIET, DISKSTATS_FIELD));
    }

    #[test]
    fn any_nonzero_in_flight_row_is_active() {
        assert!(diskstats_active(BUSY, DISKSTATS_FIELD));
    }

    #[test]
    fn short_rows_are_skipped() {
        let contents = "short row\n 8 0 sda 1 2 3\n";
        assert!(!diskstats_active(contents, DISKSTATS_FIELD));
    }

    #[test]
    fn non_numeric_column_is_skipped() {
        let contents = " 8 0 sda a b c d e f g h i j k l m n o p q";
        assert!(!diskstats_active(contents, DISKSTATS_FIELD));
    }

    #[test]
    fn empty_input_is_inactive() {
        assert!(!diskstats_active("", DISKSTATS_FIELD));
    }

    #[test]
    fn malformed_rows_do_not_mask_a_busy_one() {
        let contents = format!("garbage\n{BUSY}");
        assert!(diskstats_active(&contents, DISKSTATS_FIELD));
    }

    #[test]
    fn activity_maps_to_fast_pulse() {
        assert_eq!(
            led_pattern(true),
            LedPattern::Pulse {
                on: LED_ACTIVITY_PULSE,
                off: LED_ACTIVITY_PULSE,
            }
        );
    }

    #[test]
    fn idle_maps_to_resting_level() {
        assert_eq!(led_pattern(false), LedPattern::Level(LED_RESTING));
    }
}
