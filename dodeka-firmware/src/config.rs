//! Build-time configuration
//!
//! Pin assignments live in `main.rs` next to the peripheral setup; this
//! module holds the tunable constants.

use embassy_time::Duration;

#[cfg(feature = "set-initial-time")]
use dodeka_core::clock::TimeOfDay;

/// How often the DS1302 is polled and the ring redrawn
///
/// Half a second keeps the seconds marker from visibly skipping values.
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Daily alert hour, 0-23
pub const ALARM_HOUR: u8 = 10;
/// Daily alert minute, 0-59
pub const ALARM_MINUTE: u8 = 49;

/// Alert tone frequency in hertz
pub const TONE_HZ: u32 = 2_000;
/// Alert tone length
pub const TONE_LENGTH: Duration = Duration::from_millis(400);

/// Log the decoded time on every poll
pub const DUMP_TIME: bool = false;

/// Time written once at boot when the `set-initial-time` feature is on
///
/// Set this to a minute or so ahead of the wall clock before flashing.
#[cfg(feature = "set-initial-time")]
pub const INITIAL_TIME: TimeOfDay = TimeOfDay::new(10, 48, 0);
