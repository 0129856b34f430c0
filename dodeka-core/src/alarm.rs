//! Daily alarm latch
//!
//! The poll loop sees the same hour:minute for up to 120 consecutive
//! reads. The latch makes the alarm fire on the first matching poll only,
//! and re-arms the moment the match window ends so the next day's match
//! fires again.

use crate::clock::TimeOfDay;

/// One fixed hour:minute alarm with an "already fired" latch
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Alarm {
    hour: u8,
    minute: u8,
    fired: bool,
}

impl Alarm {
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour,
            minute,
            fired: false,
        }
    }

    /// Feed one decoded time sample; returns true when the alarm should
    /// sound now
    ///
    /// True exactly once per continuous hour:minute match window. Any
    /// non-matching sample resets the latch.
    pub fn update(&mut self, time: TimeOfDay) -> bool {
        let matches = time.hour == self.hour && time.minute == self.minute;
        if !matches {
            self.fired = false;
            return false;
        }
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}
