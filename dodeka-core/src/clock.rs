//! DS1302 register snapshot and time decoding
//!
//! [`ClockImage`] holds the 8 clock-area bytes exactly as a burst read
//! returns them. Every field is extracted with explicit masks and shifts;
//! the 12/24-hour interpretation of the hours byte is selected by an
//! explicit [`HourMode`] flag instead of overlapping layouts.

use crate::bcd;

/// Byte positions within a burst transfer, in wire order
mod field {
    pub const SECONDS: usize = 0;
    pub const MINUTES: usize = 1;
    pub const HOURS: usize = 2;
    pub const DATE: usize = 3;
    pub const MONTH: usize = 4;
    pub const WEEKDAY: usize = 5;
    pub const YEAR: usize = 6;
    pub const CONTROL: usize = 7;
}

/// Clock-halt flag, bit 7 of the seconds register
const CLOCK_HALT: u8 = 0x80;
/// 12-hour mode select, bit 7 of the hours register
const HOUR_12_SELECT: u8 = 0x80;
/// AM/PM flag, bit 5 of the hours register (12-hour mode only)
const HOUR_PM: u8 = 0x20;
/// Write-protect flag, bit 7 of the control register
const WRITE_PROTECT: u8 = 0x80;

/// Hour format the chip is configured for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourMode {
    Hour24,
    Hour12,
}

/// Decoded wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    /// Hour, 0-23
    pub hour: u8,
    /// Minute, 0-59
    pub minute: u8,
    /// Second, 0-59
    pub second: u8,
}

impl TimeOfDay {
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}

/// 8-byte snapshot of the DS1302 clock registers
///
/// Field order matches the chip's burst transfer: seconds, minutes, hours,
/// date, month, day-of-week, year, control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockImage {
    bytes: [u8; 8],
}

impl ClockImage {
    /// Number of bytes in a clock burst transfer
    pub const LEN: usize = 8;

    pub const fn from_bytes(bytes: [u8; 8]) -> Self {
        Self { bytes }
    }

    pub const fn as_bytes(&self) -> &[u8; 8] {
        &self.bytes
    }

    /// Build an image carrying `time`, ready for a burst write
    ///
    /// Hours are encoded in 24-hour format, the clock-halt and
    /// write-protect flags are cleared, and the calendar fields are set to
    /// Monday 01/01 of year 00 (the caller is a clock, not a calendar).
    pub fn from_time(time: TimeOfDay) -> Self {
        let mut bytes = [0u8; 8];
        bytes[field::SECONDS] = bcd::from_decimal(time.second) & !CLOCK_HALT;
        bytes[field::MINUTES] = bcd::from_decimal(time.minute);
        bytes[field::HOURS] = bcd::from_decimal(time.hour) & !HOUR_12_SELECT;
        bytes[field::DATE] = bcd::from_decimal(1);
        bytes[field::MONTH] = bcd::from_decimal(1);
        bytes[field::WEEKDAY] = bcd::from_decimal(1);
        bytes[field::YEAR] = bcd::from_decimal(0);
        bytes[field::CONTROL] = 0;
        Self { bytes }
    }

    /// Seconds, 0-59
    pub fn seconds(&self) -> u8 {
        bcd::to_decimal(self.bytes[field::SECONDS] & 0x7F)
    }

    /// Minutes, 0-59
    pub fn minutes(&self) -> u8 {
        bcd::to_decimal(self.bytes[field::MINUTES] & 0x7F)
    }

    /// Hour format flag from bit 7 of the hours register
    pub fn hour_mode(&self) -> HourMode {
        if self.bytes[field::HOURS] & HOUR_12_SELECT != 0 {
            HourMode::Hour12
        } else {
            HourMode::Hour24
        }
    }

    /// Hours normalized to 0-23 regardless of the chip's hour mode
    pub fn hours(&self) -> u8 {
        let raw = self.bytes[field::HOURS];
        match self.hour_mode() {
            HourMode::Hour24 => bcd::to_decimal(raw & 0x3F),
            HourMode::Hour12 => {
                // 12-hour encoding is 1-12 with a PM flag; 12 AM is hour 0.
                let hour = bcd::to_decimal(raw & 0x1F) % 12;
                if raw & HOUR_PM != 0 {
                    hour + 12
                } else {
                    hour
                }
            }
        }
    }

    /// Day of month, 1-31
    pub fn date(&self) -> u8 {
        bcd::to_decimal(self.bytes[field::DATE] & 0x3F)
    }

    /// Month, 1-12
    pub fn month(&self) -> u8 {
        bcd::to_decimal(self.bytes[field::MONTH] & 0x1F)
    }

    /// Day of week, 1-7
    pub fn weekday(&self) -> u8 {
        bcd::to_decimal(self.bytes[field::WEEKDAY] & 0x07)
    }

    /// Two-digit year, 0-99
    pub fn year(&self) -> u8 {
        bcd::to_decimal(self.bytes[field::YEAR])
    }

    /// Clock-halt flag (oscillator stopped)
    pub fn clock_halted(&self) -> bool {
        self.bytes[field::SECONDS] & CLOCK_HALT != 0
    }

    /// Write-protect flag from the control register
    pub fn write_protected(&self) -> bool {
        self.bytes[field::CONTROL] & WRITE_PROTECT != 0
    }

    /// Extract hour/minute/second
    pub fn decode(&self) -> TimeOfDay {
        TimeOfDay {
            hour: self.hours(),
            minute: self.minutes(),
            second: self.seconds(),
        }
    }

    /// Advisory plausibility check
    ///
    /// The bus has no acknowledgement, so a disconnected or uninitialized
    /// chip is indistinguishable from one reporting midnight: both come
    /// back as an all-zero image, a non-decimal BCD digit, or a field out
    /// of range. Decoding never fails; this flag lets the caller decide
    /// what to do with a suspect image.
    pub fn plausible(&self) -> bool {
        if self.bytes == [0u8; 8] {
            return false;
        }
        // Each ones digit must be decimal. The tens digits are covered by
        // the range checks: an oversized tens nibble decodes out of range.
        let ones_digits_valid = [
            self.bytes[field::SECONDS] & 0x7F,
            self.bytes[field::MINUTES] & 0x7F,
            self.bytes[field::HOURS] & 0x3F,
        ]
        .iter()
        .all(|&b| b & 0x0F <= 9);

        ones_digits_valid && self.seconds() < 60 && self.minutes() < 60 && self.hours() < 24
    }
}
