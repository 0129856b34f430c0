//! Three-wire bus link layer
//!
//! Bit-banged physical layer for the DS1302's synchronous serial bus.
//! Transfers are LSB-first. The chip samples the data line on the rising
//! clock edge and drives its own output bits on the falling edge, so a
//! write-then-read sequence needs a turnaround: the host releases the data
//! line after the last command bit while the clock is still high, and the
//! first read clock cycle produces the chip's first output bit.

use dodeka_hal::delay::DelayUs;
use dodeka_hal::gpio::{BidirPin, OutputPin};

/// Bus timing constants, at or above the DS1302 datasheet minimums at 2 V
///
/// These are load-bearing: reducing any of them below the datasheet value
/// corrupts transfers. Increasing them only slows the bus down.
pub mod timing {
    /// CE-to-first-clock setup and CE inactive time, tCC/tCWH (4 us)
    pub const CE_SETTLE_US: u32 = 4;
    /// Data valid before the rising clock edge, tDC (200 ns)
    pub const DATA_SETUP_US: u32 = 1;
    /// Clock half-period hold, tCH/tCL (1 us)
    pub const CLOCK_HOLD_US: u32 = 1;
}

/// What to do with the data line after the final bit of a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusRelease {
    /// Keep driving; another write follows or the session ends
    Hold,
    /// Release the line for the chip to drive; a read follows immediately
    Release,
}

/// The three bus lines plus the delay source, owned for the device's life
pub struct ThreeWireBus<CE, CLK, IO, D> {
    ce: CE,
    sclk: CLK,
    io: IO,
    delay: D,
}

impl<CE, CLK, IO, D> ThreeWireBus<CE, CLK, IO, D>
where
    CE: OutputPin,
    CLK: OutputPin,
    IO: BidirPin,
    D: DelayUs,
{
    pub fn new(ce: CE, sclk: CLK, io: IO, delay: D) -> Self {
        Self {
            ce,
            sclk,
            io,
            delay,
        }
    }

    /// Open a session: lines to a known state, then chip-enable high
    ///
    /// Resets the line state from scratch each time, so this is safe as
    /// the very first operation after power-up.
    pub fn begin_session(&mut self) {
        self.ce.set_low();
        self.io.set_output();
        self.sclk.set_low();
        self.ce.set_high();
        self.delay.delay_us(timing::CE_SETTLE_US);
    }

    /// Close the session and honor the chip-enable inactive time
    pub fn end_session(&mut self) {
        self.ce.set_low();
        self.delay.delay_us(timing::CE_SETTLE_US);
    }

    /// Clock out one byte, LSB first
    ///
    /// With [`BusRelease::Release`], the eighth rising edge is the
    /// turnaround point: the data line switches to input and the clock is
    /// left high, so the falling edge that starts the next [`read_byte`]
    /// clocks the chip's first output bit onto the line.
    ///
    /// [`read_byte`]: Self::read_byte
    pub fn write_byte(&mut self, value: u8, release: BusRelease) {
        for bit in 0..8 {
            self.io.write((value >> bit) & 1 == 1);
            self.delay.delay_us(timing::DATA_SETUP_US);
            self.sclk.set_high();
            self.delay.delay_us(timing::CLOCK_HOLD_US);
            if bit == 7 && release == BusRelease::Release {
                self.io.set_input();
            } else {
                self.sclk.set_low();
                self.delay.delay_us(timing::CLOCK_HOLD_US);
            }
        }
    }

    /// Clock in one byte, LSB first
    ///
    /// Assumes the data line was released by a preceding
    /// `write_byte(.., Release)` and the clock is idle high. Each bit is
    /// sampled after the falling edge, where the chip presents it.
    pub fn read_byte(&mut self) -> u8 {
        let mut value = 0u8;
        for bit in 0..8 {
            self.sclk.set_high();
            self.delay.delay_us(timing::CLOCK_HOLD_US);
            self.sclk.set_low();
            self.delay.delay_us(timing::CLOCK_HOLD_US);
            if self.io.read() {
                value |= 1 << bit;
            }
        }
        value
    }
}
