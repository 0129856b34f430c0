//! Register protocol layer
//!
//! Builds single-register and burst transfers out of [`ThreeWireBus`]
//! sessions. Every operation is a complete session: command byte out,
//! then data in the direction the command's read bit selects.

use dodeka_core::clock::{ClockImage, TimeOfDay};
use dodeka_hal::delay::DelayUs;
use dodeka_hal::gpio::{BidirPin, OutputPin};

use crate::bus::{BusRelease, ThreeWireBus};
use crate::registers::{self, reg};

/// DS1302 real-time clock on a three-wire bus
pub struct Ds1302<CE, CLK, IO, D> {
    bus: ThreeWireBus<CE, CLK, IO, D>,
}

impl<CE, CLK, IO, D> Ds1302<CE, CLK, IO, D>
where
    CE: OutputPin,
    CLK: OutputPin,
    IO: BidirPin,
    D: DelayUs,
{
    pub fn new(bus: ThreeWireBus<CE, CLK, IO, D>) -> Self {
        Self { bus }
    }

    /// Read a single clock-area register
    pub fn read_register(&mut self, register: u8) -> u8 {
        self.bus.begin_session();
        self.bus
            .write_byte(registers::read_command(register), BusRelease::Release);
        let value = self.bus.read_byte();
        self.bus.end_session();
        value
    }

    /// Write a single clock-area register
    pub fn write_register(&mut self, register: u8, value: u8) {
        self.bus.begin_session();
        self.bus
            .write_byte(registers::write_command(register), BusRelease::Hold);
        self.bus.write_byte(value, BusRelease::Hold);
        self.bus.end_session();
    }

    /// Read all 8 clock registers in one burst session
    ///
    /// The burst snapshot is atomic on the chip side: the DS1302 latches
    /// the calendar at the start of the transfer, so the seconds byte can
    /// never be from a different second than the hours byte.
    pub fn read_clock(&mut self) -> ClockImage {
        self.bus.begin_session();
        self.bus
            .write_byte(registers::read_command(reg::CLOCK_BURST), BusRelease::Release);
        let mut bytes = [0u8; 8];
        for byte in &mut bytes {
            *byte = self.bus.read_byte();
        }
        self.bus.end_session();
        ClockImage::from_bytes(bytes)
    }

    /// Write all 8 clock registers in one burst session
    ///
    /// The chip only commits a burst write once all 8 bytes have arrived,
    /// and the image's control byte leaves write-protect clear.
    pub fn write_clock(&mut self, image: &ClockImage) {
        self.bus.begin_session();
        self.bus
            .write_byte(registers::write_command(reg::CLOCK_BURST), BusRelease::Hold);
        for &byte in image.as_bytes() {
            self.bus.write_byte(byte, BusRelease::Hold);
        }
        self.bus.end_session();
    }

    /// Read one of the 31 general-purpose RAM bytes
    pub fn read_ram(&mut self, index: u8) -> Option<u8> {
        let register = registers::ram_register(index)?;
        self.bus.begin_session();
        self.bus
            .write_byte(registers::read_command(register), BusRelease::Release);
        let value = self.bus.read_byte();
        self.bus.end_session();
        Some(value)
    }

    /// Write one of the 31 general-purpose RAM bytes
    pub fn write_ram(&mut self, index: u8, value: u8) -> Option<()> {
        let register = registers::ram_register(index)?;
        self.bus.begin_session();
        self.bus
            .write_byte(registers::write_command(register), BusRelease::Hold);
        self.bus.write_byte(value, BusRelease::Hold);
        self.bus.end_session();
        Some(())
    }

    /// One-time chip setup: clear write-protect, disable trickle charging
    ///
    /// Idempotent, and does not touch the time registers, so it is safe
    /// to run on every boot even when the chip has been keeping time on
    /// its backup supply.
    pub fn initialize(&mut self) {
        self.write_register(reg::CONTROL, 0x00);
        self.write_register(reg::TRICKLE, registers::TRICKLE_DISABLED);
    }

    /// Overwrite the running time with a burst write of a fresh image
    ///
    /// This clears the clock-halt flag as a side effect, starting the
    /// oscillator on a factory-fresh chip. Call [`initialize`] first so
    /// the write is not blocked by write-protect.
    ///
    /// [`initialize`]: Self::initialize
    pub fn set_time(&mut self, time: TimeOfDay) {
        let image = ClockImage::from_time(time);
        self.write_clock(&image);
    }

    /// Whether the oscillator is stopped (clock-halt flag set)
    pub fn clock_halted(&mut self) -> bool {
        let seconds = self.read_register(reg::SECONDS);
        seconds & registers::CLOCK_HALT != 0
    }
}
