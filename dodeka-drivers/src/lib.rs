//! DS1302 real-time clock driver
//!
//! The DS1302 talks over a proprietary three-wire half-duplex bus: a
//! chip-enable line, a clock line, and one shared bidirectional data line.
//! It is not SPI - the data line reverses direction mid-session - so the
//! link layer is bit-banged over the `dodeka-hal` pin traits:
//!
//! - [`bus`] - the bit-level link layer (sessions, byte transfers, bus
//!   turnaround, setup/hold timing)
//! - [`registers`] - command byte encoding and register addresses
//! - [`ds1302`] - the register protocol layer (single-register and burst
//!   access, one-time chip setup)

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod ds1302;
pub mod registers;

pub use bus::{BusRelease, ThreeWireBus};
pub use ds1302::Ds1302;

#[cfg(test)]
mod sim;
