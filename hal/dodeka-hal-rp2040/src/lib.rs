//! RP2040 implementations of the Dodeka HAL traits
//!
//! Thin wrappers over embassy-rp GPIO and timer primitives. The firmware
//! constructs these once at startup and hands them to the DS1302 driver.

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;

pub use delay::BusyDelay;
pub use gpio::{RpBidirPin, RpOutputPin};
