//! Board-agnostic core logic for the Dodeka binary clock
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - BCD nibble codec
//! - The DS1302 register snapshot and its time decoder
//! - The binary ring display mapper
//! - The alarm latch

#![no_std]
#![deny(unsafe_code)]

pub mod alarm;
pub mod bcd;
pub mod clock;
pub mod display;

pub use clock::{ClockImage, TimeOfDay};
