//! Dodeka Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the DS1302 driver and
//! the firmware are written against. Implementing them for another chip is
//! all that is needed to port the clock.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (dodeka-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dodeka-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dodeka-hal-rp2040 (embassy-rp impls)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Driven digital outputs (chip-enable, clock)
//! - [`gpio::BidirPin`] - Runtime direction switching for shared data lines
//! - [`delay::DelayUs`] - Blocking microsecond busy-wait

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use delay::DelayUs;
pub use gpio::{BidirPin, OutputPin};
