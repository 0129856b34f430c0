//! Blocking microsecond delay via the embassy time driver

use embassy_time::{block_for, Duration};

use dodeka_hal::delay::DelayUs;

/// Busy-wait delay backed by `embassy_time::block_for`
///
/// Spins on the 1 MHz embassy tick without yielding, which keeps the
/// DS1302 setup/hold windows intact even with the executor running.
#[derive(Default)]
pub struct BusyDelay;

impl BusyDelay {
    pub fn new() -> Self {
        Self
    }
}

impl DelayUs for BusyDelay {
    fn delay_us(&mut self, us: u32) {
        block_for(Duration::from_micros(us as u64));
    }
}
