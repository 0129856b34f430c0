//! GPIO trait implementations over embassy-rp
//!
//! [`RpOutputPin`] wraps a push-pull [`Output`] for the select and clock
//! lines. [`RpBidirPin`] wraps a [`Flex`] pin for the shared data line,
//! which changes direction mid-session during bus turnaround.

use embassy_rp::gpio::{AnyPin, Flex, Level, Output, Pull};
use embassy_rp::Peri;

use dodeka_hal::gpio::{BidirPin, OutputPin};

/// Push-pull output pin
pub struct RpOutputPin {
    inner: Output<'static>,
}

impl RpOutputPin {
    /// Create an output pin, initially low
    pub fn new(pin: Peri<'static, AnyPin>) -> Self {
        Self {
            inner: Output::new(pin, Level::Low),
        }
    }
}

impl OutputPin for RpOutputPin {
    fn set_high(&mut self) {
        self.inner.set_high();
    }

    fn set_low(&mut self) {
        self.inner.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.inner.is_set_high()
    }
}

/// Direction-switchable pin for the shared data line
///
/// Input mode uses a pull-down so a released line with no peer driving it
/// reads as zero rather than floating.
pub struct RpBidirPin {
    inner: Flex<'static>,
}

impl RpBidirPin {
    /// Create a bidirectional pin, initially a low output
    pub fn new(pin: Peri<'static, AnyPin>) -> Self {
        let mut inner = Flex::new(pin);
        inner.set_pull(Pull::Down);
        inner.set_low();
        inner.set_as_output();
        Self { inner }
    }
}

impl BidirPin for RpBidirPin {
    fn set_output(&mut self) {
        self.inner.set_as_output();
    }

    fn set_input(&mut self) {
        self.inner.set_as_input();
    }

    fn write(&mut self, high: bool) {
        if high {
            self.inner.set_high();
        } else {
            self.inner.set_low();
        }
    }

    fn read(&mut self) -> bool {
        self.inner.is_high()
    }
}
