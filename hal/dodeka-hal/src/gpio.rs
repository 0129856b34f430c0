//! GPIO pin abstractions
//!
//! Provides traits for digital input, output, and direction-switchable pins
//! that can be implemented by chip-specific HALs.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Pin whose direction is switched between driven output and
/// high-impedance input at runtime.
///
/// This models a shared bidirectional data line. The half-duplex DS1302
/// I/O line is the motivating case: the host drives it while writing and
/// must release it (switch to input) before the chip drives its reply.
/// Driving the line while the peer does causes bus contention, so the
/// caller is responsible for keeping the direction in step with the
/// protocol phase.
pub trait BidirPin {
    /// Configure the pin as a driven output
    fn set_output(&mut self);

    /// Release the pin to high-impedance input
    fn set_input(&mut self);

    /// Drive the pin to a state (only meaningful in output mode)
    fn write(&mut self, high: bool);

    /// Read the line level (only meaningful in input mode)
    fn read(&mut self) -> bool;
}
