//! Blocking delay abstraction
//!
//! The DS1302 bus has setup/hold times in the nanoseconds-to-microseconds
//! range. Implementations must busy-wait rather than yield to a scheduler:
//! a cooperative sleep has no upper bound on when the protocol resumes.

/// Blocking microsecond-granularity delay
pub trait DelayUs {
    /// Busy-wait for at least `us` microseconds
    ///
    /// Waiting longer than requested is always safe for the DS1302;
    /// waiting less violates the chip's minimum setup/hold times.
    fn delay_us(&mut self, us: u32);
}
