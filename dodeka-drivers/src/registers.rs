//! DS1302 command byte encoding
//!
//! Every transfer starts with one command byte:
//!
//! ```text
//! bit 7      always 1 (identifies a command)
//! bit 6      0 = clock/calendar area, 1 = static RAM area
//! bits 5-1   register index
//! bit 0      1 = read, 0 = write
//! ```
//!
//! Index 31 of an area is not a register: it selects burst mode, which
//! transfers the whole area in one session.

/// Bit 7, set in every command byte
pub const COMMAND: u8 = 0x80;
/// Bit 6, selects the RAM area instead of the clock area
pub const RAM_AREA: u8 = 0x40;
/// Bit 0, read access (write when clear)
pub const READ: u8 = 0x01;

/// Clock-area register command bytes (write form; OR in [`READ`] to read)
pub mod reg {
    pub const SECONDS: u8 = 0x80;
    pub const MINUTES: u8 = 0x82;
    pub const HOURS: u8 = 0x84;
    pub const DATE: u8 = 0x86;
    pub const MONTH: u8 = 0x88;
    pub const WEEKDAY: u8 = 0x8A;
    pub const YEAR: u8 = 0x8C;
    /// Write-protect flag lives in bit 7
    pub const CONTROL: u8 = 0x8E;
    /// Trickle-charge configuration
    pub const TRICKLE: u8 = 0x90;
    /// Burst transfer of all 8 clock registers (0xBF read, 0xBE write)
    pub const CLOCK_BURST: u8 = 0xBE;
    /// First of the 31 RAM bytes; consecutive bytes are 2 apart
    pub const RAM_BASE: u8 = 0xC0;
}

/// Write-protect bit in the control register
pub const WRITE_PROTECT: u8 = 0x80;

/// Clock-halt bit in the seconds register; set means the oscillator is
/// stopped, which is the factory state of a never-written chip
pub const CLOCK_HALT: u8 = 0x80;

/// Trickle-charge register pattern with charging disabled
///
/// Any value whose TCS nibble is not 1010 disables the charger; this is
/// the chip's documented power-on value.
pub const TRICKLE_DISABLED: u8 = 0x5C;

/// Number of general-purpose RAM bytes
pub const RAM_LEN: u8 = 31;

/// Read-access form of a register command byte
pub fn read_command(reg: u8) -> u8 {
    reg | READ
}

/// Write-access form of a register command byte
pub fn write_command(reg: u8) -> u8 {
    reg & !READ
}

/// Command byte for RAM byte `index` (write form), if the index is valid
pub fn ram_register(index: u8) -> Option<u8> {
    if index < RAM_LEN {
        Some(reg::RAM_BASE + index * 2)
    } else {
        None
    }
}
