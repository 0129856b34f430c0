//! Binary-coded decimal nibble codec
//!
//! Every DS1302 timekeeping field packs a decimal value as two 4-bit
//! digits: the low nibble is the ones digit, the high nibble the tens.

/// Combine a BCD nibble pair into its decimal value
///
/// There is no failure path. A nibble above 9 (possible on a corrupted or
/// mid-rollover read) simply produces an oversized value, which the display
/// layer renders as-is.
pub fn to_decimal(bcd: u8) -> u8 {
    ((bcd >> 4) * 10) + (bcd & 0x0F)
}

/// Pack a decimal value 0-99 into a BCD nibble pair
pub fn from_decimal(decimal: u8) -> u8 {
    ((decimal / 10) << 4) | (decimal % 10)
}
