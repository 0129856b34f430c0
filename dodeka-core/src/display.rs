//! Binary ring display mapper
//!
//! The 12-pixel ring carries three overlapping 6-bit zones, one per color
//! channel: seconds in red from position 0, minutes in green from position
//! 4, hours in blue from position 8, wrapping modulo the ring length. Bit
//! `i` of the decoded value lights position `offset + i` of its zone.
//!
//! Every 5 seconds the minutes and hours zone-start pixels invert their
//! state, marking where those zones begin independent of the encoded bits.

use smart_leds::RGB8;

use crate::clock::TimeOfDay;

/// Physical LED count on the ring
pub const RING_LEN: usize = 12;
/// Bits rendered per zone (covers 0-59)
pub const ZONE_BITS: usize = 6;
/// First pixel of the seconds zone (red channel)
pub const SECONDS_OFFSET: usize = 0;
/// First pixel of the minutes zone (green channel)
pub const MINUTES_OFFSET: usize = 4;
/// First pixel of the hours zone (blue channel)
pub const HOURS_OFFSET: usize = 8;

/// Channel intensity for a set bit
pub const LEVEL_ON: u8 = 0x20;
/// Channel intensity for a clear bit
pub const LEVEL_OFF: u8 = 0x00;

/// One full ring of pixel colors
pub type Frame = [RGB8; RING_LEN];

fn level(on: bool) -> u8 {
    if on {
        LEVEL_ON
    } else {
        LEVEL_OFF
    }
}

fn invert(channel: &mut u8) {
    *channel = level(*channel == LEVEL_OFF);
}

/// Map a decoded time onto a full ring frame
///
/// The frame is recomputed from scratch on every call; nothing is kept
/// between renders. Oversized field values (a transient corrupt read)
/// simply light whichever bits they carry.
pub fn render(time: TimeOfDay) -> Frame {
    let mut frame: Frame = [RGB8::default(); RING_LEN];

    for bit in 0..ZONE_BITS {
        frame[(SECONDS_OFFSET + bit) % RING_LEN].r = level((time.second >> bit) & 1 == 1);
        frame[(MINUTES_OFFSET + bit) % RING_LEN].g = level((time.minute >> bit) & 1 == 1);
        frame[(HOURS_OFFSET + bit) % RING_LEN].b = level((time.hour >> bit) & 1 == 1);
    }

    // Zone-start markers for minutes and hours, toggled every 5 seconds
    if time.second % 5 == 0 {
        invert(&mut frame[MINUTES_OFFSET % RING_LEN].g);
        invert(&mut frame[HOURS_OFFSET % RING_LEN].b);
    }

    frame
}
