//! Simulated DS1302 and bus pins for driver tests
//!
//! The pin mocks share one [`SimState`] through a `RefCell`, and the chip
//! model inside it reacts to clock edges the way the real part does: host
//! bits are sampled on rising edges, chip output bits appear on falling
//! edges, and everything is ignored while chip-enable is low.

use core::cell::RefCell;

use dodeka_hal::delay::DelayUs;
use dodeka_hal::gpio::{BidirPin, OutputPin};

use crate::registers::{READ, WRITE_PROTECT};

/// Largest read queue: a full RAM burst
const MAX_BURST: usize = 31;
/// Clock-area register count including the trickle-charge register
const CLOCK_AREA: usize = 9;
/// Control register index within the clock area
const CONTROL_IDX: usize = 7;

enum Phase {
    Idle,
    Command { acc: u8, bits: u8 },
    Write { cmd: u8, count: u8, acc: u8, bits: u8 },
    Read { queue: [u8; MAX_BURST], len: u8, byte: u8, bit: u8 },
}

/// Register-level DS1302 behavior model
pub struct ChipModel {
    clock_regs: [u8; CLOCK_AREA],
    ram: [u8; MAX_BURST],
    phase: Phase,
    /// True from the first falling edge of a read phase until deselect
    pub driving: bool,
    out_level: bool,
    commands: [u8; 16],
    n_commands: usize,
    bit_log: [bool; 8],
    n_bits_logged: usize,
}

impl ChipModel {
    fn new() -> Self {
        Self {
            clock_regs: [0; CLOCK_AREA],
            ram: [0; MAX_BURST],
            phase: Phase::Idle,
            driving: false,
            out_level: false,
            commands: [0; 16],
            n_commands: 0,
            bit_log: [false; 8],
            n_bits_logged: 0,
        }
    }

    /// Command bytes received so far, in order
    pub fn commands(&self) -> &[u8] {
        &self.commands[..self.n_commands]
    }

    /// The raw wire order of the first 8 bits after the first select
    pub fn bit_log(&self) -> &[bool; 8] {
        &self.bit_log
    }

    pub fn set_clock_regs(&mut self, regs: [u8; 8]) {
        self.clock_regs[..8].copy_from_slice(&regs);
    }

    pub fn clock_regs(&self) -> [u8; 8] {
        let mut out = [0u8; 8];
        out.copy_from_slice(&self.clock_regs[..8]);
        out
    }

    pub fn trickle_reg(&self) -> u8 {
        self.clock_regs[8]
    }

    pub fn ram(&self) -> &[u8; MAX_BURST] {
        &self.ram
    }

    fn write_protected(&self) -> bool {
        self.clock_regs[CONTROL_IDX] & WRITE_PROTECT != 0
    }

    fn select(&mut self) {
        self.phase = Phase::Command { acc: 0, bits: 0 };
        self.driving = false;
    }

    fn deselect(&mut self) {
        self.phase = Phase::Idle;
        self.driving = false;
    }

    fn rising(&mut self, level: bool) {
        match &mut self.phase {
            Phase::Command { acc, bits } => {
                if self.n_bits_logged < 8 {
                    self.bit_log[self.n_bits_logged] = level;
                    self.n_bits_logged += 1;
                }
                if level {
                    *acc |= 1 << *bits;
                }
                *bits += 1;
                if *bits == 8 {
                    let cmd = *acc;
                    self.finish_command(cmd);
                }
            }
            Phase::Write { cmd, count, acc, bits } => {
                if level {
                    *acc |= 1 << *bits;
                }
                *bits += 1;
                if *bits == 8 {
                    let (cmd, count, value) = (*cmd, *count, *acc);
                    self.apply_write(cmd, count, value);
                    if let Phase::Write { count, acc, bits, .. } = &mut self.phase {
                        *count += 1;
                        *acc = 0;
                        *bits = 0;
                    }
                }
            }
            // While sending, the chip owns the line; rising edges carry no
            // host data.
            Phase::Read { .. } | Phase::Idle => {}
        }
    }

    fn falling(&mut self) {
        if let Phase::Read { queue, len, byte, bit } = &mut self.phase {
            self.driving = true;
            if *byte < *len {
                self.out_level = (queue[*byte as usize] >> *bit) & 1 == 1;
                *bit += 1;
                if *bit == 8 {
                    *bit = 0;
                    *byte += 1;
                }
            } else {
                // Clocking past the queue yields zeros
                self.out_level = false;
            }
        }
    }

    fn finish_command(&mut self, cmd: u8) {
        if self.n_commands < self.commands.len() {
            self.commands[self.n_commands] = cmd;
            self.n_commands += 1;
        }

        if cmd & READ != 0 {
            let mut queue = [0u8; MAX_BURST];
            let index = ((cmd >> 1) & 0x1F) as usize;
            let is_ram = cmd & 0x40 != 0;
            let len = match (is_ram, index) {
                // Burst transfers use index 31 of either area
                (false, 31) => {
                    queue[..8].copy_from_slice(&self.clock_regs[..8]);
                    8
                }
                (true, 31) => {
                    queue.copy_from_slice(&self.ram);
                    MAX_BURST as u8
                }
                (false, i) if i < CLOCK_AREA => {
                    queue[0] = self.clock_regs[i];
                    1
                }
                (true, i) => {
                    queue[0] = self.ram[i];
                    1
                }
                _ => 0,
            };
            self.phase = Phase::Read { queue, len, byte: 0, bit: 0 };
        } else {
            self.phase = Phase::Write { cmd, count: 0, acc: 0, bits: 0 };
        }
    }

    fn apply_write(&mut self, cmd: u8, count: u8, value: u8) {
        let index = ((cmd >> 1) & 0x1F) as usize;
        let is_ram = cmd & 0x40 != 0;
        match (is_ram, index) {
            (false, 31) => {
                // Clock burst: 8 bytes into the clock area
                if !self.write_protected() && (count as usize) < 8 {
                    self.clock_regs[count as usize] = value;
                }
            }
            (true, 31) => {
                if !self.write_protected() && (count as usize) < MAX_BURST {
                    self.ram[count as usize] = value;
                }
            }
            (false, i) if i < CLOCK_AREA && count == 0 => {
                // The control register itself is writable under protection
                if i == CONTROL_IDX || !self.write_protected() {
                    self.clock_regs[i] = value;
                }
            }
            (true, i) if count == 0 => {
                if !self.write_protected() {
                    self.ram[i] = value;
                }
            }
            _ => {}
        }
    }
}

/// Shared bus state the mock pins operate on
pub struct SimState {
    pub ce: bool,
    pub sclk: bool,
    pub io_is_output: bool,
    pub io_level: bool,
    /// Clock edges seen while chip-enable was low (must stay 0)
    pub edges_while_deselected: u32,
    /// Host drove or claimed the line while the chip was driving it
    pub contention: bool,
    pub chip: ChipModel,
}

impl SimState {
    pub fn new() -> Self {
        Self {
            ce: false,
            sclk: false,
            io_is_output: false,
            io_level: false,
            edges_while_deselected: 0,
            contention: false,
            chip: ChipModel::new(),
        }
    }

    fn set_ce(&mut self, high: bool) {
        if high == self.ce {
            return;
        }
        self.ce = high;
        if high {
            self.chip.select();
        } else {
            self.chip.deselect();
        }
    }

    fn set_sclk(&mut self, high: bool) {
        if high == self.sclk {
            return;
        }
        self.sclk = high;
        if !self.ce {
            self.edges_while_deselected += 1;
            return;
        }
        if high {
            // A released line with the pull-down reads low
            let level = self.io_is_output && self.io_level;
            self.chip.rising(level);
        } else {
            self.chip.falling();
        }
    }
}

pub struct CePin<'a>(pub &'a RefCell<SimState>);
pub struct ClockPin<'a>(pub &'a RefCell<SimState>);
pub struct DataPin<'a>(pub &'a RefCell<SimState>);

impl OutputPin for CePin<'_> {
    fn set_high(&mut self) {
        self.0.borrow_mut().set_ce(true);
    }

    fn set_low(&mut self) {
        self.0.borrow_mut().set_ce(false);
    }

    fn is_set_high(&self) -> bool {
        self.0.borrow().ce
    }
}

impl OutputPin for ClockPin<'_> {
    fn set_high(&mut self) {
        self.0.borrow_mut().set_sclk(true);
    }

    fn set_low(&mut self) {
        self.0.borrow_mut().set_sclk(false);
    }

    fn is_set_high(&self) -> bool {
        self.0.borrow().sclk
    }
}

impl BidirPin for DataPin<'_> {
    fn set_output(&mut self) {
        let mut s = self.0.borrow_mut();
        if s.chip.driving {
            s.contention = true;
        }
        s.io_is_output = true;
    }

    fn set_input(&mut self) {
        self.0.borrow_mut().io_is_output = false;
    }

    fn write(&mut self, high: bool) {
        let mut s = self.0.borrow_mut();
        if !s.io_is_output || s.chip.driving {
            s.contention = true;
        }
        s.io_level = high;
    }

    fn read(&mut self) -> bool {
        let s = self.0.borrow();
        if s.chip.driving {
            s.chip.out_level
        } else if s.io_is_output {
            s.io_level
        } else {
            false
        }
    }
}

pub struct NoDelay;

impl DelayUs for NoDelay {
    fn delay_us(&mut self, _us: u32) {}
}
