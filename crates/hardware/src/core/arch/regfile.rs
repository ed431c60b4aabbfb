//! General-purpose register file.
//!
//! 32 slots of 32 bits. Slot 31 is the constant-zero sink/source: reads yield
//! 0 and writes are discarded. Five slots carry conventional role names for
//! display purposes only (IP0, IP1, SP, FP, LR) — there is no differing
//! hardware semantics behind them.

use crate::common::constants::{REG_COUNT, ZERO_REG};

/// The 32-slot register file. Read by decode, written only by writeback.
#[derive(Debug)]
pub struct RegisterFile {
    regs: [u32; REG_COUNT],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with all slots zeroed.
    pub fn new() -> Self {
        Self {
            regs: [0; REG_COUNT],
        }
    }

    /// Reads a register; index 31 always yields 0.
    pub fn read(&self, idx: u8) -> u32 {
        if idx == ZERO_REG {
            0
        } else {
            self.regs[idx as usize]
        }
    }

    /// Writes a register; writes to index 31 are silently discarded.
    pub fn write(&mut self, idx: u8, value: u32) {
        if idx != ZERO_REG {
            self.regs[idx as usize] = value;
        }
    }

    /// Display name for a register index, with conventional role annotations.
    pub fn name(idx: u8) -> String {
        match idx {
            16 => "X16 (IP0)".to_string(),
            17 => "X17 (IP1)".to_string(),
            28 => "X28 (SP)".to_string(),
            29 => "X29 (FP)".to_string(),
            30 => "X30 (LR)".to_string(),
            31 => "XZR".to_string(),
            n => format!("X{n}"),
        }
    }

    /// Read-only snapshot of the whole file: ordered name / fixed-width-hex
    /// pairs, as consumed by an external state display.
    pub fn snapshot(&self) -> Vec<(String, String)> {
        (0..REG_COUNT as u8)
            .map(|idx| (Self::name(idx), format!("{:08X}", self.read(idx))))
            .collect()
    }
}
