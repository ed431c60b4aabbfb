//! Global architectural constants.
//!
//! This module defines the bit-field layout shared by the assembler and the
//! decode stage. It includes:
//! 1. **Register fields:** Masks and shifts for Rd/Rn/Rm/Rt slots.
//! 2. **Immediate fields:** Masks, shifts, and widths per opcode family.
//! 3. **Architectural constants:** Register count and the constant-zero index.

/// Number of general-purpose register slots.
pub const REG_COUNT: usize = 32;

/// Index of the constant-zero register (XZR): reads yield 0, writes are discarded.
pub const ZERO_REG: u8 = 31;

/// Highest register index the assembler accepts for a named `X<N>` register.
pub const MAX_NAMED_REG: u8 = 30;

/// Bit position of the 11-bit opcode field (bits 31-21).
pub const OPCODE_SHIFT: u32 = 21;

/// Mask for a 5-bit register field.
pub const REG_MASK: u32 = 0x1F;

/// Shift of the first source register field (Rn, bits 9-5).
pub const RN_SHIFT: u32 = 5;

/// Shift of the second source register field (Rm, bits 20-16).
pub const RM_SHIFT: u32 = 16;

/// Mask for the 16-bit move-wide immediate (bits 20-5).
pub const MOVE_IMM_MASK: u32 = 0xFFFF;

/// Shift of the move-wide immediate field.
pub const MOVE_IMM_SHIFT: u32 = 5;

/// Largest value a move-wide immediate can carry.
pub const MOVE_IMM_MAX: u64 = 0xFFFF;

/// Mask for the 2-bit move-wide shift selector carried in the low opcode bits.
pub const MOVE_HW_MASK: u32 = 0x3;

/// Largest left-shift a move-wide instruction can apply (`LSL #48`).
pub const MOVE_SHIFT_MAX: u32 = 48;

/// Mask for the 12-bit arithmetic immediate (bits 21-10).
pub const ALU_IMM_MASK: u32 = 0xFFF;

/// Shift of the arithmetic immediate field.
pub const ALU_IMM_SHIFT: u32 = 10;

/// Width in bits of the arithmetic immediate.
pub const ALU_IMM_BITS: u32 = 12;

/// Mask for the 9-bit load/store offset (bits 20-12).
pub const MEM_OFF_MASK: u32 = 0x1FF;

/// Shift of the load/store offset field.
pub const MEM_OFF_SHIFT: u32 = 12;

/// Width in bits of the load/store offset.
pub const MEM_OFF_BITS: u32 = 9;

/// Mask for the 26-bit unconditional branch offset (bits 25-0).
pub const BR_OFF_MASK: u32 = 0x3FF_FFFF;

/// Width in bits of the unconditional branch offset.
pub const BR_OFF_BITS: u32 = 26;

/// Mask for the 19-bit conditional branch offset (bits 23-5).
pub const CB_OFF_MASK: u32 = 0x7FFFF;

/// Shift of the conditional branch offset field.
pub const CB_OFF_SHIFT: u32 = 5;

/// Width in bits of the conditional branch offset.
pub const CB_OFF_BITS: u32 = 19;
