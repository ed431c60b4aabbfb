//! Opcode classification and operand field extraction.
//!
//! Classification goes through a static table of `(mask, value, family)` rows
//! instead of numeric range comparisons: each row claims the opcode values
//! whose significant bits match, which keeps the table exhaustively testable
//! and trivially extensible. Field extraction helpers below the table pull the
//! per-family operand fields out of an instruction word and sign-extend the
//! ones that are semantically signed.

use crate::common::constants::{
    ALU_IMM_BITS, ALU_IMM_MASK, ALU_IMM_SHIFT, BR_OFF_BITS, BR_OFF_MASK, CB_OFF_BITS, CB_OFF_MASK,
    CB_OFF_SHIFT, MEM_OFF_BITS, MEM_OFF_MASK, MEM_OFF_SHIFT, MOVE_HW_MASK, MOVE_IMM_MASK,
    MOVE_IMM_SHIFT, OPCODE_SHIFT, REG_MASK, RM_SHIFT, RN_SHIFT,
};
use crate::isa::opcodes;

/// Arithmetic operation selector shared by the register and immediate families.
///
/// The flag-setting variants (ADDS, SUBS, ADDIS, SUBIS) fold onto the plain
/// operations: the data model carries no flags register, and the conditional
/// branches test registers directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Addition.
    Add,
    /// Subtraction (`operand1 - operand2`).
    Sub,
}

/// Opcode family tag: which field layout and execute behavior a word uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    /// MOVZ: move a shifted 16-bit immediate, zeroing the other bits.
    MoveZero,
    /// MOVK: move a shifted 16-bit immediate, keeping the other bits.
    MoveKeep,
    /// Register-register arithmetic.
    AluReg(AluOp),
    /// Register-immediate arithmetic (12-bit sign-extended immediate).
    AluImm(AluOp),
    /// Load with signed 9-bit offset (byte/half/word variants share layout).
    Load,
    /// Store with signed 9-bit offset.
    Store,
    /// Unconditional branch (26-bit signed word offset).
    Branch,
    /// Branch if the tested register is zero.
    BranchZero,
    /// Branch if the tested register is not zero.
    BranchNotZero,
}

/// One row of the classification table.
struct DecodeRow {
    /// Significant opcode bits for this family.
    mask: u32,
    /// Expected value of the significant bits.
    value: u32,
    /// Family tag emitted on a match.
    family: Family,
}

/// Classification table, one row per opcode (or opcode range).
const DECODE_TABLE: &[DecodeRow] = &[
    DecodeRow {
        mask: opcodes::MOVE_WIDE_MASK,
        value: opcodes::MOVZ,
        family: Family::MoveZero,
    },
    DecodeRow {
        mask: opcodes::MOVE_WIDE_MASK,
        value: opcodes::MOVK,
        family: Family::MoveKeep,
    },
    DecodeRow {
        mask: opcodes::EXACT_MASK,
        value: opcodes::ADD,
        family: Family::AluReg(AluOp::Add),
    },
    DecodeRow {
        mask: opcodes::EXACT_MASK,
        value: opcodes::ADDS,
        family: Family::AluReg(AluOp::Add),
    },
    DecodeRow {
        mask: opcodes::EXACT_MASK,
        value: opcodes::SUB,
        family: Family::AluReg(AluOp::Sub),
    },
    DecodeRow {
        mask: opcodes::EXACT_MASK,
        value: opcodes::SUBS,
        family: Family::AluReg(AluOp::Sub),
    },
    DecodeRow {
        mask: opcodes::ALU_IMM_MASK,
        value: opcodes::ADDI,
        family: Family::AluImm(AluOp::Add),
    },
    DecodeRow {
        mask: opcodes::ALU_IMM_MASK,
        value: opcodes::ADDIS,
        family: Family::AluImm(AluOp::Add),
    },
    DecodeRow {
        mask: opcodes::ALU_IMM_MASK,
        value: opcodes::SUBI,
        family: Family::AluImm(AluOp::Sub),
    },
    DecodeRow {
        mask: opcodes::ALU_IMM_MASK,
        value: opcodes::SUBIS,
        family: Family::AluImm(AluOp::Sub),
    },
    DecodeRow {
        mask: opcodes::EXACT_MASK,
        value: opcodes::LDUR,
        family: Family::Load,
    },
    DecodeRow {
        mask: opcodes::EXACT_MASK,
        value: opcodes::LDURB,
        family: Family::Load,
    },
    DecodeRow {
        mask: opcodes::EXACT_MASK,
        value: opcodes::LDURH,
        family: Family::Load,
    },
    DecodeRow {
        mask: opcodes::EXACT_MASK,
        value: opcodes::LDURSW,
        family: Family::Load,
    },
    DecodeRow {
        mask: opcodes::EXACT_MASK,
        value: opcodes::STUR,
        family: Family::Store,
    },
    DecodeRow {
        mask: opcodes::EXACT_MASK,
        value: opcodes::STURB,
        family: Family::Store,
    },
    DecodeRow {
        mask: opcodes::EXACT_MASK,
        value: opcodes::STURH,
        family: Family::Store,
    },
    DecodeRow {
        mask: opcodes::EXACT_MASK,
        value: opcodes::STURW,
        family: Family::Store,
    },
    DecodeRow {
        mask: opcodes::B_MASK,
        value: opcodes::B,
        family: Family::Branch,
    },
    DecodeRow {
        mask: opcodes::CB_MASK,
        value: opcodes::CBZ,
        family: Family::BranchZero,
    },
    DecodeRow {
        mask: opcodes::CB_MASK,
        value: opcodes::CBNZ,
        family: Family::BranchNotZero,
    },
];

/// Classifies an 11-bit opcode value into its family.
///
/// Returns `None` when the opcode matches no supported family; the decode
/// stage turns that into an unknown-opcode fault.
pub fn classify(opcode: u32) -> Option<Family> {
    DECODE_TABLE
        .iter()
        .find(|row| opcode & row.mask == row.value)
        .map(|row| row.family)
}

/// Extracts the 11-bit opcode from an instruction word (bits 31-21).
#[inline]
pub fn opcode(inst: u32) -> u32 {
    inst >> OPCODE_SHIFT
}

/// Extracts the destination register field (bits 4-0).
#[inline]
pub fn rd(inst: u32) -> u8 {
    (inst & REG_MASK) as u8
}

/// Extracts the first source register field (Rn, bits 9-5).
#[inline]
pub fn rn(inst: u32) -> u8 {
    ((inst >> RN_SHIFT) & REG_MASK) as u8
}

/// Extracts the second source register field (Rm, bits 20-16).
#[inline]
pub fn rm(inst: u32) -> u8 {
    ((inst >> RM_SHIFT) & REG_MASK) as u8
}

/// Extracts the 16-bit move-wide immediate (bits 20-5).
#[inline]
pub fn move_wide_imm(inst: u32) -> u32 {
    (inst >> MOVE_IMM_SHIFT) & MOVE_IMM_MASK
}

/// Extracts the move-wide shift amount in bits (0, 16, 32, or 48).
#[inline]
pub fn move_wide_shift(inst: u32) -> u32 {
    (opcode(inst) & MOVE_HW_MASK) * 16
}

/// Extracts the sign-extended 12-bit arithmetic immediate (bits 21-10).
#[inline]
pub fn alu_imm(inst: u32) -> i32 {
    sign_extend((inst >> ALU_IMM_SHIFT) & ALU_IMM_MASK, ALU_IMM_BITS)
}

/// Extracts the sign-extended 9-bit load/store offset (bits 20-12).
#[inline]
pub fn mem_offset(inst: u32) -> i32 {
    sign_extend((inst >> MEM_OFF_SHIFT) & MEM_OFF_MASK, MEM_OFF_BITS)
}

/// Extracts the sign-extended 26-bit unconditional branch offset (bits 25-0).
#[inline]
pub fn branch_offset(inst: u32) -> i32 {
    sign_extend(inst & BR_OFF_MASK, BR_OFF_BITS)
}

/// Extracts the sign-extended 19-bit conditional branch offset (bits 23-5).
#[inline]
pub fn cond_branch_offset(inst: u32) -> i32 {
    sign_extend((inst >> CB_OFF_SHIFT) & CB_OFF_MASK, CB_OFF_BITS)
}

/// Sign-extends a `bits`-wide field to 32 bits.
///
/// Bit `bits - 1` is the sign bit; the bits above it in `value` must be zero.
#[inline]
pub fn sign_extend(value: u32, bits: u32) -> i32 {
    debug_assert!(bits >= 1 && bits <= 32);
    let shift = 32 - bits;
    ((value << shift) as i32) >> shift
}
