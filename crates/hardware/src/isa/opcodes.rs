//! Opcode values for the supported LEGv8 subset.
//!
//! An instruction word's top 11 bits (bits 31-21) select its opcode family.
//! Families whose encodings reserve low opcode bits for other purposes (the
//! move-wide shift selector, the top bit of a wide immediate) span a range of
//! 11-bit values; the `*_MASK` constants select the significant bits.

/// MOVZ family base (9-bit family `110100101`, low 2 bits are the shift selector).
pub const MOVZ: u32 = 0x694;

/// MOVK family base (9-bit family `111100101`, low 2 bits are the shift selector).
pub const MOVK: u32 = 0x794;

/// Mask selecting the 9 family bits of a move-wide opcode.
pub const MOVE_WIDE_MASK: u32 = 0x7FC;

/// ADD (register): `Rd = Rn + Rm`.
pub const ADD: u32 = 0x458;

/// ADDS (register, flag-setting variant of ADD).
pub const ADDS: u32 = 0x558;

/// SUB (register): `Rd = Rn - Rm`.
pub const SUB: u32 = 0x658;

/// SUBS (register, flag-setting variant of SUB).
pub const SUBS: u32 = 0x758;

/// Mask for an exact 11-bit opcode match.
pub const EXACT_MASK: u32 = 0x7FF;

/// ADDI base (10-bit opcode; bit 21 belongs to the immediate).
pub const ADDI: u32 = 0x488;

/// ADDIS base.
pub const ADDIS: u32 = 0x588;

/// SUBI base.
pub const SUBI: u32 = 0x688;

/// SUBIS base.
pub const SUBIS: u32 = 0x788;

/// Mask selecting the 10 opcode bits of an immediate-arithmetic instruction.
pub const ALU_IMM_MASK: u32 = 0x7FE;

/// LDUR: load word with unsigned-offset addressing.
pub const LDUR: u32 = 0x7C2;

/// LDURB: byte-variant load.
pub const LDURB: u32 = 0x1C2;

/// LDURH: half-word-variant load.
pub const LDURH: u32 = 0x3C2;

/// LDURSW: sign-extending word load.
pub const LDURSW: u32 = 0x5C4;

/// STUR: store word with unsigned-offset addressing.
pub const STUR: u32 = 0x7C0;

/// STURB: byte-variant store.
pub const STURB: u32 = 0x1C0;

/// STURH: half-word-variant store.
pub const STURH: u32 = 0x3C0;

/// STURW: word-variant store.
pub const STURW: u32 = 0x5C0;

/// B base (6-bit opcode `000101`; bits 25-0 hold the offset).
pub const B: u32 = 0x0A0;

/// Mask selecting the 6 opcode bits of an unconditional branch.
pub const B_MASK: u32 = 0x7E0;

/// CBZ base (8-bit opcode `10110100`).
pub const CBZ: u32 = 0x5A0;

/// CBNZ base (8-bit opcode `10110101`).
pub const CBNZ: u32 = 0x5A8;

/// Mask selecting the 8 opcode bits of a conditional branch.
pub const CB_MASK: u32 = 0x7F8;
