//! Instruction set definitions.
//!
//! This module holds everything both sides of the binary format agree on:
//! 1. **Opcodes:** Numeric opcode values per family ([`opcodes`]).
//! 2. **Classification:** The mask/value dispatch table mapping opcode bits to
//!    an opcode family ([`decode`]).
//! 3. **Fields:** Extraction and sign-extension helpers for operand fields.

/// Opcode classification table and field extraction.
pub mod decode;
/// Opcode values and family base/mask pairs.
pub mod opcodes;

pub use decode::{AluOp, Family, classify};
