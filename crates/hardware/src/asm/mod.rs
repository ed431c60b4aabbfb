//! Instruction encoder (assembler).
//!
//! Compiles textual instructions, one per line, into the fixed-width binary
//! words the decode stage expects. Every malformed line is a typed
//! [`AsmError`](crate::common::AsmError) naming the source file and line; there
//! is no partial or recoverable load path.

/// Line-level encoders per opcode family.
pub mod assembler;
/// Operand token parsing (registers, immediates, shifts, addresses).
mod operands;

pub use assembler::{assemble_line, assemble_source};
