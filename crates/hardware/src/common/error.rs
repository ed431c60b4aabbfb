//! Error taxonomy for the simulator.
//!
//! Every failure is a typed value propagated to one top-level decision point;
//! internal stages never terminate the process. The taxonomy splits by where a
//! failure is detected:
//! 1. **Assembly time** ([`AsmError`]): malformed lines, out-of-range fields,
//!    forbidden destinations — each names the source file and 1-based line.
//! 2. **Run time** ([`PipelineFault`]): illegal destination or unknown opcode
//!    discovered by decode, and out-of-range memory addresses — each names the
//!    offending program-counter value or address.

use thiserror::Error;

/// Assembly-time error, fatal for the whole program load.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AsmError {
    /// Malformed line: wrong operand count or an unparseable token.
    #[error("{file}:{line}: syntax error: {msg}")]
    Syntax {
        /// Source file being assembled.
        file: String,
        /// 1-based line number of the offending instruction.
        line: usize,
        /// What was malformed.
        msg: String,
    },

    /// An immediate, shift, or register index outside its legal bit width.
    #[error("{file}:{line}: range error: {msg}")]
    Range {
        /// Source file being assembled.
        file: String,
        /// 1-based line number of the offending instruction.
        line: usize,
        /// The legal range and the value that violated it.
        msg: String,
    },

    /// XZR / X31 named as the destination of a register write.
    #[error("{file}:{line}: illegal destination: cannot write to register XZR")]
    IllegalDestination {
        /// Source file being assembled.
        file: String,
        /// 1-based line number of the offending instruction.
        line: usize,
    },

    /// A mnemonic matching no supported opcode family.
    #[error("{file}:{line}: unknown opcode `{opcode}`")]
    UnknownOpcode {
        /// Source file being assembled.
        file: String,
        /// 1-based line number of the offending instruction.
        line: usize,
        /// The unrecognized mnemonic.
        opcode: String,
    },

    /// More instructions than the memory image can hold.
    #[error("{file}: program of {words} words exceeds memory of {max} words")]
    ProgramTooLarge {
        /// Source file being assembled.
        file: String,
        /// Number of instruction words in the program.
        words: usize,
        /// Capacity of the memory image.
        max: usize,
    },
}

/// Run-time fault detected by a pipeline stage.
///
/// Faults travel down the pipeline as values and are surfaced by the
/// orchestrator after the stage threads have drained.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PipelineFault {
    /// A fetched instruction names XZR as its destination register.
    #[error("pc={pc}: illegal destination: cannot write to register XZR")]
    IllegalDestination {
        /// Word address of the offending instruction.
        pc: u32,
    },

    /// The opcode bits match no supported family.
    #[error("pc={pc}: unknown opcode bits {opcode:#05x}")]
    UnknownOpcode {
        /// Word address of the offending instruction.
        pc: u32,
        /// The 11-bit opcode value that failed classification.
        opcode: u32,
    },

    /// A memory transaction addressed a word outside the store.
    #[error("address {addr} outside memory of {words} words")]
    AddressOutOfRange {
        /// The out-of-range word address.
        addr: u32,
        /// Capacity of the memory in words.
        words: usize,
    },
}

/// Top-level error type for program loading and simulation runs.
#[derive(Debug, Error)]
pub enum SimError {
    /// The assembly source could not be read.
    #[error("could not read program: {0}")]
    Io(#[from] std::io::Error),

    /// The program failed to assemble.
    #[error(transparent)]
    Asm(#[from] AsmError),

    /// A pipeline stage faulted while the program ran.
    #[error(transparent)]
    Fault(#[from] PipelineFault),

    /// A stage thread panicked; the run cannot be completed.
    #[error("pipeline stage `{0}` panicked")]
    StagePanicked(&'static str),
}
