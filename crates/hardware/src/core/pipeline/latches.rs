//! Pipeline latch structures for inter-stage communication.
//!
//! One latch value carries one instruction between two adjacent stages:
//! Fetch → Decode → Execute → Memory-Access → Writeback. Each value is
//! created for a single instruction and discarded once consumed. Every latch
//! carries the redirect generation its instruction was fetched under so that
//! execute can squash wrong-path entries.

use crate::common::error::PipelineFault;
use crate::isa::AluOp;

/// Fetch → Decode latch: the raw word and the already-incremented PC.
#[derive(Clone, Copy, Debug)]
pub struct FetchDecode {
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Program counter after the unconditional increment (instruction
    /// address + 1).
    pub next_pc: u32,
    /// Redirect generation at fetch time.
    pub generation: u64,
}

/// Fully resolved micro-operation emitted by decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MicroOp {
    /// MOVZ / MOVK. `keep` preserves the untouched bit positions (MOVK),
    /// which is why decode read the old destination value into operand 1.
    MoveWide {
        /// Preserve bits outside the shifted immediate field.
        keep: bool,
        /// Destination register.
        rd: u8,
        /// Left-shift applied to the immediate (0, 16, 32, or 48).
        shift: u32,
    },
    /// Register-register arithmetic on operands 1 and 2.
    AluReg {
        /// Operation selector.
        op: AluOp,
        /// Destination register.
        rd: u8,
    },
    /// Register-immediate arithmetic on operand 1 and the immediate.
    AluImm {
        /// Operation selector.
        op: AluOp,
        /// Destination register.
        rd: u8,
    },
    /// Load from `operand1 + imm`.
    Load {
        /// Destination register.
        rd: u8,
    },
    /// Store operand 2 to `operand1 + imm`. No destination, no hazard lock.
    Store,
    /// Unconditional branch by the immediate word offset.
    Branch,
    /// Conditional branch testing operand 1 against zero.
    CondBranch {
        /// Branch when the tested value is zero (CBZ) or nonzero (CBNZ).
        when_zero: bool,
    },
    /// All-zero instruction word: stop the machine once confirmed on the
    /// committed path.
    Halt,
    /// Decode-detected fault, confirmed by execute before it is fatal so
    /// that wrong-path garbage cannot abort the run.
    Fault(PipelineFault),
}

/// Decode → Execute latch.
#[derive(Clone, Copy, Debug)]
pub struct DecodeExecute {
    /// Raw instruction encoding.
    pub inst: u32,
    /// Incremented program counter from fetch.
    pub next_pc: u32,
    /// Redirect generation at fetch time.
    pub generation: u64,
    /// The resolved micro-operation.
    pub op: MicroOp,
    /// First resolved source value (Rn, or the old Rd for MOVK, or the
    /// tested register for CBZ/CBNZ).
    pub operand1: u32,
    /// Second resolved source value (Rm, or the store data).
    pub operand2: u32,
    /// Sign-extended immediate or branch offset.
    pub imm: i32,
    /// Whether decode enqueued a hazard lock for the destination; writeback
    /// owes exactly one release if set.
    pub lock_added: bool,
}

/// Memory operation requested of the memory-access stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemOp {
    /// Pass through untouched.
    None,
    /// Read the word at the computed address into the result.
    Load,
    /// Write the carried word to the computed address.
    Store {
        /// The value to store (operand 2 at decode time).
        data: u32,
    },
}

/// Execute → Memory-Access latch.
#[derive(Clone, Copy, Debug)]
pub struct ExecuteMemory {
    /// Incremented program counter, kept for diagnostics.
    pub next_pc: u32,
    /// Destination register, if the instruction writes one.
    pub dest: Option<u8>,
    /// ALU result, or the effective address for loads/stores.
    pub result: u32,
    /// What the memory-access stage must do.
    pub mem_op: MemOp,
    /// Hazard lock debt inherited from decode.
    pub lock_added: bool,
    /// Wrong-path entry: flows through for lock release only.
    pub squashed: bool,
    /// Confirmed halt: writeback stops the machine after this commits.
    pub halt: bool,
    /// Confirmed fault to surface once the pipeline has drained.
    pub fault: Option<PipelineFault>,
}

/// Memory-Access → Writeback latch.
#[derive(Clone, Copy, Debug)]
pub struct MemoryWriteback {
    /// Incremented program counter, kept for diagnostics.
    pub next_pc: u32,
    /// Destination register, if the instruction writes one.
    pub dest: Option<u8>,
    /// Final value to commit (ALU result or loaded word).
    pub value: u32,
    /// Hazard lock debt inherited from decode.
    pub lock_added: bool,
    /// Wrong-path entry: release the lock, commit nothing.
    pub squashed: bool,
    /// Confirmed halt.
    pub halt: bool,
    /// Confirmed fault to surface once the pipeline has drained.
    pub fault: Option<PipelineFault>,
}
