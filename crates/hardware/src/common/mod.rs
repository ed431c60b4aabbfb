//! Common types and constants shared across the simulator.

/// Instruction field masks, shifts, and architectural constants.
pub mod constants;
/// Error taxonomy for assembly-time and run-time failures.
pub mod error;

pub use error::{AsmError, PipelineFault, SimError};
