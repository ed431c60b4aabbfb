//! Architectural state.

/// The shared program counter with its redirect generation.
pub mod pc;
/// The 32-slot general-purpose register file.
pub mod regfile;

pub use pc::ProgramCounter;
pub use regfile::RegisterFile;
