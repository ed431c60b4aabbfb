//! CPU core: architectural state and the five-stage pipeline.

/// Architectural state (register file, program counter).
pub mod arch;
/// The shared hardware state object handed to every stage.
pub mod machine;
/// Pipeline latches, hazard tracking, and the five stages.
pub mod pipeline;

pub use machine::Machine;
