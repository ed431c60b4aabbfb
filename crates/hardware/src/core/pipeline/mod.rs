//! The five-stage pipeline: hazard tracking, inter-stage latches, and the
//! stage loops themselves.

/// Read-after-write hazard tracking shared between decode and writeback.
pub mod hazards;
/// Latch structures handed between adjacent stages.
pub mod latches;
/// The five stage thread bodies.
pub mod stages;

pub use hazards::HazardTracker;
pub use latches::{DecodeExecute, ExecuteMemory, FetchDecode, MemOp, MemoryWriteback, MicroOp};
