//! Program loading and the top-level simulator.

/// Source-file loading and assembly into a memory image.
pub mod loader;
/// The five-thread pipeline driver.
pub mod simulator;

pub use loader::load_program;
pub use simulator::{RunReport, Simulator};
