//! # Unit Components
//!
//! Central hub for the per-component test modules.


/// Whole-pipeline tests: program scenarios, control flow, and faults.
pub mod pipeline;
