//! LEGv8 pipelined CPU simulator library.
//!
//! This crate implements a cycle-level simulator of a pipelined ARM64/LEGv8-style
//! CPU subset with the following:
//! 1. **Assembler:** Encodes textual instructions into fixed-width 32-bit words.
//! 2. **Core:** Five pipeline stages (fetch, decode, execute, memory, writeback),
//!    each running as its own thread joined by single-slot blocking handoffs.
//! 3. **Hazards:** A FIFO tracker of in-flight register writes that stalls decode
//!    until every source operand has committed (no forwarding network).
//! 4. **Memory:** A flat word-addressed store behind a two-phase address/data
//!    latch bus (the memory access unit).
//! 5. **Simulation:** Program loader, configuration, register snapshots, and
//!    run statistics.

/// Instruction encoder: text assembly to binary words.
pub mod asm;
/// Common types (errors, bit-field constants).
pub mod common;
/// Simulator configuration.
pub mod config;
/// CPU core (architectural state, pipeline stages, hazard tracking).
pub mod core;
/// Instruction set: opcode tables, decode classification, field extraction.
pub mod isa;
/// Flat memory and the memory access unit.
pub mod mem;
/// Program loader and pipeline orchestrator.
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Top-level error type returned by the loader and the simulator.
pub use crate::common::error::SimError;
/// Pipeline orchestrator; construct with `Simulator::new` and call `run`.
pub use crate::sim::simulator::Simulator;
