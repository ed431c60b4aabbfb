//! Memory subsystem.
//!
//! A flat, word-addressed store ([`memory::Memory`]) reachable only through a
//! two-phase address/data latch bus ([`bus::MemoryAccessUnit`]). The fetch and
//! memory-access stages each own an independent access unit over the one
//! shared store; exclusivity of a stage-transfer-retrieve sequence is
//! structural (`&mut self`), and the store itself is arbitrated by a lock held
//! only for the word transfer.

/// The two-phase address/data latch bus.
pub mod bus;
/// The flat word store.
pub mod memory;

pub use bus::MemoryAccessUnit;
pub use memory::Memory;
