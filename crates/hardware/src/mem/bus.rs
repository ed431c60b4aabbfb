//! Memory access unit: the two-phase address/data latch bus.
//!
//! All traffic to [`Memory`] goes through an access unit. A transaction is
//! three steps on one instance: stage (`set_address` / `set_data`), transfer
//! (`read` / `write`), retrieve (`data`). The latches belong to the unit, so
//! `&mut self` makes single-transaction exclusivity structural; the shared
//! store behind the unit is locked only for the word transfer itself.

use std::sync::{Arc, RwLock};

use crate::common::error::PipelineFault;
use crate::mem::memory::Memory;

/// One port onto the shared memory, owning a staged address and data latch.
#[derive(Debug)]
pub struct MemoryAccessUnit {
    /// Memory address latch: the word index the next transfer acts on.
    mar: u32,
    /// Memory data latch: transfer source (writes) or destination (reads).
    mdr: u32,
    memory: Arc<RwLock<Memory>>,
}

impl MemoryAccessUnit {
    /// Creates an access unit over the shared store with cleared latches.
    pub fn new(memory: Arc<RwLock<Memory>>) -> Self {
        Self {
            mar: 0,
            mdr: 0,
            memory,
        }
    }

    /// Stages the address for the next transfer.
    pub fn set_address(&mut self, addr: u32) {
        self.mar = addr;
    }

    /// Stages the data word for the next write transfer.
    pub fn set_data(&mut self, data: u32) {
        self.mdr = data;
    }

    /// Transfers the word addressed by the address latch into the data latch.
    ///
    /// # Errors
    ///
    /// `AddressOutOfRange` when the staged address is outside the store.
    pub fn read(&mut self) -> Result<(), PipelineFault> {
        let memory = self
            .memory
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        self.mdr = memory.word(self.mar)?;
        Ok(())
    }

    /// Transfers the data latch into the word addressed by the address latch.
    ///
    /// # Errors
    ///
    /// `AddressOutOfRange` when the staged address is outside the store.
    pub fn write(&mut self) -> Result<(), PipelineFault> {
        let mut memory = self
            .memory
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        memory.set_word(self.mar, self.mdr)
    }

    /// Retrieves the data latch.
    pub fn data(&self) -> u32 {
        self.mdr
    }
}
