//! Read-after-write hazard tracking.
//!
//! The tracker is an ordered multiset of register indices with outstanding
//! (not-yet-committed) writes: one entry per in-flight instruction that has a
//! destination register and has passed decode but not yet writeback. Decode
//! consults it before reading any source register; writeback releases one
//! entry per commit. Nothing else touches it.
//!
//! Waiting decoders block on a condition variable instead of spin-polling;
//! `release` wakes them. Releases are oldest-entry-first per register, which
//! is what guarantees in-program-order commit for a register written by
//! several in-flight instructions.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

/// FIFO record of registers with outstanding writes.
#[derive(Debug, Default)]
pub struct HazardTracker {
    pending: Mutex<VecDeque<u8>>,
    released: Condvar,
}

impl HazardTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    fn pending(&self) -> MutexGuard<'_, VecDeque<u8>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records one outstanding write to register `reg`.
    pub fn enqueue(&self, reg: u8) {
        self.pending().push_back(reg);
    }

    /// Whether register `reg` has at least one outstanding write.
    pub fn contains(&self, reg: u8) -> bool {
        self.pending().contains(&reg)
    }

    /// Releases the oldest outstanding write to register `reg` and wakes
    /// every waiting decoder.
    pub fn release(&self, reg: u8) {
        let mut pending = self.pending();
        if let Some(pos) = pending.iter().position(|&r| r == reg) {
            let _ = pending.remove(pos);
        }
        drop(pending);
        self.released.notify_all();
    }

    /// Blocks until none of `regs` has an outstanding write.
    ///
    /// Returns the number of times the caller had to wait, for stall
    /// accounting.
    pub fn wait_clear(&self, regs: &[u8]) -> u64 {
        let mut waits = 0;
        let mut pending = self.pending();
        while regs.iter().any(|r| pending.contains(r)) {
            waits += 1;
            pending = self
                .released
                .wait(pending)
                .unwrap_or_else(PoisonError::into_inner);
        }
        waits
    }

    /// Number of outstanding entries for register `reg`.
    pub fn count(&self, reg: u8) -> usize {
        self.pending().iter().filter(|&&r| r == reg).count()
    }

    /// Total number of outstanding entries.
    pub fn len(&self) -> usize {
        self.pending().len()
    }

    /// Whether no writes are outstanding at all.
    pub fn is_empty(&self) -> bool {
        self.pending().is_empty()
    }
}
