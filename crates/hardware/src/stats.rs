//! Execution counters.
//!
//! Counters are plain relaxed atomics bumped from the stage threads; nothing
//! synchronizes through them. A [`StatsReport`] is the serializable snapshot
//! taken once the pipeline has drained.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Shared counters, one instance per machine.
#[derive(Debug, Default)]
pub struct Stats {
    fetched: AtomicU64,
    retired: AtomicU64,
    squashed: AtomicU64,
    branches: AtomicU64,
    branches_taken: AtomicU64,
    loads: AtomicU64,
    stores: AtomicU64,
    hazard_waits: AtomicU64,
}

impl Stats {
    /// Creates a zeroed counter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// One instruction word fetched (committed path or not).
    pub fn count_fetch(&self) {
        self.fetched.fetch_add(1, Ordering::Relaxed);
    }

    /// One instruction committed by writeback.
    pub fn count_retire(&self) {
        self.retired.fetch_add(1, Ordering::Relaxed);
    }

    /// One wrong-path entry squashed.
    pub fn count_squash(&self) {
        self.squashed.fetch_add(1, Ordering::Relaxed);
    }

    /// One branch resolved by execute; `taken` if it redirected the PC.
    pub fn count_branch(&self, taken: bool) {
        self.branches.fetch_add(1, Ordering::Relaxed);
        if taken {
            self.branches_taken.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// One load performed by the memory-access stage.
    pub fn count_load(&self) {
        self.loads.fetch_add(1, Ordering::Relaxed);
    }

    /// One store performed by the memory-access stage.
    pub fn count_store(&self) {
        self.stores.fetch_add(1, Ordering::Relaxed);
    }

    /// Adds `waits` decode stalls spent waiting on outstanding writes.
    pub fn count_hazard_waits(&self, waits: u64) {
        if waits > 0 {
            self.hazard_waits.fetch_add(waits, Ordering::Relaxed);
        }
    }

    /// Snapshot of every counter.
    pub fn report(&self) -> StatsReport {
        StatsReport {
            fetched: self.fetched.load(Ordering::Relaxed),
            retired: self.retired.load(Ordering::Relaxed),
            squashed: self.squashed.load(Ordering::Relaxed),
            branches: self.branches.load(Ordering::Relaxed),
            branches_taken: self.branches_taken.load(Ordering::Relaxed),
            loads: self.loads.load(Ordering::Relaxed),
            stores: self.stores.load(Ordering::Relaxed),
            hazard_waits: self.hazard_waits.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the execution counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatsReport {
    /// Instruction words fetched, including wrong-path ones.
    pub fetched: u64,
    /// Instructions committed.
    pub retired: u64,
    /// Wrong-path entries squashed.
    pub squashed: u64,
    /// Branches resolved.
    pub branches: u64,
    /// Branches that redirected the PC.
    pub branches_taken: u64,
    /// Loads performed.
    pub loads: u64,
    /// Stores performed.
    pub stores: u64,
    /// Decode stalls spent waiting on outstanding writes.
    pub hazard_waits: u64,
}
