//! Shared machine state.
//!
//! One [`Machine`] instance is shared (via `Arc`) between the five stage
//! threads. It owns everything more than one stage touches:
//!
//! 1. the register file, read by decode and written by writeback;
//! 2. the program counter, advanced by fetch and redirected by execute;
//! 3. the hazard tracker, enqueued by decode and released by writeback;
//! 4. the memory word store, reached through per-stage access units;
//! 5. the halt flag and the execution counters.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::arch::{ProgramCounter, RegisterFile};
use crate::core::pipeline::HazardTracker;
use crate::mem::Memory;
use crate::stats::Stats;

/// All state shared between pipeline stages.
#[derive(Debug)]
pub struct Machine {
    regs: RwLock<RegisterFile>,
    pc: Mutex<ProgramCounter>,
    /// Registers with outstanding writes.
    pub locks: HazardTracker,
    memory: Arc<RwLock<Memory>>,
    halted: AtomicBool,
    /// Execution counters.
    pub stats: Stats,
}

impl Machine {
    /// Creates a machine over a pre-loaded memory image.
    pub fn new(memory: Memory) -> Self {
        Self {
            regs: RwLock::new(RegisterFile::new()),
            pc: Mutex::new(ProgramCounter::new()),
            locks: HazardTracker::new(),
            memory: Arc::new(RwLock::new(memory)),
            halted: AtomicBool::new(false),
            stats: Stats::new(),
        }
    }

    /// Locks the program counter. Fetch holds this across read-and-advance;
    /// execute holds it across staleness checks and redirects.
    pub fn pc(&self) -> MutexGuard<'_, ProgramCounter> {
        self.pc.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read access to the register file.
    pub fn regs(&self) -> RwLockReadGuard<'_, RegisterFile> {
        self.regs.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write access to the register file (writeback only).
    pub fn regs_mut(&self) -> RwLockWriteGuard<'_, RegisterFile> {
        self.regs.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Handle to the shared memory store, for building stage-local access
    /// units.
    pub fn memory(&self) -> Arc<RwLock<Memory>> {
        Arc::clone(&self.memory)
    }

    /// Whether a halt or fault has committed.
    pub fn is_halted(&self) -> bool {
        self.halted.load(Ordering::Acquire)
    }

    /// Marks the machine halted. Fetch stops issuing at its next loop turn.
    pub fn set_halted(&self) {
        self.halted.store(true, Ordering::Release);
    }
}
