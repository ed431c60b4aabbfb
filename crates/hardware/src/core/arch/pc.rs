//! Shared program counter.
//!
//! The counter is a single word-address cursor read-and-incremented by fetch
//! and overwritten by execute on a taken branch. Both operations happen under
//! one mutex (a guarded critical section), so a branch's target write can
//! neither be lost to nor race past a concurrently advancing fetch.
//!
//! Every redirect bumps a generation counter. Fetched instructions carry the
//! generation they were fetched under; execute treats any entry whose
//! generation is older than the counter's as wrong-path and squashes it
//! before it can alter observable state.

/// Word-address cursor plus the redirect generation.
#[derive(Debug, Default)]
pub struct ProgramCounter {
    addr: u32,
    generation: u64,
}

impl ProgramCounter {
    /// Creates a counter at address 0, generation 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current address and generation, then advances by one word.
    ///
    /// The caller must hold this under the PC lock so the read and the
    /// increment are one atomic step with respect to redirects.
    pub fn fetch_advance(&mut self) -> (u32, u64) {
        let fetched = (self.addr, self.generation);
        self.addr = self.addr.wrapping_add(1);
        fetched
    }

    /// Redirects the counter to a branch target and opens a new generation.
    pub fn redirect(&mut self, target: u32) {
        self.addr = target;
        self.generation += 1;
    }

    /// The current redirect generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
