//! Top-level simulator.
//!
//! Owns the machine and drives one run: it spawns the five stage threads,
//! wires them together with zero-capacity rendezvous channels, and joins them
//! once the pipeline has drained. The rendezvous channels are the clock —
//! a stage's send completes only when its successor is ready to receive, so
//! the stages advance in lockstep without any timing loop.

use std::sync::Arc;
use std::sync::mpsc::sync_channel;
use std::thread::{self, JoinHandle};

use tracing::info;

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::Machine;
use crate::core::pipeline::stages::{
    run_decode, run_execute, run_fetch, run_memory, run_writeback,
};
use crate::mem::Memory;
use crate::stats::StatsReport;

/// Outcome of a completed run.
#[derive(Clone, Copy, Debug)]
pub struct RunReport {
    /// Final execution counters.
    pub stats: StatsReport,
}

/// A machine plus the machinery to run it.
#[derive(Debug)]
pub struct Simulator {
    machine: Arc<Machine>,
}

impl Simulator {
    /// Builds a simulator over an assembled memory image.
    ///
    /// The image is padded with zero words up to the configured memory size.
    /// It must not exceed that size; the loader already enforces this, and
    /// direct callers get a debug assertion rather than a silent truncation.
    pub fn new(mut image: Vec<u32>, config: &Config) -> Self {
        debug_assert!(
            image.len() <= config.memory_words,
            "image of {} words exceeds memory of {} words",
            image.len(),
            config.memory_words
        );
        image.resize(config.memory_words, 0);
        Self {
            machine: Arc::new(Machine::new(Memory::from_image(image))),
        }
    }

    /// Runs the program until a halt or fault commits.
    ///
    /// # Errors
    ///
    /// Returns the first committed pipeline fault, or a stage-panic error if
    /// a thread died instead of draining.
    pub fn run(&self) -> Result<RunReport, SimError> {
        let (to_decode, from_fetch) = sync_channel(0);
        let (to_execute, from_decode) = sync_channel(0);
        let (to_memory, from_execute) = sync_channel(0);
        let (to_writeback, from_memory) = sync_channel(0);

        let fetch = spawn_stage("fetch", {
            let machine = Arc::clone(&self.machine);
            move || run_fetch(&machine, &to_decode)
        })?;
        let decode = spawn_stage("decode", {
            let machine = Arc::clone(&self.machine);
            move || {
                run_decode(&machine, &from_fetch, &to_execute);
                Ok(())
            }
        })?;
        let execute = spawn_stage("execute", {
            let machine = Arc::clone(&self.machine);
            move || {
                run_execute(&machine, &from_decode, &to_memory);
                Ok(())
            }
        })?;
        let memory = spawn_stage("memory", {
            let machine = Arc::clone(&self.machine);
            move || {
                run_memory(&machine, &from_execute, &to_writeback);
                Ok(())
            }
        })?;
        let writeback = spawn_stage("writeback", {
            let machine = Arc::clone(&self.machine);
            move || run_writeback(&machine, &from_memory)
        })?;

        // Writeback's verdict wins: it sees committed faults. Fetch can only
        // report an address fault of its own.
        let fetch_result = join_stage("fetch", fetch);
        join_stage("decode", decode)?;
        join_stage("execute", execute)?;
        join_stage("memory", memory)?;
        join_stage("writeback", writeback)?;
        match fetch_result {
            Ok(()) => {}
            // Fetch runs ahead of the halt commit, so a halt word near the
            // last memory word makes it overrun the end of the store. That
            // fault is real only if the machine never halted.
            Err(SimError::Fault(_)) if self.machine.is_halted() => {}
            Err(e) => return Err(e),
        }

        let stats = self.machine.stats.report();
        info!(retired = stats.retired, squashed = stats.squashed, "run complete");
        Ok(RunReport { stats })
    }

    /// Value of one register after (or before) a run.
    pub fn register(&self, idx: u8) -> u32 {
        self.machine.regs().read(idx)
    }

    /// Ordered name / hex-value pairs for the whole register file.
    pub fn snapshot(&self) -> Vec<(String, String)> {
        self.machine.regs().snapshot()
    }

    /// Reads one memory word, for inspecting store results.
    ///
    /// # Errors
    ///
    /// Returns an address fault for an out-of-range word address.
    pub fn memory_word(&self, addr: u32) -> Result<u32, SimError> {
        let memory = self.machine.memory();
        let guard = memory
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(guard.word(addr)?)
    }
}

fn spawn_stage<F>(name: &'static str, body: F) -> Result<JoinHandle<Result<(), SimError>>, SimError>
where
    F: FnOnce() -> Result<(), SimError> + Send + 'static,
{
    Ok(thread::Builder::new()
        .name(name.to_string())
        .spawn(body)?)
}

fn join_stage(name: &'static str, handle: JoinHandle<Result<(), SimError>>) -> Result<(), SimError> {
    handle
        .join()
        .map_err(|_| SimError::StagePanicked(name))?
}
