//! Fetch stage.
//!
//! The only stage without an upstream channel: it drives itself off the
//! program counter. Each turn it takes the PC lock, reads and advances the
//! counter, releases the lock, pulls the word at that address through its own
//! memory access unit, and hands the word downstream. It never interprets
//! what it fetched; wrong-path words are execute's problem.

use std::sync::Arc;
use std::sync::mpsc::SyncSender;

use tracing::trace;

use crate::common::error::SimError;
use crate::core::Machine;
use crate::core::pipeline::FetchDecode;
use crate::mem::MemoryAccessUnit;

/// Runs the fetch loop until the machine halts.
///
/// # Errors
///
/// Returns a fault if the program counter runs off the end of memory. Fetch
/// runs ahead of the halt commit, so this also fires when a halt word sits in
/// the last memory words; the orchestrator discards the fault whenever the
/// machine halted anyway.
pub fn run_fetch(machine: &Arc<Machine>, to_decode: &SyncSender<FetchDecode>) -> Result<(), SimError> {
    let mut mau = MemoryAccessUnit::new(machine.memory());

    loop {
        if machine.is_halted() {
            trace!("fetch: halt flag observed, closing pipeline");
            return Ok(());
        }

        let (addr, generation) = machine.pc().fetch_advance();

        mau.set_address(addr);
        mau.read()?;
        let inst = mau.data();
        machine.stats.count_fetch();
        trace!(addr, inst = format_args!("{inst:08X}"), generation, "fetched");

        let latch = FetchDecode {
            inst,
            next_pc: addr.wrapping_add(1),
            generation,
        };
        if to_decode.send(latch).is_err() {
            // Decode is gone; the machine is coming down.
            return Ok(());
        }
    }
}
