//! Memory-access stage.
//!
//! Owns its own [`MemoryAccessUnit`] over the shared word store. Loads latch
//! the effective address, pull the word through the unit, and replace the
//! carried result with it; stores latch address and data and push them out.
//! Everything else passes through untouched.
//!
//! An out-of-range address becomes a fault carried in the latch, never an
//! early exit: the entry must still reach writeback so its hazard lock is
//! released and the machine comes down in an orderly drain.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, SyncSender};

use tracing::trace;

use crate::core::Machine;
use crate::core::pipeline::{ExecuteMemory, MemOp, MemoryWriteback};
use crate::mem::MemoryAccessUnit;

/// Runs the memory-access loop until the execute channel closes.
pub fn run_memory(
    machine: &Arc<Machine>,
    from_execute: &Receiver<ExecuteMemory>,
    to_writeback: &SyncSender<MemoryWriteback>,
) {
    let mut mau = MemoryAccessUnit::new(machine.memory());

    while let Ok(entry) = from_execute.recv() {
        let mut out = MemoryWriteback {
            next_pc: entry.next_pc,
            dest: entry.dest,
            value: entry.result,
            lock_added: entry.lock_added,
            squashed: entry.squashed,
            halt: entry.halt,
            fault: entry.fault,
        };

        if !entry.squashed && entry.fault.is_none() {
            match entry.mem_op {
                MemOp::None => {}
                MemOp::Load => {
                    mau.set_address(entry.result);
                    match mau.read() {
                        Ok(()) => {
                            out.value = mau.data();
                            machine.stats.count_load();
                            trace!(addr = entry.result, value = out.value, "loaded");
                        }
                        Err(fault) => out.fault = Some(fault),
                    }
                }
                MemOp::Store { data } => {
                    mau.set_address(entry.result);
                    mau.set_data(data);
                    match mau.write() {
                        Ok(()) => {
                            machine.stats.count_store();
                            trace!(addr = entry.result, value = data, "stored");
                        }
                        Err(fault) => out.fault = Some(fault),
                    }
                }
            }
        }

        if to_writeback.send(out).is_err() {
            return;
        }
    }
}
