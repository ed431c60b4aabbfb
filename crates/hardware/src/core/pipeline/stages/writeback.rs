//! Writeback stage.
//!
//! The only writer of architectural register state, and the stage that owns
//! shutdown. Per entry it commits the value (unless the entry is squashed or
//! faulted), releases the hazard lock decode enqueued, and on a confirmed
//! halt or fault raises the machine's halt flag.
//!
//! Raising the flag does not end the loop: entries already in flight keep
//! arriving until fetch observes the flag and closes the pipeline, and each
//! of them still owes a lock release. Writeback drains until its receiver
//! closes, then reports the first fault it saw, if any.

use std::sync::Arc;
use std::sync::mpsc::Receiver;

use tracing::{debug, trace};

use crate::common::error::SimError;
use crate::core::Machine;
use crate::core::pipeline::MemoryWriteback;

/// Runs the writeback loop until the memory channel closes.
///
/// # Errors
///
/// Returns the first committed pipeline fault, after the drain completes.
pub fn run_writeback(machine: &Arc<Machine>, from_memory: &Receiver<MemoryWriteback>) -> Result<(), SimError> {
    let mut first_fault = None;

    while let Ok(entry) = from_memory.recv() {
        if let Some(fault) = entry.fault {
            if first_fault.is_none() {
                debug!(%fault, "pipeline fault committed");
                first_fault = Some(fault);
            }
            machine.set_halted();
        } else if entry.squashed {
            trace!("writeback: dropping squashed entry");
        } else {
            if let Some(dest) = entry.dest {
                machine.regs_mut().write(dest, entry.value);
                trace!(dest, value = entry.value, "committed");
            }
            machine.stats.count_retire();
            if entry.halt {
                debug!("halt committed");
                machine.set_halted();
            }
        }

        if entry.lock_added {
            // Exactly one release per lock decode enqueued, squashed or not.
            if let Some(dest) = entry.dest {
                machine.locks.release(dest);
            }
        }
    }

    match first_fault {
        Some(fault) => Err(SimError::Fault(fault)),
        None => Ok(()),
    }
}
