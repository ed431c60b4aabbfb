//! Execute stage.
//!
//! The arbiter of the committed path. Entries arrive in program order, so
//! this stage can settle three questions nothing upstream can:
//!
//! 1. Is this entry wrong-path? Under the PC lock it compares the entry's
//!    fetch generation against the current redirect generation; older means
//!    a branch between fetch and now redirected the machine, and the entry
//!    becomes a squashed bubble. It still flows downstream so writeback can
//!    release its hazard lock.
//! 2. Does a branch fire? Taken branches redirect the PC (and open a new
//!    generation) under the same lock.
//! 3. Is a halt or fault candidate real? A candidate on the committed path is
//!    confirmed here; once one is confirmed every later entry is squashed
//!    locally without consulting the PC, since nothing after a halt commits.
//!
//! Branch targets are word-relative to the instruction's own address, which
//! is the already-incremented `next_pc` minus one.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, SyncSender};

use tracing::trace;

use crate::core::Machine;
use crate::core::pipeline::{DecodeExecute, ExecuteMemory, MemOp, MicroOp};
use crate::isa::AluOp;

/// Runs the execute loop until the decode channel closes.
pub fn run_execute(
    machine: &Arc<Machine>,
    from_decode: &Receiver<DecodeExecute>,
    to_memory: &SyncSender<ExecuteMemory>,
) {
    // Set once a halt or fault is confirmed; everything after it on the
    // in-order stream is dead by definition.
    let mut stopped = false;

    while let Ok(entry) = from_decode.recv() {
        let out = if stopped {
            machine.stats.count_squash();
            squash(&entry)
        } else {
            let (out, stop) = execute_one(machine, &entry);
            stopped = stop;
            out
        };
        if to_memory.send(out).is_err() {
            return;
        }
    }
}

/// Executes one entry. Returns the outgoing latch and whether a halt or
/// fault was confirmed on the committed path.
fn execute_one(machine: &Arc<Machine>, entry: &DecodeExecute) -> (ExecuteMemory, bool) {
    // Staleness check and branch resolution share one critical section so a
    // redirect cannot slip in between them.
    let mut pc = machine.pc();
    if entry.generation != pc.generation() {
        drop(pc);
        machine.stats.count_squash();
        trace!(inst = format_args!("{:08X}", entry.inst), "squashed wrong-path entry");
        return (squash(entry), false);
    }

    let mut out = ExecuteMemory {
        next_pc: entry.next_pc,
        dest: None,
        result: 0,
        mem_op: MemOp::None,
        lock_added: entry.lock_added,
        squashed: false,
        halt: false,
        fault: None,
    };

    match entry.op {
        MicroOp::MoveWide { keep, rd, shift } => {
            drop(pc);
            let imm = (entry.imm as u32) & 0xFFFF;
            let placed = (u64::from(imm) << shift) as u32;
            out.result = if keep {
                let mask = ((0xFFFFu64 << shift) as u32) ^ u32::MAX;
                (entry.operand1 & mask) | placed
            } else {
                placed
            };
            out.dest = Some(rd);
        }
        MicroOp::AluReg { op, rd } => {
            drop(pc);
            out.result = alu(op, entry.operand1, entry.operand2);
            out.dest = Some(rd);
        }
        MicroOp::AluImm { op, rd } => {
            drop(pc);
            out.result = alu(op, entry.operand1, entry.imm as u32);
            out.dest = Some(rd);
        }
        MicroOp::Load { rd } => {
            drop(pc);
            out.result = entry.operand1.wrapping_add_signed(entry.imm);
            out.mem_op = MemOp::Load;
            out.dest = Some(rd);
        }
        MicroOp::Store => {
            drop(pc);
            out.result = entry.operand1.wrapping_add_signed(entry.imm);
            out.mem_op = MemOp::Store {
                data: entry.operand2,
            };
        }
        MicroOp::Branch => {
            let target = branch_target(entry.next_pc, entry.imm);
            pc.redirect(target);
            drop(pc);
            machine.stats.count_branch(true);
            trace!(target, "branch taken");
        }
        MicroOp::CondBranch { when_zero } => {
            let taken = (entry.operand1 == 0) == when_zero;
            if taken {
                let target = branch_target(entry.next_pc, entry.imm);
                pc.redirect(target);
                trace!(target, "conditional branch taken");
            }
            drop(pc);
            machine.stats.count_branch(taken);
        }
        MicroOp::Halt => {
            drop(pc);
            out.halt = true;
            trace!(pc = entry.next_pc.wrapping_sub(1), "halt confirmed");
            return (out, true);
        }
        MicroOp::Fault(fault) => {
            drop(pc);
            out.fault = Some(fault);
            return (out, true);
        }
    }

    (out, false)
}

fn alu(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
    }
}

/// Branch target in words: the instruction's own address plus the offset.
fn branch_target(next_pc: u32, offset: i32) -> u32 {
    next_pc.wrapping_sub(1).wrapping_add_signed(offset)
}

/// Converts an entry into a bubble. The destination register survives the
/// squash: writeback needs it to release the hazard lock, it just never
/// commits a value to it.
fn squash(entry: &DecodeExecute) -> ExecuteMemory {
    let dest = match entry.op {
        MicroOp::MoveWide { rd, .. }
        | MicroOp::AluReg { rd, .. }
        | MicroOp::AluImm { rd, .. }
        | MicroOp::Load { rd } => Some(rd),
        _ => None,
    };
    ExecuteMemory {
        next_pc: entry.next_pc,
        dest,
        result: 0,
        mem_op: MemOp::None,
        lock_added: entry.lock_added,
        squashed: true,
        halt: false,
        fault: None,
    }
}
