//! Decode stage.
//!
//! Turns a raw word into a [`MicroOp`] with fully resolved operand values.
//! For every source register the stage first blocks on the hazard tracker
//! until no older in-flight instruction still owes that register a write,
//! then reads the register file. If the instruction writes a destination,
//! decode enqueues a lock for it after resolving its own sources, and marks
//! the latch so writeback knows to release exactly one entry.
//!
//! Decode never touches the program counter: it resolves wrong-path words
//! exactly like committed ones, and execute squashes them later. An all-zero
//! word becomes a halt candidate; a word with the constant-zero register as
//! destination or an unrecognized opcode becomes a fault candidate. Both are
//! only acted on once execute confirms they sit on the committed path.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, SyncSender};

use tracing::trace;

use crate::common::constants::ZERO_REG;
use crate::common::error::PipelineFault;
use crate::core::Machine;
use crate::core::pipeline::{DecodeExecute, FetchDecode, MicroOp};
use crate::isa::decode::{
    alu_imm, branch_offset, cond_branch_offset, mem_offset, move_wide_imm, move_wide_shift, opcode,
    rd, rm, rn,
};
use crate::isa::{Family, classify};

/// Runs the decode loop until the fetch channel closes.
pub fn run_decode(
    machine: &Arc<Machine>,
    from_fetch: &Receiver<FetchDecode>,
    to_execute: &SyncSender<DecodeExecute>,
) {
    while let Ok(fetched) = from_fetch.recv() {
        let decoded = decode_one(machine, fetched);
        if to_execute.send(decoded).is_err() {
            return;
        }
    }
}

fn decode_one(machine: &Arc<Machine>, fetched: FetchDecode) -> DecodeExecute {
    let inst = fetched.inst;
    let mut latch = DecodeExecute {
        inst,
        next_pc: fetched.next_pc,
        generation: fetched.generation,
        op: MicroOp::Halt,
        operand1: 0,
        operand2: 0,
        imm: 0,
        lock_added: false,
    };

    if inst == 0 {
        trace!(pc = fetched.next_pc.wrapping_sub(1), "decoded halt candidate");
        return latch;
    }

    let op = opcode(inst);
    let Some(family) = classify(op) else {
        latch.op = MicroOp::Fault(PipelineFault::UnknownOpcode {
            pc: fetched.next_pc.wrapping_sub(1),
            opcode: op,
        });
        return latch;
    };

    match family {
        Family::MoveZero | Family::MoveKeep => {
            let dest = rd(inst);
            if dest == ZERO_REG {
                latch.op = illegal_destination(fetched.next_pc);
                return latch;
            }
            let keep = matches!(family, Family::MoveKeep);
            if keep {
                // MOVK reads the old destination value to merge into.
                latch.operand1 = read_sources(machine, &[dest])[0];
            }
            latch.imm = move_wide_imm(inst) as i32;
            latch.op = MicroOp::MoveWide {
                keep,
                rd: dest,
                shift: move_wide_shift(inst),
            };
            latch.lock_added = lock_dest(machine, dest);
        }
        Family::AluReg(alu) => {
            let dest = rd(inst);
            if dest == ZERO_REG {
                latch.op = illegal_destination(fetched.next_pc);
                return latch;
            }
            let values = read_sources(machine, &[rn(inst), rm(inst)]);
            latch.operand1 = values[0];
            latch.operand2 = values[1];
            latch.op = MicroOp::AluReg { op: alu, rd: dest };
            latch.lock_added = lock_dest(machine, dest);
        }
        Family::AluImm(alu) => {
            let dest = rd(inst);
            if dest == ZERO_REG {
                latch.op = illegal_destination(fetched.next_pc);
                return latch;
            }
            latch.operand1 = read_sources(machine, &[rn(inst)])[0];
            latch.imm = alu_imm(inst);
            latch.op = MicroOp::AluImm { op: alu, rd: dest };
            latch.lock_added = lock_dest(machine, dest);
        }
        Family::Load => {
            let dest = rd(inst);
            if dest == ZERO_REG {
                latch.op = illegal_destination(fetched.next_pc);
                return latch;
            }
            latch.operand1 = read_sources(machine, &[rn(inst)])[0];
            latch.imm = mem_offset(inst);
            latch.op = MicroOp::Load { rd: dest };
            latch.lock_added = lock_dest(machine, dest);
        }
        Family::Store => {
            let values = read_sources(machine, &[rn(inst), rd(inst)]);
            latch.operand1 = values[0];
            latch.operand2 = values[1];
            latch.imm = mem_offset(inst);
            latch.op = MicroOp::Store;
        }
        Family::Branch => {
            latch.imm = branch_offset(inst);
            latch.op = MicroOp::Branch;
        }
        Family::BranchZero | Family::BranchNotZero => {
            latch.operand1 = read_sources(machine, &[rd(inst)])[0];
            latch.imm = cond_branch_offset(inst);
            latch.op = MicroOp::CondBranch {
                when_zero: matches!(family, Family::BranchZero),
            };
        }
    }

    trace!(op = ?latch.op, generation = latch.generation, "decoded");
    latch
}

/// Blocks until every source register is clear of outstanding writes, then
/// reads them all under one register-file lock.
fn read_sources(machine: &Arc<Machine>, regs: &[u8]) -> Vec<u32> {
    let waits = machine.locks.wait_clear(regs);
    machine.stats.count_hazard_waits(waits);
    let file = machine.regs();
    regs.iter().map(|&r| file.read(r)).collect()
}

/// Enqueues a hazard lock for the destination. Always returns true; the
/// boolean shape keeps the `lock_added` assignment readable.
fn lock_dest(machine: &Arc<Machine>, dest: u8) -> bool {
    machine.locks.enqueue(dest);
    true
}

fn illegal_destination(next_pc: u32) -> MicroOp {
    MicroOp::Fault(PipelineFault::IllegalDestination {
        pc: next_pc.wrapping_sub(1),
    })
}
