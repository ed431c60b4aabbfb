//! Run-time faults.
//!
//! A fault discovered mid-pipeline travels down as a value, stops the machine
//! after the drain, and comes back as the run's error. The committed register
//! state from before the fault must survive.

use legv8_core::SimError;
use legv8_core::common::error::PipelineFault;

use crate::common::harness::{TEST_MEMORY_WORDS, run_image};

fn expect_fault(result: Result<legv8_core::sim::RunReport, SimError>) -> PipelineFault {
    match result {
        Err(SimError::Fault(fault)) => fault,
        other => panic!("expected a pipeline fault, got {other:?}"),
    }
}

#[test]
fn unknown_opcode_faults_with_pc() {
    let image = vec![
        0xD280_00A0, // MOVZ X0, #5
        0xFFE0_0000, // opcode 0x7FF: no such family
    ];
    let (sim, result) = run_image(image);
    let fault = expect_fault(result);
    assert_eq!(
        fault,
        PipelineFault::UnknownOpcode {
            pc: 1,
            opcode: 0x7FF,
        }
    );
    // The instruction before the fault still committed.
    assert_eq!(sim.register(0), 5);
}

#[test]
fn illegal_destination_faults_at_decode() {
    // ADDI X31, X0, #3: the encoder refuses to emit this, so build the word
    // by hand. The zero-register destination must fault, not silently drop.
    let image = vec![0x9100_0C1F];
    let (_, result) = run_image(image);
    let fault = expect_fault(result);
    assert_eq!(fault, PipelineFault::IllegalDestination { pc: 0 });
}

#[test]
fn load_outside_memory_faults() {
    // The effective address wraps below zero to u32::MAX.
    let image = vec![
        0xD280_0000, // MOVZ X0, #0
        0xF85F_F001, // LDUR X1, [X0, #-1]
    ];
    let (_, result) = run_image(image);
    let fault = expect_fault(result);
    assert_eq!(
        fault,
        PipelineFault::AddressOutOfRange {
            addr: u32::MAX,
            words: TEST_MEMORY_WORDS,
        }
    );
}

#[test]
fn store_outside_memory_faults() {
    let image = vec![
        0xD29F_FFE0, // MOVZ X0, #65535
        0xF800_001F, // STUR XZR, [X0, #0]: address 65535, outside 1024 words
    ];
    let (_, result) = run_image(image);
    let fault = expect_fault(result);
    assert_eq!(
        fault,
        PipelineFault::AddressOutOfRange {
            addr: 65535,
            words: TEST_MEMORY_WORDS,
        }
    );
}

#[test]
fn fault_messages_name_the_location() {
    let fault = PipelineFault::UnknownOpcode {
        pc: 3,
        opcode: 0x7FF,
    };
    assert_eq!(fault.to_string(), "pc=3: unknown opcode bits 0x7ff");

    let fault = PipelineFault::IllegalDestination { pc: 9 };
    assert_eq!(
        fault.to_string(),
        "pc=9: illegal destination: cannot write to register XZR"
    );
}

#[test]
fn committed_work_survives_a_later_fault() {
    let image = vec![
        0xD280_00A0, // MOVZ X0, #5
        0x9100_0C01, // ADDI X1, X0, #3
        0xFFE0_0000, // fault
        0x9100_0C02, // ADDI X2, X0, #3: behind the fault, must not commit
    ];
    let (sim, result) = run_image(image);
    expect_fault(result);
    assert_eq!(sim.register(0), 5);
    assert_eq!(sim.register(1), 8);
    assert_eq!(sim.register(2), 0);
}
