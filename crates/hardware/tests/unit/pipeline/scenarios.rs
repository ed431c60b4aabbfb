//! End-to-end program scenarios.
//!
//! Each test assembles a small program, runs it through the threaded
//! pipeline, and checks the final architectural state. The hazard tracker is
//! doing the heavy lifting in all of them: every program is a chain of
//! read-after-write dependencies that would compute garbage if decode ever
//! read a register with a pending write.

use legv8_core::Config;
use legv8_core::sim::Simulator;
use pretty_assertions::assert_eq;

use crate::common::harness::run_source;

#[test]
fn raw_dependency_chain_commits_in_order() {
    let (sim, _) = run_source(
        "MOVZ X0, #5, LSL #0\n\
         ADDI X1, X0, #3\n\
         ADD X2, X1, X0\n\
         SUB X3, X2, X1\n",
    );
    assert_eq!(sim.register(0), 5);
    assert_eq!(sim.register(1), 8);
    assert_eq!(sim.register(2), 13);
    assert_eq!(sim.register(3), 5);
}

#[test]
fn two_moves_and_an_add() {
    let (sim, _) = run_source(
        "MOVZ X0, #5, LSL #0\n\
         MOVZ X1, #10, LSL #0\n\
         ADD X2, X0, X1\n",
    );
    assert_eq!(sim.register(2), 15);
}

#[test]
fn counting_loop_runs_to_completion() {
    let (sim, report) = run_source(
        "MOVZ X0, #0, LSL #0\n\
         MOVZ X1, #10, LSL #0\n\
         ADDI X0, X0, #1\n\
         SUBS X2, X0, X1\n\
         CBNZ X2, #-2\n",
    );
    assert_eq!(sim.register(0), 10);
    assert_eq!(sim.register(2), 0);
    // Ten iterations of the three-instruction body, nine of them looping
    // back. Committed: 2 setup + 30 body + 1 halt word.
    assert_eq!(report.stats.branches, 10);
    assert_eq!(report.stats.branches_taken, 9);
    assert_eq!(report.stats.retired, 33);
}

#[test]
fn store_then_load_round_trips_through_memory() {
    let (sim, report) = run_source(
        "MOVZ X0, #100, LSL #0\n\
         MOVZ X1, #42, LSL #0\n\
         STUR X1, [X0, #0]\n\
         LDUR X2, [X0, #1]\n\
         LDUR X3, [X0, #0]\n",
    );
    assert_eq!(sim.memory_word(100).unwrap(), 42);
    assert_eq!(sim.register(2), 0);
    assert_eq!(sim.register(3), 42);
    assert_eq!(report.stats.loads, 2);
    assert_eq!(report.stats.stores, 1);
}

#[test]
fn movk_merges_into_existing_value() {
    let (sim, _) = run_source(
        "MOVZ X0, #0xDEAD, LSL #16\n\
         MOVK X0, #0xBEEF, LSL #0\n",
    );
    assert_eq!(sim.register(0), 0xDEAD_BEEF);
}

#[test]
fn movz_discards_existing_value() {
    let (sim, _) = run_source(
        "MOVZ X0, #0xDEAD, LSL #16\n\
         MOVZ X0, #7, LSL #0\n",
    );
    assert_eq!(sim.register(0), 7);
}

#[test]
fn stores_through_xzr_write_zero() {
    let (sim, _) = run_source(
        "MOVZ X0, #50, LSL #0\n\
         MOVZ X1, #9, LSL #0\n\
         STUR X1, [X0, #0]\n\
         STUR XZR, [X0, #0]\n",
    );
    assert_eq!(sim.memory_word(50).unwrap(), 0);
}

#[test]
fn negative_offsets_address_below_base() {
    let (sim, _) = run_source(
        "MOVZ X0, #100, LSL #0\n\
         MOVZ X1, #5, LSL #0\n\
         STUR X1, [X0, #-4]\n",
    );
    assert_eq!(sim.memory_word(96).unwrap(), 5);
}

#[test]
fn snapshot_reflects_final_state() {
    let (sim, _) = run_source("MOVZ X7, #0xAB, LSL #0\n");
    let snap = sim.snapshot();
    assert_eq!(snap.len(), 32);
    assert_eq!(snap[7], ("X7".to_string(), "000000AB".to_string()));
    assert_eq!(snap[31], ("XZR".to_string(), "00000000".to_string()));
}

#[test]
fn halt_in_the_last_memory_word_halts_cleanly() {
    // Fetch overruns the end of memory while the halt word is still in
    // flight; the overrun must not turn a clean halt into a fault.
    let config = Config { memory_words: 2 };
    let sim = Simulator::new(
        vec![
            0xD280_00A0, // MOVZ X0, #5
            0,           // halt, in the very last word
        ],
        &config,
    );
    let report = sim.run().expect("the committed halt wins over the overrun");
    assert_eq!(sim.register(0), 5);
    assert_eq!(report.stats.retired, 2);
}

#[test]
fn wrapping_arithmetic_is_silent() {
    // 0 - 1 wraps to u32::MAX; no trap, no flag, just the bits.
    let (sim, _) = run_source(
        "MOVZ X0, #0, LSL #0\n\
         SUBI X1, X0, #1\n",
    );
    assert_eq!(sim.register(1), u32::MAX);
}
