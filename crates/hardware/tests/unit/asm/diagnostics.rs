//! Assembler diagnostics.
//!
//! Every error must carry the source file and 1-based line, and range errors
//! must cite the legal range in the base the operand was written in.

use legv8_core::asm::{assemble_line, assemble_source};
use legv8_core::common::error::AsmError;
use rstest::rstest;

fn fail(line: &str) -> AsmError {
    assemble_line(line, "prog.s", 7).expect_err("line must be rejected")
}

#[test]
fn unknown_mnemonic() {
    let err = fail("FROB X0, X1, X2");
    assert_eq!(
        err,
        AsmError::UnknownOpcode {
            file: "prog.s".to_string(),
            line: 7,
            opcode: "FROB".to_string(),
        }
    );
    assert_eq!(err.to_string(), "prog.s:7: unknown opcode `FROB`");
}

#[rstest]
#[case::write_to_xzr_move("MOVZ XZR, #1, LSL #0")]
#[case::write_to_xzr_arith("ADD XZR, X0, X1")]
#[case::write_to_xzr_imm("ADDI XZR, X0, #1")]
#[case::write_to_xzr_load("LDUR XZR, [X0, #0]")]
fn illegal_destination(#[case] line: &str) {
    assert!(matches!(
        fail(line),
        AsmError::IllegalDestination { line: 7, .. }
    ));
}

#[rstest]
#[case::too_few("ADD X1, X2")]
#[case::too_many("ADD X1, X2, X3, X4")]
#[case::missing_hash("ADDI X1, X0, 5")]
#[case::bad_register("ADD X1, Y2, X3")]
#[case::bare_mnemonic("MOVZ")]
#[case::bad_shift_keyword("MOVZ X0, #1, LSR #0")]
#[case::bad_address("LDUR X1, X0, #2]")]
fn syntax_errors(#[case] line: &str) {
    assert!(matches!(fail(line), AsmError::Syntax { line: 7, .. }));
}

#[test]
fn decimal_move_immediate_range_message_uses_decimal() {
    let AsmError::Range { msg, .. } = fail("MOVZ X0, #65536, LSL #0") else {
        panic!("expected a range error");
    };
    assert!(msg.contains("between 0 and 65535"), "msg: {msg}");
    assert!(msg.contains("65536"), "msg: {msg}");
}

#[test]
fn hex_move_immediate_range_message_uses_hex() {
    let AsmError::Range { msg, .. } = fail("MOVZ X0, #0x10000, LSL #0") else {
        panic!("expected a range error");
    };
    assert!(msg.contains("between 0x0000 and 0xFFFF"), "msg: {msg}");
}

#[rstest]
#[case::shift_not_multiple("MOVZ X0, #1, LSL #8")]
#[case::shift_too_large("MOVZ X0, #1, LSL #64")]
#[case::register_out_of_range("ADD X1, X40, X2")]
#[case::arith_imm_too_large("ADDI X1, X0, #2048")]
#[case::arith_imm_too_small("ADDI X1, X0, #-2049")]
#[case::offset_too_large("LDUR X1, [X0, #256]")]
#[case::offset_too_small("STUR X1, [X0, #-257]")]
fn range_errors(#[case] line: &str) {
    assert!(matches!(fail(line), AsmError::Range { line: 7, .. }));
}

#[test]
fn arith_boundary_values_accepted() {
    assert!(assemble_line("ADDI X1, X0, #2047", "prog.s", 1).is_ok());
    assert!(assemble_line("ADDI X1, X0, #-2048", "prog.s", 1).is_ok());
    assert!(assemble_line("LDUR X1, [X0, #255]", "prog.s", 1).is_ok());
    assert!(assemble_line("STUR X1, [X0, #-256]", "prog.s", 1).is_ok());
}

#[test]
fn program_too_large_is_checked_before_encoding() {
    let err = assemble_source("ADD X1, X2, X3\nNOT AN INSTRUCTION\n", "prog.s", 1)
        .expect_err("oversized program must be rejected");
    assert_eq!(
        err,
        AsmError::ProgramTooLarge {
            file: "prog.s".to_string(),
            words: 2,
            max: 1,
        }
    );
}

#[test]
fn error_line_numbers_skip_nothing() {
    // The blank line still counts toward line numbering.
    let err = assemble_source("ADD X1, X2, X3\n\nFROB X0\n", "prog.s", 16)
        .expect_err("bad line must surface");
    assert!(matches!(err, AsmError::UnknownOpcode { line: 3, .. }));
}
