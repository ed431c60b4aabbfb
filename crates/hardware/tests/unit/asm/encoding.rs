//! Exact instruction encodings.
//!
//! The expected words follow the fixed field layout: 11-bit opcode in bits
//! 31-21 and family-specific operand fields below. The arithmetic, move-wide,
//! load/store, and branch expectations line up with the corresponding A64
//! encodings, which makes them easy to cross-check with any disassembler.

use legv8_core::asm::assemble_line;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn encode(line: &str) -> u32 {
    assemble_line(line, "test.s", 1).expect("line assembles")
}

#[rstest]
#[case("MOVZ X0, #5, LSL #0", 0xD280_00A0)]
#[case("MOVZ X0, #0, LSL #0", 0xD280_0000)]
#[case("MOVK X1, #0xBEEF, LSL #16", 0xF2B7_DDE1)]
#[case("MOVZ X2, #0xFFFF, LSL #48", 0xD2FF_FFE2)]
fn move_wide_encodings(#[case] line: &str, #[case] expected: u32) {
    assert_eq!(encode(line), expected);
}

#[rstest]
#[case("ADD X2, X0, X1", 0x8B01_0002)]
#[case("ADDS X2, X0, X1", 0xAB01_0002)]
#[case("SUB X2, X0, X1", 0xCB01_0002)]
#[case("SUBS X2, X0, X1", 0xEB01_0002)]
fn reg_arith_encodings(#[case] line: &str, #[case] expected: u32) {
    assert_eq!(encode(line), expected);
}

#[rstest]
#[case("ADDI X1, X0, #3", 0x9100_0C01)]
#[case("SUBI X2, X0, #1", 0xD100_0402)]
#[case("ADDIS X1, X0, #0", 0xB100_0001)]
#[case("SUBIS X3, X1, #2047", 0xF11F_FC23)]
fn imm_arith_encodings(#[case] line: &str, #[case] expected: u32) {
    assert_eq!(encode(line), expected);
}

#[test]
fn negative_imm_arith_encodes_twos_complement() {
    // -1 in the 12-bit field is 0xFFF.
    assert_eq!(encode("ADDI X1, X0, #-1"), 0x913F_FC01);
}

#[rstest]
#[case("LDUR X1, [X0, #2]", 0xF840_2001)]
#[case("STUR X1, [X0, #2]", 0xF800_2001)]
#[case("LDUR X3, [X2, #-1]", 0xF85F_F043)]
#[case("STUR XZR, [X0, #0]", 0xF800_001F)]
fn load_store_encodings(#[case] line: &str, #[case] expected: u32) {
    assert_eq!(encode(line), expected);
}

#[rstest]
#[case("B #2", 0x1400_0002)]
#[case("B #-2", 0x17FF_FFFE)]
#[case("CBZ X2, #3", 0xB400_0062)]
#[case("CBNZ X2, #-2", 0xB5FF_FFC2)]
fn branch_encodings(#[case] line: &str, #[case] expected: u32) {
    assert_eq!(encode(line), expected);
}

#[test]
fn move_immediate_boundary_accepts_max() {
    // 65535 fits the 16-bit field; the encoding places it at bits 20-5.
    assert_eq!(encode("MOVZ X0, #65535, LSL #0"), 0xD29F_FFE0);
}

#[test]
fn assembled_image_is_zero_filled() {
    let image = legv8_core::asm::assemble_source("ADD X2, X0, X1\n", "test.s", 8).unwrap();
    assert_eq!(image.len(), 8);
    assert_eq!(image[0], 0x8B01_0002);
    assert!(image[1..].iter().all(|&w| w == 0));
}

#[test]
fn blank_lines_are_skipped() {
    let image =
        legv8_core::asm::assemble_source("\nADD X2, X0, X1\n\n\nSUB X3, X0, X1\n", "test.s", 8)
            .unwrap();
    assert_eq!(image[0], 0x8B01_0002);
    assert_eq!(image[1], 0xCB01_0003);
    assert_eq!(image[2], 0);
}
