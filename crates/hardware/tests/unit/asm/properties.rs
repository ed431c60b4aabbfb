//! Encoder / decoder agreement on signed fields.
//!
//! The encoder stores signed immediates two's-complement-truncated and the
//! decoder sign-extends them back; these properties pin that agreement across
//! the whole legal range of each field, where off-by-one sign handling would
//! otherwise hide at the boundaries.

use legv8_core::asm::assemble_line;
use legv8_core::isa::decode::{alu_imm, branch_offset, cond_branch_offset, mem_offset};
use proptest::prelude::*;

proptest! {
    #[test]
    fn arith_immediates_survive_the_field(imm in -2048i32..=2047) {
        let word = assemble_line(&format!("ADDI X1, X0, #{imm}"), "p.s", 1).unwrap();
        prop_assert_eq!(alu_imm(word), imm);
    }

    #[test]
    fn memory_offsets_survive_the_field(off in -256i32..=255) {
        let word = assemble_line(&format!("STUR X1, [X0, #{off}]"), "p.s", 1).unwrap();
        prop_assert_eq!(mem_offset(word), off);
    }

    #[test]
    fn branch_offsets_survive_the_field(off in -(1i32 << 25)..(1i32 << 25)) {
        let word = assemble_line(&format!("B #{off}"), "p.s", 1).unwrap();
        prop_assert_eq!(branch_offset(word), off);
    }

    #[test]
    fn cond_branch_offsets_survive_the_field(off in -(1i32 << 18)..(1i32 << 18)) {
        let word = assemble_line(&format!("CBZ X3, #{off}"), "p.s", 1).unwrap();
        prop_assert_eq!(cond_branch_offset(word), off);
    }
}
