//! Line-level instruction encoders.
//!
//! Each source line is `OPCODE operand1, operand2[, operand3]`. The mnemonic
//! selects an encoder; every encoder validates its operand count, parses the
//! operand tokens, and packs the family's fixed-width bit fields. The output
//! image is exactly `max_words` long, zero-filled past the program.

use crate::asm::operands::{
    LineCtx, parse_destination, parse_move_immediate, parse_register, parse_shift,
    parse_signed_immediate,
};
use crate::common::constants::{
    ALU_IMM_BITS, ALU_IMM_MASK, ALU_IMM_SHIFT, BR_OFF_BITS, BR_OFF_MASK, CB_OFF_BITS, CB_OFF_MASK,
    CB_OFF_SHIFT, MEM_OFF_BITS, MEM_OFF_MASK, MEM_OFF_SHIFT, MOVE_IMM_SHIFT, OPCODE_SHIFT,
    RM_SHIFT, RN_SHIFT,
};
use crate::common::error::AsmError;
use crate::isa::opcodes;

/// Assembles a whole program into a memory image of `max_words` words.
///
/// Blank lines are skipped; every other line must be a single instruction.
/// The image is zero-filled past the last instruction, and a program longer
/// than `max_words` is rejected before any line is encoded.
///
/// # Arguments
///
/// * `source` - The assembly text.
/// * `file` - Source name used in diagnostics.
/// * `max_words` - Capacity of the memory image in 32-bit words.
///
/// # Errors
///
/// The first malformed line aborts the whole load.
pub fn assemble_source(source: &str, file: &str, max_words: usize) -> Result<Vec<u32>, AsmError> {
    let count = source.lines().filter(|l| !l.trim().is_empty()).count();
    if count > max_words {
        return Err(AsmError::ProgramTooLarge {
            file: file.to_string(),
            words: count,
            max: max_words,
        });
    }

    let mut image = vec![0u32; max_words];
    let mut index = 0;
    for (offset, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        image[index] = assemble_line(line, file, offset + 1)?;
        index += 1;
    }
    Ok(image)
}

/// Assembles a single instruction line into its 32-bit word.
///
/// # Arguments
///
/// * `line` - The trimmed instruction text.
/// * `file` - Source name used in diagnostics.
/// * `line_no` - 1-based line number used in diagnostics.
pub fn assemble_line(line: &str, file: &str, line_no: usize) -> Result<u32, AsmError> {
    let ctx = LineCtx {
        file,
        line: line_no,
    };
    let Some((mnemonic, rest)) = line.split_once(' ') else {
        return Err(ctx.syntax(format!("expected `OPCODE operand, ...`, got `{line}`")));
    };
    let operands: Vec<&str> = rest.split(", ").collect();

    match mnemonic {
        "MOVZ" => encode_move_wide(opcodes::MOVZ, &operands, &ctx),
        "MOVK" => encode_move_wide(opcodes::MOVK, &operands, &ctx),
        "ADD" => encode_reg_arith(opcodes::ADD, &operands, &ctx),
        "ADDS" => encode_reg_arith(opcodes::ADDS, &operands, &ctx),
        "SUB" => encode_reg_arith(opcodes::SUB, &operands, &ctx),
        "SUBS" => encode_reg_arith(opcodes::SUBS, &operands, &ctx),
        "ADDI" => encode_imm_arith(opcodes::ADDI, &operands, &ctx),
        "ADDIS" => encode_imm_arith(opcodes::ADDIS, &operands, &ctx),
        "SUBI" => encode_imm_arith(opcodes::SUBI, &operands, &ctx),
        "SUBIS" => encode_imm_arith(opcodes::SUBIS, &operands, &ctx),
        "LDUR" => encode_load_store(opcodes::LDUR, true, &operands, &ctx),
        "STUR" => encode_load_store(opcodes::STUR, false, &operands, &ctx),
        "B" => encode_branch(&operands, &ctx),
        "CBZ" => encode_cond_branch(opcodes::CBZ, &operands, &ctx),
        "CBNZ" => encode_cond_branch(opcodes::CBNZ, &operands, &ctx),
        _ => Err(ctx.unknown_opcode(mnemonic)),
    }
}

/// Checks the operand count for a mnemonic.
fn expect_operands(operands: &[&str], want: usize, ctx: &LineCtx<'_>) -> Result<(), AsmError> {
    if operands.len() == want {
        Ok(())
    } else {
        Err(ctx.syntax(format!(
            "expected {want} operands, got {}",
            operands.len()
        )))
    }
}

/// MOVZ / MOVK: `[9-bit family | 2-bit shift][16-bit immediate][5-bit Rd]`.
///
/// The shift operand is `LSL #<shift>` with shift a multiple of 16, encoded
/// as `shift / 16` in the low opcode bits.
fn encode_move_wide(family: u32, operands: &[&str], ctx: &LineCtx<'_>) -> Result<u32, AsmError> {
    expect_operands(operands, 3, ctx)?;
    let rd = parse_destination(operands[0], ctx)?;
    let imm = parse_move_immediate(operands[1], ctx)?;
    let shift = parse_shift(operands[2], ctx)?;
    let opcode = family | (shift / 16);
    Ok(opcode << OPCODE_SHIFT | imm << MOVE_IMM_SHIFT | u32::from(rd))
}

/// ADD / ADDS / SUB / SUBS: `[11-bit op][5-bit Rm][6-bit shamt=0][5-bit Rn][5-bit Rd]`.
fn encode_reg_arith(op: u32, operands: &[&str], ctx: &LineCtx<'_>) -> Result<u32, AsmError> {
    expect_operands(operands, 3, ctx)?;
    let rd = parse_destination(operands[0], ctx)?;
    let rn = parse_register(operands[1], ctx)?;
    let rm = parse_register(operands[2], ctx)?;
    Ok(op << OPCODE_SHIFT | u32::from(rm) << RM_SHIFT | u32::from(rn) << RN_SHIFT | u32::from(rd))
}

/// ADDI / ADDIS / SUBI / SUBIS: `[10-bit op][12-bit imm][5-bit Rn][5-bit Rd]`.
///
/// The immediate is encoded two's-complement because decode sign-extends it.
fn encode_imm_arith(op: u32, operands: &[&str], ctx: &LineCtx<'_>) -> Result<u32, AsmError> {
    expect_operands(operands, 3, ctx)?;
    let rd = parse_destination(operands[0], ctx)?;
    let rn = parse_register(operands[1], ctx)?;
    let imm = parse_signed_immediate(operands[2], ALU_IMM_BITS, "arithmetic immediate", ctx)?;
    Ok(op << OPCODE_SHIFT
        | (imm as u32 & ALU_IMM_MASK) << ALU_IMM_SHIFT
        | u32::from(rn) << RN_SHIFT
        | u32::from(rd))
}

/// LDUR / STUR: `[11-bit op][9-bit imm][2-bit op2=0][5-bit Rn][5-bit Rt]`.
///
/// Syntax is `LDUR Xt, [Xn, #offset]`. Loads forbid XZR as Rt (it is the
/// destination); stores allow it (storing the constant zero).
fn encode_load_store(
    op: u32,
    is_load: bool,
    operands: &[&str],
    ctx: &LineCtx<'_>,
) -> Result<u32, AsmError> {
    expect_operands(operands, 3, ctx)?;
    let rt = if is_load {
        parse_destination(operands[0], ctx)?
    } else {
        parse_register(operands[0], ctx)?
    };
    let base = operands[1]
        .strip_prefix('[')
        .ok_or_else(|| ctx.syntax(format!("bad address operand `{}`", operands[1])))?;
    let rn = parse_register(base, ctx)?;
    let offset_tok = operands[2]
        .strip_suffix(']')
        .ok_or_else(|| ctx.syntax(format!("bad address operand `{}`", operands[2])))?;
    let offset = parse_signed_immediate(offset_tok, MEM_OFF_BITS, "address offset", ctx)?;
    Ok(op << OPCODE_SHIFT
        | (offset as u32 & MEM_OFF_MASK) << MEM_OFF_SHIFT
        | u32::from(rn) << RN_SHIFT
        | u32::from(rt))
}

/// B: `[6-bit op][26-bit signed word offset]`.
fn encode_branch(operands: &[&str], ctx: &LineCtx<'_>) -> Result<u32, AsmError> {
    expect_operands(operands, 1, ctx)?;
    let offset = parse_signed_immediate(operands[0], BR_OFF_BITS, "branch offset", ctx)?;
    Ok(opcodes::B << OPCODE_SHIFT | (offset as u32 & BR_OFF_MASK))
}

/// CBZ / CBNZ: `[8-bit op][19-bit signed word offset][5-bit Rt]`.
fn encode_cond_branch(op: u32, operands: &[&str], ctx: &LineCtx<'_>) -> Result<u32, AsmError> {
    expect_operands(operands, 2, ctx)?;
    let rt = parse_register(operands[0], ctx)?;
    let offset = parse_signed_immediate(operands[1], CB_OFF_BITS, "branch offset", ctx)?;
    Ok(op << OPCODE_SHIFT
        | (offset as u32 & CB_OFF_MASK) << CB_OFF_SHIFT
        | u32::from(rt))
}
