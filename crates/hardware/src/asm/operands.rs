//! Operand token parsing.
//!
//! Shared parsing helpers for the per-family encoders: register names,
//! `#`-prefixed immediates in decimal or hex, `LSL #n` shift operands, and
//! `[Xn, #off]` address pairs. Each helper reports failures through the
//! owning line's [`LineCtx`] so diagnostics always carry file and line.

use std::num::IntErrorKind;

use crate::common::constants::{MAX_NAMED_REG, MOVE_IMM_MAX, MOVE_SHIFT_MAX, ZERO_REG};
use crate::common::error::AsmError;

/// Source position of the line being assembled, used to build diagnostics.
pub(crate) struct LineCtx<'a> {
    /// Source file name.
    pub file: &'a str,
    /// 1-based line number.
    pub line: usize,
}

impl LineCtx<'_> {
    pub(crate) fn syntax(&self, msg: impl Into<String>) -> AsmError {
        AsmError::Syntax {
            file: self.file.to_string(),
            line: self.line,
            msg: msg.into(),
        }
    }

    pub(crate) fn range(&self, msg: impl Into<String>) -> AsmError {
        AsmError::Range {
            file: self.file.to_string(),
            line: self.line,
            msg: msg.into(),
        }
    }

    pub(crate) fn illegal_destination(&self) -> AsmError {
        AsmError::IllegalDestination {
            file: self.file.to_string(),
            line: self.line,
        }
    }

    pub(crate) fn unknown_opcode(&self, opcode: &str) -> AsmError {
        AsmError::UnknownOpcode {
            file: self.file.to_string(),
            line: self.line,
            opcode: opcode.to_string(),
        }
    }
}

/// Parses a register operand: `X<N>` with N in 0..=30, or `XZR`.
pub(crate) fn parse_register(token: &str, ctx: &LineCtx<'_>) -> Result<u8, AsmError> {
    let token = token.trim();
    if token == "XZR" {
        return Ok(ZERO_REG);
    }
    let digits = token
        .strip_prefix('X')
        .ok_or_else(|| ctx.syntax(format!("bad register `{token}`")))?;
    let index: u8 = digits
        .parse()
        .map_err(|_| ctx.syntax(format!("bad register `{token}`")))?;
    if index > MAX_NAMED_REG {
        return Err(ctx.range(format!(
            "register must be between X0 and X{MAX_NAMED_REG} (inclusive), got `{token}`"
        )));
    }
    Ok(index)
}

/// Parses a destination register operand; XZR / X31 is forbidden.
pub(crate) fn parse_destination(token: &str, ctx: &LineCtx<'_>) -> Result<u8, AsmError> {
    let reg = parse_register(token, ctx)?;
    if reg == ZERO_REG {
        return Err(ctx.illegal_destination());
    }
    Ok(reg)
}

/// Parses a move-wide immediate: `#<dec>` or `#0x<hex>`, unsigned 16-bit.
///
/// Out-of-range diagnostics cite the legal range in the base the operand was
/// written in (0-65535 decimal, 0x0000-0xFFFF hex).
pub(crate) fn parse_move_immediate(token: &str, ctx: &LineCtx<'_>) -> Result<u32, AsmError> {
    let body = immediate_body(token, ctx)?;
    let (parsed, range_msg) = if let Some(hex) = body.strip_prefix("0x") {
        (
            u64::from_str_radix(hex, 16),
            format!("move immediate must be between 0x0000 and 0xFFFF (16 bits), got {body}"),
        )
    } else {
        (
            body.parse::<u64>(),
            format!("move immediate must be between 0 and 65535 (16 bits), got {body}"),
        )
    };
    match parsed {
        Ok(value) if value <= MOVE_IMM_MAX => Ok(value as u32),
        Ok(_) => Err(ctx.range(range_msg)),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(ctx.range(range_msg)),
        Err(_) => Err(ctx.syntax(format!("bad move immediate `{token}`"))),
    }
}

/// Parses a signed immediate `#<value>` that must fit a `bits`-wide field.
pub(crate) fn parse_signed_immediate(
    token: &str,
    bits: u32,
    what: &str,
    ctx: &LineCtx<'_>,
) -> Result<i32, AsmError> {
    let body = immediate_body(token, ctx)?;
    let value = parse_int(body).ok_or_else(|| ctx.syntax(format!("bad {what} `{token}`")))?;
    let min = -(1i64 << (bits - 1));
    let max = (1i64 << (bits - 1)) - 1;
    if value < min || value > max {
        return Err(ctx.range(format!(
            "{what} must be between {min} and {max} ({bits} bits), got {value}"
        )));
    }
    Ok(value as i32)
}

/// Parses the shifted-immediate third operand: `LSL #<shift>`.
///
/// The shift must be a non-negative multiple of 16 no larger than 48.
pub(crate) fn parse_shift(token: &str, ctx: &LineCtx<'_>) -> Result<u32, AsmError> {
    let mut parts = token.split_whitespace();
    let (Some("LSL"), Some(amount), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ctx.syntax(format!("bad shift operand `{token}`, expected `LSL #<shift>`")));
    };
    let body = immediate_body(amount, ctx)?;
    let value = parse_int(body)
        .ok_or_else(|| ctx.syntax(format!("bad shift value `{amount}`")))?;
    if value < 0 || value % 16 != 0 || value > i64::from(MOVE_SHIFT_MAX) {
        return Err(ctx.range(format!(
            "shift must be a non-negative multiple of 16 up to {MOVE_SHIFT_MAX}, got {value}"
        )));
    }
    Ok(value as u32)
}

/// Strips the `#` sigil off an immediate operand.
fn immediate_body<'a>(token: &'a str, ctx: &LineCtx<'_>) -> Result<&'a str, AsmError> {
    token
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| ctx.syntax(format!("immediate `{token}` must start with `#`")))
}

/// Parses a decimal or `0x`-hex integer with an optional leading minus.
fn parse_int(body: &str) -> Option<i64> {
    let (negative, digits) = match body.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, body),
    };
    let magnitude = if let Some(hex) = digits.strip_prefix("0x") {
        i64::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse::<i64>().ok()?
    };
    Some(if negative { -magnitude } else { magnitude })
}
