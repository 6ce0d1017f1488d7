//! Two-operand arithmetic handlers (sum, sub, mult, div).
//!
//! Operands are IEEE-754 doubles. Division by zero is not special-cased:
//! `10 / 0` is `Infinity` and `0 / 0` is `NaN`.

use regex::Regex;
use std::sync::LazyLock;

use super::CommandResult;
use crate::commands::definitions::ArithOp;
use crate::commands::error::CommandError;
use crate::commands::output::CommandOutput;

/// Decimal literal: optional sign, digits, optional fraction, optional exponent.
static NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("number regex")
});

/// Handle `sum`, `sub`, `mult` and `div`. Extra arguments are ignored.
pub fn handle_arithmetic(op: ArithOp, usage: &'static str, args: &[String]) -> CommandResult {
    let (lhs, rhs) = match args {
        [lhs, rhs, ..] => (lhs, rhs),
        _ => return Err(CommandError::Usage { usage }),
    };

    let a = parse_number(lhs).ok_or(CommandError::InvalidNumber)?;
    let b = parse_number(rhs).ok_or(CommandError::InvalidNumber)?;

    Ok(CommandOutput::info(format!(
        "{} {} {} = {}",
        format_number(a),
        op.symbol(),
        format_number(b),
        format_number(op.apply(a, b))
    )))
}

/// Parses a decimal literal.
///
/// Rejects the words `inf`, `infinity` and `nan`, which `f64::from_str`
/// would otherwise accept. Literals beyond the double range become infinite.
pub fn parse_number(s: &str) -> Option<f64> {
    if !NUMBER_REGEX.is_match(s) {
        return None;
    }
    s.parse().ok()
}

/// Formats a double in shortest round-trip form.
///
/// Plain decimal notation for magnitudes in `[1e-6, 1e21)`, exponent
/// notation with an explicit sign outside it (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers -0.0
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exp,
    }
}
