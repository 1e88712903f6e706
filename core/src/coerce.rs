//! Best-effort value coercion.
//!
//! Priority is fixed: float, then `0x` hex integer, then boolean literal,
//! then the raw string. Exactly one rule claims any given token, so
//! coercion is deterministic and never fails.

use crate::types::ArgValue;

/// Coerces a single token into a typed [`ArgValue`].
///
/// A purely numeric token parses as a float even when it looks like hex
/// digits; only the literal `0x` prefix reaches the hex rule. `1` and `0`
/// are claimed by the float rule before the boolean rule can see them.
///
/// # Examples
///
/// ```
/// use argmap_core::{coerce, ArgValue};
///
/// assert_eq!(coerce("42"), ArgValue::Float(42.0));
/// assert_eq!(coerce("1e3"), ArgValue::Float(1000.0));
/// assert_eq!(coerce("0x1A"), ArgValue::Uint(26));
/// assert_eq!(coerce("True"), ArgValue::Bool(true));
/// assert_eq!(coerce("0xZZ"), ArgValue::Str("0xZZ".into()));
/// ```
pub fn coerce(token: &str) -> ArgValue {
    if let Ok(f) = token.parse::<f64>() {
        return ArgValue::Float(f);
    }

    if let Some(hex) = token.strip_prefix("0x") {
        if let Ok(u) = u32::from_str_radix(hex, 16) {
            return ArgValue::Uint(u);
        }
    }

    if let Some(b) = parse_bool_literal(token) {
        return ArgValue::Bool(b);
    }

    ArgValue::Str(token.to_string())
}

/// The accepted boolean spellings. `1` and `0` are listed for completeness
/// but never reach this point through [`coerce`].
fn parse_bool_literal(token: &str) -> Option<bool> {
    match token {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
