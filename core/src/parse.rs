//! Flag/value assembly and the public parse entry points.
//!
//! The assembler walks the sanitized token stream left to right,
//! associating each `--flag` with its following value token (or an
//! implicit `true`), applying the `--no-` negation convention, and
//! accumulating repeated flags. The whole pipeline runs under a single
//! fault boundary that converts any unexpected panic into a
//! [`ParseError`].

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::debug;

use crate::coerce::coerce;
use crate::error::{ParseError, Result};
use crate::sanitize::{SanitizedArgs, sanitize};
use crate::types::{ArgValue, POSITIONAL_KEY, ParsedArgs};

/// Parses an argument vector into a [`ParsedArgs`] map.
///
/// Accepts any ordered sequence of strings, typically the process
/// argument vector minus the program name. The result always contains
/// [`POSITIONAL_KEY`]; flags and resolved short options are keyed by
/// name.
///
/// # Examples
///
/// ```
/// use argmap_core::{parse, ArgValue};
///
/// let parsed = parse(["a", "b", "--x", "1", "-yz", "--no-flag"]).unwrap();
///
/// assert_eq!(parsed.get("x"), Some(&ArgValue::Float(1.0)));
/// assert_eq!(parsed.get("y"), Some(&ArgValue::Bool(true)));
/// assert_eq!(parsed.get("z"), Some(&ArgValue::Bool(true)));
/// assert_eq!(parsed.get("flag"), Some(&ArgValue::Bool(false)));
/// assert_eq!(
///     parsed.positional(),
///     &[ArgValue::Str("a".into()), ArgValue::Str("b".into())]
/// );
/// ```
pub fn parse<I, S>(args: I) -> Result<ParsedArgs>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    catch_unwind(AssertUnwindSafe(move || assemble(sanitize(args))))
        .map_err(|payload| ParseError::Internal(panic_message(payload.as_ref())))
}

/// Parses the live process argument vector, program name excluded.
///
/// Equivalent to `parse(std::env::args().skip(1))`.
pub fn parse_env() -> Result<ParsedArgs> {
    parse(std::env::args().skip(1))
}

/// Walks the normalized token stream and builds the result map.
fn assemble(sanitized: SanitizedArgs) -> ParsedArgs {
    let SanitizedArgs {
        tokens,
        shorts,
        escaped,
    } = sanitized;

    let mut parsed = ParsedArgs::new();

    // Bundled short options resolved during sanitizing; always boolean.
    for key in shorts {
        parsed.insert(key, ArgValue::Bool(true));
    }

    let mut positional: Vec<ArgValue> = Vec::new();
    let mut index = 0;
    while index < tokens.len() {
        let current = &tokens[index];
        index += 1;

        let Some(key) = current.strip_prefix("--") else {
            positional.push(coerce(current));
            continue;
        };

        // The next token is the candidate value, unless it is itself a
        // flag or the stream ends here.
        let mut key = key.to_string();
        let mut value = match tokens.get(index) {
            None => "true",
            Some(next) if next.starts_with("--") => "true",
            Some(next) => {
                index += 1;
                next.as_str()
            }
        };

        // --no-key with a resolved value of `true` flips to false.
        if value == "true" {
            if let Some(stripped) = key.strip_prefix("no-") {
                key = stripped.to_string();
                value = "false";
            }
        }

        parsed.merge(key, coerce(value));
    }

    positional.extend(escaped);
    debug!(
        flags = parsed.flag_count(),
        positional = positional.len(),
        "Assembled parse result"
    );
    parsed.insert(POSITIONAL_KEY.to_string(), ArgValue::List(positional));
    parsed
}

/// Extracts a readable message from a caught panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected internal fault".to_string()
    }
}
