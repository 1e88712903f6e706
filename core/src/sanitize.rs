//! Token stream normalization.
//!
//! First pipeline stage: trims tokens, splits `--key=value` pairs, resolves
//! short-option bundles, and diverts everything after the `--` escape
//! marker into an already-coerced positional tail.

use tracing::debug;

use crate::coerce::coerce;
use crate::types::ArgValue;

/// Output of the sanitizing pass.
#[derive(Debug, Default)]
pub(crate) struct SanitizedArgs {
    /// Normalized tokens for flag/positional assembly.
    pub(crate) tokens: Vec<String>,
    /// Short-option keys; each becomes boolean `true` in the result.
    pub(crate) shorts: Vec<String>,
    /// Coerced values captured after the escape marker.
    pub(crate) escaped: Vec<ArgValue>,
}

/// Flattens a raw argument vector into a normalized token stream.
///
/// `--key=value` becomes two tokens, split on the first `=` only. Short
/// bundles cannot carry inline values, so they resolve here rather than in
/// the assembler: every character after the leading `-` becomes its own
/// key. Once the escape marker is seen, all remaining tokens are coerced
/// into `escaped`, flag-shaped or not.
pub(crate) fn sanitize<I, S>(args: I) -> SanitizedArgs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = SanitizedArgs::default();
    let mut escape_mode = false;

    for raw in args {
        let token = raw.as_ref().trim();

        // The marker itself is never emitted, even when it appears again
        // after escape mode is already active.
        if token == "--" {
            escape_mode = true;
            continue;
        }

        if escape_mode {
            out.escaped.push(coerce(token));
        } else if let Some(rest) = token.strip_prefix("--") {
            match rest.split_once('=') {
                Some((key, value)) => {
                    out.tokens.push(format!("--{key}"));
                    out.tokens.push(value.to_string());
                }
                None => out.tokens.push(token.to_string()),
            }
        } else if let Some(bundle) = token.strip_prefix('-') {
            out.shorts.extend(bundle.chars().map(String::from));
        } else {
            out.tokens.push(token.to_string());
        }
    }

    debug!(
        tokens = out.tokens.len(),
        shorts = out.shorts.len(),
        escaped = out.escaped.len(),
        "Sanitized argument vector"
    );
    out
}
