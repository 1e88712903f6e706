//! Coercing argv parser: flags, options, and positionals into a typed map.
//!
//! This crate converts a raw argument vector into a [`ParsedArgs`] map
//! following shell-style conventions:
//!
//! - Long flags: `--name value` and `--name=value`
//! - Short option bundles: `-abc` resolves to three boolean options
//! - Negation: a bare `--no-x` stores `x = false`
//! - Escape marker: everything after `--` is positional, flag-shaped or not
//! - Repetition: a flag given more than once accumulates into a list
//!
//! Every value is coerced in a fixed priority order — float, `0x` hex
//! integer, boolean literal, raw string — via [`coerce`]. Positional
//! arguments are collected under [`POSITIONAL_KEY`], with escaped values
//! appended last.
//!
//! The pipeline has three stages: the sanitizer normalizes the token
//! stream, the coercer types individual tokens, and the assembler
//! associates flags with values. One linear pass, no I/O, no shared state
//! across calls.
//!
//! # Example
//!
//! ```
//! use argmap_core::{parse, ArgValue};
//!
//! let parsed = parse(["deploy", "--env", "prod", "--retries", "3", "-qv"]).unwrap();
//!
//! assert_eq!(parsed.get("env"), Some(&ArgValue::Str("prod".into())));
//! assert_eq!(parsed.get("retries"), Some(&ArgValue::Float(3.0)));
//! assert_eq!(parsed.get("q"), Some(&ArgValue::Bool(true)));
//! assert_eq!(parsed.get("v"), Some(&ArgValue::Bool(true)));
//! assert_eq!(parsed.positional(), &[ArgValue::Str("deploy".into())]);
//! ```

mod coerce;
mod error;
mod parse;
mod sanitize;
mod types;

pub use coerce::coerce;
pub use error::{ParseError, Result};
pub use parse::{parse, parse_env};
pub use types::{ArgValue, POSITIONAL_KEY, ParsedArgs};
