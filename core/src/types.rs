//! Value and result types for parsed argument vectors.
//!
//! The coercer produces [`ArgValue`]s; the assembler collects them into a
//! [`ParsedArgs`] map keyed by flag name, with positional arguments under
//! [`POSITIONAL_KEY`]. The types are designed for serialization with
//! [`serde`], so a parse result can be emitted directly as JSON.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Reserved key under which positional arguments are collected.
///
/// Every parse result contains this key, mapped to a (possibly empty)
/// [`ArgValue::List`].
pub const POSITIONAL_KEY: &str = "_";

/// A coerced argument value.
///
/// Coercion is best-effort and never fails: a token that is not a float,
/// hex integer, or boolean literal stays a string. Repeated flags
/// accumulate into the `List` variant.
///
/// Serialization is untagged, so JSON output reads as plain numbers,
/// booleans, strings, and arrays.
///
/// # Examples
///
/// ```
/// use argmap_core::{coerce, ArgValue};
///
/// assert_eq!(coerce("3.14"), ArgValue::Float(3.14));
/// assert_eq!(coerce("0x1A"), ArgValue::Uint(26));
/// assert_eq!(coerce("true"), ArgValue::Bool(true));
/// assert_eq!(coerce("hello"), ArgValue::Str("hello".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    /// 64-bit float. Claims every plain numeric token, including
    /// exponent forms.
    Float(f64),
    /// Unsigned integer parsed from a `0x`-prefixed hex token.
    Uint(u32),
    /// Boolean literal, or the implicit value of a bare flag.
    Bool(bool),
    /// Fallback: the original token, unchanged.
    Str(String),
    /// Accumulated values of a repeated flag.
    List(Vec<ArgValue>),
}

impl ArgValue {
    /// Returns the float payload, if any.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ArgValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the hex-integer payload, if any.
    pub fn as_uint(&self) -> Option<u32> {
        match self {
            ArgValue::Uint(u) => Some(*u),
            _ => None,
        }
    }

    /// Returns the boolean payload, if any.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ArgValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the string payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the accumulated values of a repeated flag, if any.
    pub fn as_list(&self) -> Option<&[ArgValue]> {
        match self {
            ArgValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// `true` for the `Bool` variant.
    ///
    /// The merge policy overwrites plain booleans instead of accumulating
    /// them, so a bare flag occurrence never starts a list.
    pub fn is_bool(&self) -> bool {
        matches!(self, ArgValue::Bool(_))
    }
}

impl fmt::Display for ArgValue {
    /// Renders a form that re-coerces to the same value: floats via `f64`
    /// display, hex integers with their `0x` prefix restored.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Float(v) => write!(f, "{v}"),
            ArgValue::Uint(v) => write!(f, "0x{v:x}"),
            ArgValue::Bool(v) => write!(f, "{v}"),
            ArgValue::Str(v) => f.write_str(v),
            ArgValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Parsed argument vector: flag names mapped to coerced values, with
/// positional arguments under [`POSITIONAL_KEY`].
///
/// Built once per parse call and returned by value; holds no external
/// resources. Serializes transparently as a JSON object.
///
/// # Examples
///
/// ```
/// use argmap_core::{parse, ArgValue};
///
/// let parsed = parse(["build", "--jobs", "4", "-v"]).unwrap();
///
/// assert_eq!(parsed.get("jobs"), Some(&ArgValue::Float(4.0)));
/// assert_eq!(parsed.get("v"), Some(&ArgValue::Bool(true)));
/// assert_eq!(parsed.positional(), &[ArgValue::Str("build".into())]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParsedArgs {
    entries: HashMap<String, ArgValue>,
}

impl ParsedArgs {
    /// Creates an empty result with the positional key pre-seeded.
    pub(crate) fn new() -> Self {
        let mut entries = HashMap::new();
        entries.insert(POSITIONAL_KEY.to_string(), ArgValue::List(Vec::new()));
        Self { entries }
    }

    /// Looks up a flag (or the positional key) by name.
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.entries.get(name)
    }

    /// `true` when the given flag name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The ordered positional arguments, escaped values last.
    ///
    /// # Examples
    ///
    /// ```
    /// use argmap_core::parse;
    ///
    /// let parsed = parse(std::iter::empty::<&str>()).unwrap();
    /// assert!(parsed.positional().is_empty());
    /// ```
    pub fn positional(&self) -> &[ArgValue] {
        self.entries
            .get(POSITIONAL_KEY)
            .and_then(ArgValue::as_list)
            .unwrap_or(&[])
    }

    /// Iterates over flag entries, skipping the positional key.
    pub fn flags(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.entries
            .iter()
            .filter(|(key, _)| key.as_str() != POSITIONAL_KEY)
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Number of flag entries, excluding the positional key.
    pub fn flag_count(&self) -> usize {
        self.entries.len() - 1
    }

    /// Sets a key unconditionally, replacing any previous value.
    pub(crate) fn insert(&mut self, key: String, value: ArgValue) {
        self.entries.insert(key, value);
    }

    /// Repeated-flag accumulation.
    ///
    /// A missing key or a stored plain boolean is overwritten; anything
    /// else wraps into a two-element list. A third occurrence therefore
    /// nests the earlier pair rather than flattening.
    pub(crate) fn merge(&mut self, key: String, value: ArgValue) {
        match self.entries.remove(&key) {
            Some(previous) if !previous.is_bool() => {
                self.entries
                    .insert(key, ArgValue::List(vec![previous, value]));
            }
            _ => {
                self.entries.insert(key, value);
            }
        }
    }
}
