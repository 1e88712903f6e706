//! Error type for the parse fault boundary.

use thiserror::Error;

/// Errors surfaced by a parse operation.
///
/// Malformed user input is never an error — it is absorbed by best-effort
/// coercion. The only variant covers unexpected internal faults caught at
/// the top of the parse operation; callers receive either a complete,
/// valid result or this error, never a partial map.
#[derive(Debug, Error)]
pub enum ParseError {
    /// An internal fault escaped the parsing pipeline.
    #[error("internal parse fault: {0}")]
    Internal(String),
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;
