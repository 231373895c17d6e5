//! Fatal parse errors.
//!
//! Malformed ship records are not errors; they are kept on the record as a
//! [`Violation`](crate::validation::Violation). Only failures that leave no
//! usable coordinate space end up here.

use thiserror::Error;

use crate::validation::Violation;

/// Result type for parse operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Error type for a parse run.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The first non-blank line is not a grid size.
    #[error("line {line}: grid size record {text:?} is invalid: {violation}")]
    GridSize {
        line: usize,
        text: String,
        violation: Violation,
    },

    /// Reading from an already opened source failed.
    #[error("failed to read instruction source: {0}")]
    Io(#[from] std::io::Error),
}
