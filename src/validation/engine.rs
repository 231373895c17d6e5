//! Validation Engine
//!
//! Character-class validators for the three record kinds. Each validator is a
//! pure function of one line of text; the `check_*` forms report the first
//! offending character, the `is_valid_*` forms collapse that to a predicate.

use serde::Serialize;
use thiserror::Error;

use crate::config::ValidationLimits;

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic message tied to a source line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
    pub severity: Severity,
}

/// Why a record failed validation
///
/// Columns are 1-based character positions within the line.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum Violation {
    #[error("record is empty")]
    Empty,

    #[error("unexpected character '{ch}' at column {column}")]
    UnexpectedCharacter { ch: char, column: usize },

    #[error("digit {digit} at column {column} exceeds the maximum of {max}")]
    DigitOutOfRange { digit: u32, column: usize, max: u32 },

    #[error("invalid orientation '{ch}' at column {column} (expected N, E, S or W)")]
    InvalidOrientation { ch: char, column: usize },

    #[error("invalid instruction '{ch}' at column {column} (expected L, F or R)")]
    InvalidInstruction { ch: char, column: usize },

    #[error("instruction line is {len} characters long (maximum {max})")]
    TooLong { len: usize, max: usize },
}

/// Check a grid-size record: digits and whitespace only
pub fn check_grid_size(record: &str) -> Result<(), Violation> {
    if record.is_empty() {
        return Err(Violation::Empty);
    }

    for (idx, ch) in record.chars().enumerate() {
        if ch.is_whitespace() || ch.is_ascii_digit() {
            continue;
        }
        return Err(Violation::UnexpectedCharacter {
            ch,
            column: idx + 1,
        });
    }

    Ok(())
}

/// Check a ship start-position record such as "1 2 N"
///
/// Validation is per character, not per token: every digit is compared
/// individually against `limits.max_start_digit`, so "12 3 N" is judged on
/// '1', '2' and '3' separately.
pub fn check_ship_start(record: &str, limits: &ValidationLimits) -> Result<(), Violation> {
    if record.is_empty() {
        return Err(Violation::Empty);
    }

    for (idx, ch) in record.chars().enumerate() {
        let column = idx + 1;

        if ch.is_whitespace() {
            continue;
        }

        if let Some(digit) = ch.to_digit(10) {
            if digit > limits.max_start_digit {
                return Err(Violation::DigitOutOfRange {
                    digit,
                    column,
                    max: limits.max_start_digit,
                });
            }
            continue;
        }

        if ch.is_alphabetic() {
            if !is_orientation(ch) {
                return Err(Violation::InvalidOrientation { ch, column });
            }
            continue;
        }

        return Err(Violation::UnexpectedCharacter { ch, column });
    }

    Ok(())
}

/// Check a ship instruction record such as "LFRFF"
pub fn check_ship_instruction(record: &str, limits: &ValidationLimits) -> Result<(), Violation> {
    if record.is_empty() {
        return Err(Violation::Empty);
    }

    let len = record.chars().count();
    if len > limits.max_instruction_len {
        return Err(Violation::TooLong {
            len,
            max: limits.max_instruction_len,
        });
    }

    for (idx, ch) in record.chars().enumerate() {
        let column = idx + 1;

        if ch.is_whitespace() {
            continue;
        }

        if ch.is_alphabetic() {
            if !is_instruction(ch) {
                return Err(Violation::InvalidInstruction { ch, column });
            }
            continue;
        }

        return Err(Violation::UnexpectedCharacter { ch, column });
    }

    Ok(())
}

pub fn is_valid_grid_size(record: &str) -> bool {
    check_grid_size(record).is_ok()
}

pub fn is_valid_ship_start(record: &str, limits: &ValidationLimits) -> bool {
    check_ship_start(record, limits).is_ok()
}

pub fn is_valid_ship_instruction(record: &str, limits: &ValidationLimits) -> bool {
    check_ship_instruction(record, limits).is_ok()
}

fn is_orientation(ch: char) -> bool {
    matches!(ch.to_ascii_uppercase(), 'N' | 'E' | 'S' | 'W')
}

fn is_instruction(ch: char) -> bool {
    matches!(ch.to_ascii_uppercase(), 'L' | 'F' | 'R')
}
