//! Parsed records
//!
//! Plain data produced by the classifier. A record's kind comes from its
//! position in the file; its validity comes from the matching validator.

use serde::Serialize;

use crate::validation::Violation;

/// Kind of record, determined by position within the current group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordKind {
    /// First non-blank line of the file
    GridSize,
    /// Ship position and orientation, e.g. "1 2 N"
    ShipStart,
    /// Movement instructions for the preceding ship, e.g. "LFRFF"
    ShipInstruction,
}

/// One non-blank input line, classified and validated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedRecord {
    pub kind: RecordKind,
    /// The line exactly as read (line terminator removed)
    pub raw_text: String,
    /// 1-based line number in the source
    pub line: usize,
    /// Reason the record failed validation, if it did
    pub fault: Option<Violation>,
}

impl ParsedRecord {
    pub fn new(kind: RecordKind, raw_text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            raw_text: raw_text.into(),
            line,
            fault: None,
        }
    }

    /// Attach the outcome of a validator
    pub fn with_outcome(mut self, outcome: Result<(), Violation>) -> Self {
        self.fault = outcome.err();
        self
    }

    pub fn is_valid(&self) -> bool {
        self.fault.is_none()
    }

    /// True for a valid record of the given kind
    pub fn is_valid_kind(&self, kind: RecordKind) -> bool {
        self.kind == kind && self.is_valid()
    }
}
