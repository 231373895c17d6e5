//! Line Classifier
//!
//! Sequential state machine assigning a [`RecordKind`] to each non-blank line
//! by position: the first one is the grid size, then ship start and ship
//! instruction lines alternate. A blank line restarts the alternation at
//! ship start.

use log::{debug, warn};

use crate::config::ValidationLimits;
use crate::error::{ParseError, Result};
use crate::parser::record::{ParsedRecord, RecordKind};
use crate::validation::{check_grid_size, check_ship_instruction, check_ship_start};

/// What the next non-blank line will be classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupPosition {
    AwaitingGridSize,
    AwaitingShipStart,
    AwaitingShipInstruction,
}

/// Classification state carried between lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseState {
    pub position: GroupPosition,
    pub saw_grid_size: bool,
}

impl Default for ParseState {
    fn default() -> Self {
        Self {
            position: GroupPosition::AwaitingGridSize,
            saw_grid_size: false,
        }
    }
}

impl ParseState {
    /// Blank line: restart the ship cycle. Before the grid size has been
    /// seen there is no cycle to restart.
    fn reset_group(&mut self) {
        if self.saw_grid_size {
            self.position = GroupPosition::AwaitingShipStart;
        }
    }

    /// Advance after a non-blank line, independent of its validity
    fn advance(&mut self) {
        self.position = match self.position {
            GroupPosition::AwaitingGridSize => {
                self.saw_grid_size = true;
                GroupPosition::AwaitingShipStart
            }
            GroupPosition::AwaitingShipStart => GroupPosition::AwaitingShipInstruction,
            GroupPosition::AwaitingShipInstruction => GroupPosition::AwaitingShipStart,
        };
    }
}

/// Feeds lines one at a time and produces classified records
#[derive(Debug)]
pub struct Classifier<'a> {
    state: ParseState,
    limits: &'a ValidationLimits,
    line: usize,
}

impl<'a> Classifier<'a> {
    pub fn new(limits: &'a ValidationLimits) -> Self {
        Self {
            state: ParseState::default(),
            limits,
            line: 0,
        }
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    /// Classify and validate the next line of input
    ///
    /// Returns `Ok(None)` for blank lines. Fails only when the grid-size line
    /// is invalid; malformed ship records come back tagged with their fault.
    pub fn feed(&mut self, text: &str) -> Result<Option<ParsedRecord>> {
        self.line += 1;

        if text.trim().is_empty() {
            self.state.reset_group();
            return Ok(None);
        }

        let record = match self.state.position {
            GroupPosition::AwaitingGridSize => {
                check_grid_size(text).map_err(|violation| ParseError::GridSize {
                    line: self.line,
                    text: text.to_string(),
                    violation,
                })?;
                ParsedRecord::new(RecordKind::GridSize, text, self.line)
            }
            GroupPosition::AwaitingShipStart => {
                ParsedRecord::new(RecordKind::ShipStart, text, self.line)
                    .with_outcome(check_ship_start(text, self.limits))
            }
            GroupPosition::AwaitingShipInstruction => {
                ParsedRecord::new(RecordKind::ShipInstruction, text, self.line)
                    .with_outcome(check_ship_instruction(text, self.limits))
            }
        };

        match &record.fault {
            Some(violation) => warn!(
                "line {}: {:?} record {:?} failed: {}",
                record.line, record.kind, record.raw_text, violation
            ),
            None => debug!("line {}: {:?} {:?}", record.line, record.kind, record.raw_text),
        }

        self.state.advance();
        Ok(Some(record))
    }
}
