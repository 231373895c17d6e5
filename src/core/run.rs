//! Parse Run
//!
//! The ordered records of one completed parse and the read-only queries the
//! ship simulation consumes. Every query is well defined on an empty run.

use serde::Serialize;

use crate::core::position::{GridSize, ShipPlan, ShipStartPosition, ShipStatus, digit_at};
use crate::parser::{ParsedRecord, RecordKind};
use crate::validation::{Diagnostic, Severity};

/// Result of one parse invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseRun {
    records: Vec<ParsedRecord>,
    input_missing: bool,
}

impl ParseRun {
    /// Wrap records in file order
    pub fn from_records(records: Vec<ParsedRecord>) -> Self {
        Self {
            records,
            input_missing: false,
        }
    }

    /// Empty run for an input that could not be found
    pub fn missing_input() -> Self {
        Self {
            records: Vec::new(),
            input_missing: true,
        }
    }

    pub fn records(&self) -> &[ParsedRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when the input file did not exist, as opposed to being empty
    pub fn input_missing(&self) -> bool {
        self.input_missing
    }

    /// Raw text of the grid-size record
    pub fn grid_line(&self) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.kind == RecordKind::GridSize)
            .map(|r| r.raw_text.as_str())
    }

    /// Grid width and height from offsets 0 and 2 of the grid line, or (0, 0)
    /// when nothing was parsed
    pub fn grid_coordinates(&self) -> (i32, i32) {
        match self.grid_line() {
            Some(text) => (digit_at(text, 0), digit_at(text, 2)),
            None => (0, 0),
        }
    }

    pub fn grid_size(&self) -> Option<GridSize> {
        self.grid_line()?;
        let (width, height) = self.grid_coordinates();
        Some(GridSize { width, height })
    }

    /// Number of valid ship start records
    pub fn count_of_ships(&self) -> usize {
        self.valid_of_kind(RecordKind::ShipStart).count()
    }

    /// Raw text of every valid ship start record, in file order
    pub fn ship_start_records(&self) -> Vec<&str> {
        self.valid_of_kind(RecordKind::ShipStart)
            .map(|r| r.raw_text.as_str())
            .collect()
    }

    /// Start position of every valid ship, in file order
    ///
    /// With no valid ship start this returns a single
    /// [`ShipStartPosition::SENTINEL`] rather than an empty list.
    pub fn ship_start_coordinates(&self) -> Vec<ShipStartPosition> {
        let positions: Vec<_> = self
            .valid_of_kind(RecordKind::ShipStart)
            .map(|r| ShipStartPosition::from_record(&r.raw_text))
            .collect();

        if positions.is_empty() {
            vec![ShipStartPosition::SENTINEL]
        } else {
            positions
        }
    }

    /// Raw text of every valid instruction record, in file order
    pub fn ship_instructions(&self) -> Vec<String> {
        self.valid_of_kind(RecordKind::ShipInstruction)
            .map(|r| r.raw_text.clone())
            .collect()
    }

    /// Pair each ship start with the instruction record that follows it
    ///
    /// Failed ships are kept so callers can report them; a ship with a valid
    /// start and no instruction record is ready with no instructions.
    pub fn ship_plans(&self) -> Vec<ShipPlan> {
        let mut plans: Vec<ShipPlan> = Vec::new();

        for record in &self.records {
            match record.kind {
                RecordKind::GridSize => {}
                RecordKind::ShipStart => {
                    let start = record
                        .is_valid()
                        .then(|| ShipStartPosition::from_record(&record.raw_text));
                    plans.push(ShipPlan {
                        line: record.line,
                        status: if start.is_some() {
                            ShipStatus::Ready
                        } else {
                            ShipStatus::Failed
                        },
                        start,
                        instructions: None,
                    });
                }
                RecordKind::ShipInstruction => {
                    // The classifier never emits an instruction without a
                    // start directly before it.
                    let Some(plan) = plans.last_mut() else {
                        continue;
                    };
                    if record.is_valid() {
                        plan.instructions = Some(record.raw_text.clone());
                    } else {
                        plan.status = ShipStatus::Failed;
                    }
                }
            }
        }

        plans
    }

    /// One error per malformed record, one warning per ship with no
    /// instruction record, ordered by line
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut diagnostics: Vec<Diagnostic> = self
            .records
            .iter()
            .filter_map(|r| {
                r.fault.as_ref().map(|fault| Diagnostic {
                    line: r.line,
                    message: format!("{:?} record {:?}: {}", r.kind, r.raw_text, fault),
                    severity: Severity::Error,
                })
            })
            .collect();

        let unpaired = self
            .records
            .iter()
            .enumerate()
            .filter(|(idx, r)| {
                r.is_valid_kind(RecordKind::ShipStart)
                    && self
                        .records
                        .get(idx + 1)
                        .is_none_or(|next| next.kind != RecordKind::ShipInstruction)
            })
            .map(|(_, r)| Diagnostic {
                line: r.line,
                message: format!("ship at {:?} has no instructions", r.raw_text),
                severity: Severity::Warning,
            });
        diagnostics.extend(unpaired);

        diagnostics.sort_by_key(|d| d.line);
        diagnostics
    }

    fn valid_of_kind(&self, kind: RecordKind) -> impl Iterator<Item = &ParsedRecord> {
        self.records.iter().filter(move |r| r.is_valid_kind(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_text;

    #[test]
    fn test_empty_run_queries() {
        let run = ParseRun::default();
        assert_eq!(run.count_of_ships(), 0);
        assert_eq!(run.grid_coordinates(), (0, 0));
        assert_eq!(run.grid_size(), None);
        assert_eq!(
            run.ship_start_coordinates(),
            vec![ShipStartPosition::SENTINEL]
        );
        assert!(run.ship_instructions().is_empty());
        assert!(run.ship_plans().is_empty());
        assert!(run.diagnostics().is_empty());
    }

    #[test]
    fn test_grid_coordinates_single_digit() {
        let run = parse_text("5 3\n").unwrap();
        assert_eq!(run.grid_coordinates(), (5, 3));
        assert_eq!(
            run.grid_size(),
            Some(GridSize {
                width: 5,
                height: 3
            })
        );
    }

    #[test]
    fn test_failed_start_excluded_from_queries() {
        let run = parse_text("5 5\n1 2 N\nLFRFF\n3 3 Z\nFFRFF\n").unwrap();

        assert_eq!(run.count_of_ships(), 1);
        assert_eq!(run.ship_start_records(), vec!["1 2 N"]);
        assert_eq!(
            run.ship_start_coordinates(),
            vec![ShipStartPosition {
                x: 1,
                y: 2,
                orientation: 'N'
            }]
        );
        // The instruction after the failed start is itself valid
        assert_eq!(run.ship_instructions(), vec!["LFRFF", "FFRFF"]);
    }

    #[test]
    fn test_sentinel_when_all_starts_fail() {
        let run = parse_text("5 5\n1 2 X\nLF\n").unwrap();
        assert_eq!(run.count_of_ships(), 0);
        assert_eq!(
            run.ship_start_coordinates(),
            vec![ShipStartPosition::SENTINEL]
        );
    }

    #[test]
    fn test_ship_plans_pairing() {
        let run = parse_text("5 5\n1 2 N\nLFRFF\n3 3 Z\nFFRFF\n\n4 4 W\n\n0 1 S\nLFQ\n").unwrap();
        let plans = run.ship_plans();

        assert_eq!(plans.len(), 4);

        assert_eq!(plans[0].status, ShipStatus::Ready);
        assert_eq!(plans[0].instructions.as_deref(), Some("LFRFF"));

        assert_eq!(plans[1].status, ShipStatus::Failed);
        assert_eq!(plans[1].start, None);

        // Blank line cut this ship's group short
        assert_eq!(plans[2].status, ShipStatus::Ready);
        assert_eq!(plans[2].instructions, None);
        assert_eq!(plans[2].line, 7);

        assert_eq!(plans[3].status, ShipStatus::Failed);
        assert_eq!(plans[3].instructions, None);
    }

    #[test]
    fn test_diagnostics() {
        let run = parse_text("5 5\n1 2 N\nLFX\n3 3 E\n").unwrap();
        let diagnostics = run.diagnostics();

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].line, 3);
        assert_eq!(diagnostics[0].severity, Severity::Error);
        assert!(diagnostics[0].message.contains("invalid instruction 'X'"));
        assert_eq!(diagnostics[1].line, 4);
        assert_eq!(diagnostics[1].severity, Severity::Warning);
    }
}
