//! Survey Ships
//!
//! Parser and validator for survey ship instruction files.
//!
//! This library provides:
//! - Line classification (grid size, ship start, ship instructions)
//! - Per-record validation with malformed-record tolerance
//! - Query views over a completed parse run
//! - Configuration management

pub mod config;
pub mod core;
pub mod error;
pub mod parser;
pub mod validation;

// Re-exports for clean public API
pub use crate::core::{GridSize, ParseRun, ShipPlan, ShipStartPosition, ShipStatus};
pub use config::{Config, ValidationLimits};
pub use error::ParseError;
pub use parser::{ParsedRecord, RecordKind, parse_file, parse_lines, parse_reader, parse_text};
pub use validation::{Diagnostic, Severity, Violation};
