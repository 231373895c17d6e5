//! Record Validation
//!
//! Validators are independent of line classification: they only see the text.

pub mod engine;

pub use engine::{
    Diagnostic, Severity, Violation, check_grid_size, check_ship_instruction, check_ship_start,
    is_valid_grid_size, is_valid_ship_instruction, is_valid_ship_start,
};
