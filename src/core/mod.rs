//! Parse Results
//!
//! The accumulated records of a run and the typed views built from them.

pub mod position;
pub mod run;

pub use position::{GridSize, ShipPlan, ShipStartPosition, ShipStatus};
pub use run::ParseRun;
