//! Domain models

mod fleet;
mod vehicle;

pub use fleet::{FleetSummary, FleetTable};
pub use vehicle::{DiagnosticRecord, VehicleInput};
