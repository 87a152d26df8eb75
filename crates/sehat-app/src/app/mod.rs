//! Use cases

mod advisor_service;

pub use advisor_service::{run_diagnosis, run_fleet_analysis, DiagnosisOutcome, FleetOutcome};
