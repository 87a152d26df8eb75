//! Domain services

mod fleet;
mod health;
mod report;
mod symptoms;

pub use fleet::{health_column, identifier_column, summarize_fleet};
pub use health::{diagnose, health_score, maintenance_window_days, status_for};
pub use report::{generate_diagnostic_report, generate_fleet_report};
pub use symptoms::{analyze_symptoms, detect_symptoms, fallback_message, SymptomCategory};
