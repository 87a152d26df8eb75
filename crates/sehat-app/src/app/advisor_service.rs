//! Advisor service - the two report pipelines
//!
//! Single vehicle: form input -> scorer + classifier -> diagnostic record ->
//! rendered report. Fleet: table file -> loader -> aggregator -> rendered
//! report. One submission, one full recomputation; nothing is cached.

use std::path::Path;

use serde::Serialize;

use sehat_domain::model::{DiagnosticRecord, FleetSummary, FleetTable, VehicleInput};
use sehat_domain::service::{
    diagnose, generate_diagnostic_report, generate_fleet_report, summarize_fleet,
};
use sehat_infra::fleet_csv::load_table;
use sehat_types::{Language, Result};

/// Result of a single-vehicle diagnosis
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisOutcome {
    pub record: DiagnosticRecord,
    pub report: String,
}

/// Result of a fleet analysis
#[derive(Debug, Clone, Serialize)]
pub struct FleetOutcome {
    pub table: FleetTable,
    pub summary: FleetSummary,
    pub report: String,
}

/// Diagnose a single vehicle and render its report
pub fn run_diagnosis(input: &VehicleInput, lang: Language) -> DiagnosisOutcome {
    let record = diagnose(input, lang);
    let report = generate_diagnostic_report(&record, lang);
    DiagnosisOutcome { record, report }
}

/// Load a fleet table, aggregate it, and render the summary report
///
/// Fails when the file cannot be parsed or when no health-like column exists;
/// a summary is never fabricated.
pub fn run_fleet_analysis(path: &Path, lang: Language) -> Result<FleetOutcome> {
    let table = load_table(path)?;
    let summary = summarize_fleet(&table)?;
    let report = generate_fleet_report(&summary, lang);
    Ok(FleetOutcome { table, summary, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sehat_types::{AccidentHistory, EngineSound, Error, ExhaustSmoke, HealthStatus};
    use std::io::Write;

    #[test]
    fn test_run_diagnosis_end_to_end() {
        let input = VehicleInput {
            model: "Honda City 2022".to_string(),
            months_since_service: 2,
            engine_sound: EngineSound::Smooth,
            exhaust_smoke: ExhaustSmoke::None,
            accident_history: AccidentHistory::NoAccidents,
            body_condition_percent: 90,
            description: Some("brakes squeak on cold mornings".to_string()),
        };
        let outcome = run_diagnosis(&input, Language::English);
        assert_eq!(outcome.record.health_score, 90);
        assert_eq!(outcome.record.status, HealthStatus::Perfect);
        assert!(outcome.report.contains("Honda City 2022"));
        assert!(outcome.report.contains("Brake pads are worn out"));
    }

    #[test]
    fn test_run_fleet_analysis_end_to_end() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "unit_id,health").unwrap();
        for value in [80, 40, 90, 30] {
            writeln!(file, "V{},{}", value, value).unwrap();
        }
        let outcome = run_fleet_analysis(file.path(), Language::English).unwrap();
        assert_eq!(outcome.summary.average_health, 60);
        assert_eq!(outcome.summary.risk_percent, 50.0);
        assert_eq!(outcome.table.record_count(), 4);
        assert!(outcome.report.contains("average health score is 60%"));
    }

    #[test]
    fn test_fleet_analysis_without_health_column_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "unit_id,mileage").unwrap();
        writeln!(file, "V1,120000").unwrap();
        let result = run_fleet_analysis(file.path(), Language::English);
        assert!(matches!(result, Err(Error::NoHealthColumn)));
    }
}
