//! Fleet aggregation service
//!
//! Column roles are resolved by case-insensitive substring heuristics over
//! header names. A missing health-like column is an explicit error, never a
//! silent default.

use sehat_types::{Error, Result};

use crate::model::{FleetSummary, FleetTable};

/// Identifier-like header substrings, tested in order
const ID_COLUMN_HINTS: &[&str] = &["id", "unit", "car"];

/// Health-like header substrings, tested in order
const HEALTH_COLUMN_HINTS: &[&str] = &["health", "score", "condition", "rul"];

/// Rows with health below this count toward the risk percentage
const RISK_THRESHOLD: f64 = 60.0;

// Placeholder summary fields, hardcoded regardless of data contents
const COMMON_FAILING_PART: &str = "Suspension & Fuel Sensors";
const RISK_AGE_LIMIT_MONTHS: u32 = 24;
const RECOMMENDED_ACTION: &str = "Full Fleet Inspection";

fn find_column(headers: &[String], hints: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let header = header.to_lowercase();
        hints.iter().any(|hint| header.contains(hint))
    })
}

/// Index of the identifier column; falls back to the first column
pub fn identifier_column(headers: &[String]) -> usize {
    find_column(headers, ID_COLUMN_HINTS).unwrap_or(0)
}

/// Index of the health/score column, if any header matches
pub fn health_column(headers: &[String]) -> Option<usize> {
    find_column(headers, HEALTH_COLUMN_HINTS)
}

/// Aggregate a fleet table into a summary
///
/// Average health is the integer-truncated mean; risk is the percentage of
/// rows below the threshold, rounded to one decimal.
pub fn summarize_fleet(table: &FleetTable) -> Result<FleetSummary> {
    let column = health_column(&table.headers).ok_or(Error::NoHealthColumn)?;

    if table.rows.is_empty() {
        return Err(Error::DataFormat("table contains no data rows".to_string()));
    }

    let mut values = Vec::with_capacity(table.rows.len());
    for (i, row) in table.rows.iter().enumerate() {
        let cell = row.get(column).ok_or_else(|| {
            Error::DataFormat(format!("row {}: missing health value", i + 1))
        })?;
        let value: f64 = cell.trim().parse().map_err(|_| {
            Error::DataFormat(format!("row {}: '{}' is not a numeric health value", i + 1, cell))
        })?;
        values.push(value);
    }

    let total = values.len();
    let average_health = (values.iter().sum::<f64>() / total as f64) as i64;
    let below = values.iter().filter(|&&v| v < RISK_THRESHOLD).count();
    let risk_percent = ((below as f64 / total as f64) * 100.0 * 10.0).round() / 10.0;

    Ok(FleetSummary {
        total_records: total,
        average_health,
        risk_percent,
        common_part: COMMON_FAILING_PART.to_string(),
        age_limit_months: RISK_AGE_LIMIT_MONTHS,
        solution: RECOMMENDED_ACTION.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> FleetTable {
        FleetTable {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn test_summary_average_and_risk() {
        let table = table(
            &["unit_id", "health"],
            &[&["A1", "80"], &["A2", "40"], &["A3", "90"], &["A4", "30"]],
        );
        let summary = summarize_fleet(&table).unwrap();
        assert_eq!(summary.total_records, 4);
        assert_eq!(summary.average_health, 60);
        assert_eq!(summary.risk_percent, 50.0);
    }

    #[test]
    fn test_risk_rounds_to_one_decimal() {
        let table = table(
            &["car", "score"],
            &[&["a", "50"], &["b", "70"], &["c", "80"]],
        );
        let summary = summarize_fleet(&table).unwrap();
        assert_eq!(summary.risk_percent, 33.3);
    }

    #[test]
    fn test_average_is_integer_truncated() {
        let table = table(&["id", "health"], &[&["a", "70"], &["b", "75"]]);
        // 72.5 truncates to 72
        assert_eq!(summarize_fleet(&table).unwrap().average_health, 72);
    }

    #[test]
    fn test_no_health_column_is_an_error() {
        let table = table(&["unit_id", "mileage"], &[&["A1", "120000"]]);
        assert!(matches!(summarize_fleet(&table), Err(Error::NoHealthColumn)));
    }

    #[test]
    fn test_health_column_heuristics() {
        let headers: Vec<String> = ["Vehicle", "RUL_days"].iter().map(|s| s.to_string()).collect();
        assert_eq!(health_column(&headers), Some(1));
        let headers: Vec<String> = ["name", "Condition %"].iter().map(|s| s.to_string()).collect();
        assert_eq!(health_column(&headers), Some(1));
    }

    #[test]
    fn test_identifier_column_falls_back_to_first() {
        let headers: Vec<String> = ["name", "health"].iter().map(|s| s.to_string()).collect();
        assert_eq!(identifier_column(&headers), 0);
        let headers: Vec<String> = ["health", "unit_no"].iter().map(|s| s.to_string()).collect();
        assert_eq!(identifier_column(&headers), 1);
    }

    #[test]
    fn test_non_numeric_health_cell_is_an_error() {
        let table = table(&["id", "health"], &[&["a", "80"], &["b", "n/a"]]);
        match summarize_fleet(&table) {
            Err(Error::DataFormat(msg)) => assert!(msg.contains("row 2")),
            other => panic!("expected data format error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let table = table(&["id", "health"], &[]);
        assert!(matches!(summarize_fleet(&table), Err(Error::DataFormat(_))));
    }

    #[test]
    fn test_placeholder_fields_are_constant() {
        let table = table(&["id", "health"], &[&["a", "10"]]);
        let summary = summarize_fleet(&table).unwrap();
        assert_eq!(summary.common_part, "Suspension & Fuel Sensors");
        assert_eq!(summary.age_limit_months, 24);
        assert_eq!(summary.solution, "Full Fleet Inspection");
    }
}
