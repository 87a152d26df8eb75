use serde::{Deserialize, Serialize};

/// Uploaded fleet table: a header row plus string-valued data rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl FleetTable {
    pub fn record_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell at (row, column), if present
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }
}

/// Aggregated fleet statistics
///
/// `common_part`, `age_limit_months` and `solution` are fixed placeholder text,
/// not derived from the data (known limitation, kept on purpose).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetSummary {
    pub total_records: usize,
    pub average_health: i64,
    pub risk_percent: f64,
    pub common_part: String,
    pub age_limit_months: u32,
    pub solution: String,
}
