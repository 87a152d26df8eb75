//! Delimited table loader for fleet mode
//!
//! The delimiter is auto-detected from the header row rather than fixed.
//! A file where no candidate delimiter appears is a data-format error; there
//! is no partial fallback.

use std::path::Path;

use sehat_domain::model::FleetTable;
use sehat_types::{Error, Result};

/// Candidate delimiters, in preference order for ties
const CANDIDATE_DELIMITERS: &[u8] = &[b',', b';', b'\t', b'|'];

/// Load a fleet table from a delimited text file with a header row
pub fn load_table(path: &Path) -> Result<FleetTable> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound(path.display().to_string())
        } else {
            Error::Io(e)
        }
    })?;
    parse_table(&content)
}

/// Parse delimited text into a table
pub fn parse_table(content: &str) -> Result<FleetTable> {
    let header_line = content
        .lines()
        .find(|line| !line.trim().is_empty())
        .ok_or_else(|| Error::DataFormat("file is empty".to_string()))?;
    let delimiter = sniff_delimiter(header_line).ok_or_else(|| {
        Error::DataFormat("could not detect a delimiter in the header row".to_string())
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(FleetTable { headers, rows })
}

/// Pick the candidate delimiter occurring most often in the header line
fn sniff_delimiter(header: &str) -> Option<u8> {
    let mut best: Option<(u8, usize)> = None;
    for &candidate in CANDIDATE_DELIMITERS {
        let count = header.bytes().filter(|&b| b == candidate).count();
        if count > 0 && best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((candidate, count));
        }
    }
    best.map(|(delimiter, _)| delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_comma_table() {
        let table = parse_table("unit_id,health\nA1,80\nA2,40\n").unwrap();
        assert_eq!(table.headers, vec!["unit_id", "health"]);
        assert_eq!(table.record_count(), 2);
        assert_eq!(table.cell(1, 1), Some("40"));
    }

    #[test]
    fn test_parse_semicolon_table() {
        let table = parse_table("unit_id;health\nA1;80\n").unwrap();
        assert_eq!(table.headers, vec!["unit_id", "health"]);
    }

    #[test]
    fn test_parse_tab_table() {
        let table = parse_table("unit_id\thealth\nA1\t80\n").unwrap();
        assert_eq!(table.headers, vec!["unit_id", "health"]);
    }

    #[test]
    fn test_undelimited_file_is_an_error() {
        match parse_table("just_one_header\nvalue\n") {
            Err(Error::DataFormat(msg)) => assert!(msg.contains("delimiter")),
            other => panic!("expected data format error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_file_is_an_error() {
        assert!(matches!(parse_table(""), Err(Error::DataFormat(_))));
        assert!(matches!(parse_table("\n\n"), Err(Error::DataFormat(_))));
    }

    #[test]
    fn test_cells_are_trimmed() {
        let table = parse_table("unit_id, health\nA1, 80\n").unwrap();
        assert_eq!(table.headers, vec!["unit_id", "health"]);
        assert_eq!(table.cell(0, 1), Some("80"));
    }

    #[test]
    fn test_sniff_prefers_most_frequent_delimiter() {
        // One comma inside a title, but semicolons delimit the row
        assert_eq!(sniff_delimiter("name;health, notes;age"), Some(b';'));
        assert_eq!(sniff_delimiter("a,b,c"), Some(b','));
        assert_eq!(sniff_delimiter("plain"), None);
    }

    #[test]
    fn test_load_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "car_id|health_score").unwrap();
        writeln!(file, "MH-01|85").unwrap();
        writeln!(file, "MH-02|55").unwrap();
        let table = load_table(file.path()).unwrap();
        assert_eq!(table.headers, vec!["car_id", "health_score"]);
        assert_eq!(table.record_count(), 2);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let result = load_table(Path::new("/no/such/file.csv"));
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }
}
