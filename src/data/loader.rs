use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{LaunchRecord, LaunchTable};
use crate::error::DataError;

/// Columns the dashboard reads. Any others are ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the launch table from a CSV file.
///
/// There is no degraded mode: a missing file, a missing column, or any
/// unparsable row fails the whole load.
pub fn load_csv(path: &Path) -> Result<LaunchTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    load_from_reader(file).with_context(|| format!("loading {}", path.display()))
}

/// Parse launch records from any reader producing CSV with a header row.
pub fn load_from_reader<R: Read>(reader: R) -> Result<LaunchTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataError::MissingColumn(column.to_string()).into());
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<LaunchRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    let table = LaunchTable::from_records(records)?;
    Ok(table)
}
