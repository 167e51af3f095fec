/// Error types for loading the launch table
use thiserror::Error;

/// Reasons a launch CSV cannot become a [`LaunchTable`](crate::data::model::LaunchTable).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    /// A required header column is absent
    #[error("CSV missing '{0}' column")]
    MissingColumn(String),

    /// The `class` column holds something other than 0 or 1
    #[error("invalid launch class {0} (expected 0 or 1)")]
    InvalidClass(u8),

    /// Payload mass parsed but is NaN or infinite
    #[error("row {row}: payload mass {value} is not a finite number")]
    InvalidPayload { row: usize, value: f64 },

    /// Header present but no records, so payload bounds are undefined
    #[error("launch table is empty; payload bounds are undefined")]
    EmptyTable,
}
