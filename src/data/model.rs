use std::fmt;

use serde::Deserialize;

use crate::error::DataError;

// ---------------------------------------------------------------------------
// LaunchOutcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Launch outcome as recorded in the `class` column (1 = success, 0 = failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "u8")]
pub enum LaunchOutcome {
    Failure,
    Success,
}

impl LaunchOutcome {
    /// The numeric class value, used as the scatter y coordinate.
    pub fn class(self) -> u8 {
        match self {
            LaunchOutcome::Failure => 0,
            LaunchOutcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == LaunchOutcome::Success
    }
}

impl TryFrom<u8> for LaunchOutcome {
    type Error = DataError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LaunchOutcome::Failure),
            1 => Ok(LaunchOutcome::Success),
            other => Err(DataError::InvalidClass(other)),
        }
    }
}

impl fmt::Display for LaunchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the CSV
// ---------------------------------------------------------------------------

/// A single launch. Columns not named here are ignored on load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "class")]
    pub outcome: LaunchOutcome,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

// ---------------------------------------------------------------------------
// PayloadBounds – min / max of the payload column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

// ---------------------------------------------------------------------------
// LaunchTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All launch records plus the values derived from them once at load time.
///
/// The table is never mutated after construction; handlers only borrow it.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    /// Distinct launch sites in order of first appearance.
    sites: Vec<String>,
    /// Distinct booster version categories in order of first appearance.
    booster_categories: Vec<String>,
    bounds: PayloadBounds,
}

impl LaunchTable {
    /// Validate the records and compute site list and payload bounds.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DataError> {
        if records.is_empty() {
            return Err(DataError::EmptyTable);
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories: Vec<String> = Vec::new();

        for (row, rec) in records.iter().enumerate() {
            if !rec.payload_mass_kg.is_finite() {
                return Err(DataError::InvalidPayload {
                    row,
                    value: rec.payload_mass_kg,
                });
            }
            min = min.min(rec.payload_mass_kg);
            max = max.max(rec.payload_mass_kg);

            if !sites.contains(&rec.launch_site) {
                sites.push(rec.launch_site.clone());
            }
            if !booster_categories.contains(&rec.booster_version_category) {
                booster_categories.push(rec.booster_version_category.clone());
            }
        }

        Ok(LaunchTable {
            records,
            sites,
            booster_categories,
            bounds: PayloadBounds { min, max },
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn booster_categories(&self) -> &[String] {
        &self.booster_categories
    }

    pub fn bounds(&self) -> PayloadBounds {
        self.bounds
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a successfully constructed table.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(site: &str, payload: f64, class: u8, booster: &str) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            outcome: LaunchOutcome::try_from(class).unwrap(),
            booster_version_category: booster.to_string(),
        }
    }

    /// Small table shaped like the course dataset.
    pub(crate) fn sample_table() -> LaunchTable {
        LaunchTable::from_records(vec![
            record("CCAFS LC-40", 0.0, 0, "v1.0"),
            record("CCAFS LC-40", 525.0, 0, "v1.0"),
            record("VAFB SLC-4E", 500.0, 0, "v1.1"),
            record("KSC LC-39A", 2490.0, 1, "FT"),
            record("CCAFS LC-40", 3170.0, 1, "FT"),
            record("KSC LC-39A", 5300.0, 1, "FT"),
            record("VAFB SLC-4E", 9600.0, 1, "FT"),
            record("KSC LC-39A", 3500.0, 0, "B4"),
            record("CCAFS SLC-40", 6761.0, 1, "B5"),
            record("CCAFS SLC-40", 1952.0, 0, "B4"),
        ])
        .unwrap()
    }

    #[test]
    fn test_bounds_and_distinct_values() {
        let table = sample_table();
        assert_eq!(table.len(), 10);
        assert_eq!(table.bounds(), PayloadBounds { min: 0.0, max: 9600.0 });
        assert_eq!(
            table.sites(),
            &["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
        );
        assert_eq!(table.booster_categories(), &["v1.0", "v1.1", "FT", "B4", "B5"]);
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let err = LaunchTable::from_records(Vec::new()).unwrap_err();
        assert_eq!(err, DataError::EmptyTable);
    }

    #[test]
    fn test_non_finite_payload_is_rejected() {
        let err = LaunchTable::from_records(vec![
            record("A", 10.0, 1, "FT"),
            record("A", f64::NAN, 1, "FT"),
        ])
        .unwrap_err();
        assert!(matches!(err, DataError::InvalidPayload { row: 1, .. }));
    }

    #[test]
    fn test_outcome_class_conversion() {
        assert_eq!(LaunchOutcome::try_from(1).unwrap(), LaunchOutcome::Success);
        assert_eq!(LaunchOutcome::try_from(0).unwrap(), LaunchOutcome::Failure);
        assert_eq!(LaunchOutcome::try_from(2), Err(DataError::InvalidClass(2)));
        assert_eq!(LaunchOutcome::Success.to_string(), "1");
    }
}
