use std::fmt;

use super::model::{LaunchRecord, LaunchTable, PayloadBounds};

/// Dropdown value meaning "every site".
pub const ALL_SITES: &str = "ALL";

// ---------------------------------------------------------------------------
// Site selection
// ---------------------------------------------------------------------------

/// The dropdown value: the `ALL` sentinel or one exact site name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse a raw dropdown value. Any string other than `ALL` names a site,
    /// whether or not the table contains it.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// The raw dropdown value.
    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(name) => name,
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => record.launch_site == *name,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

// ---------------------------------------------------------------------------
// Payload range
// ---------------------------------------------------------------------------

/// Closed payload interval `[low, high]` in kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    /// The whole observed range.
    pub fn full(bounds: PayloadBounds) -> Self {
        PayloadRange::new(bounds.min, bounds.max)
    }

    /// Inclusive at both ends.
    pub fn contains(&self, payload: f64) -> bool {
        self.low <= payload && payload <= self.high
    }

    /// Order the ends and clamp both into `bounds`.
    pub fn clamped(self, bounds: PayloadBounds) -> Self {
        let (low, high) = if self.low <= self.high {
            (self.low, self.high)
        } else {
            (self.high, self.low)
        };
        PayloadRange {
            low: low.clamp(bounds.min, bounds.max),
            high: high.clamp(bounds.min, bounds.max),
        }
    }
}

// ---------------------------------------------------------------------------
// Row filters
// ---------------------------------------------------------------------------

/// Rows launched from the selected site (all rows for `ALL`).
pub fn rows_for_site<'a>(
    table: &'a LaunchTable,
    site: &'a SiteSelection,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    table.records().iter().filter(move |r| site.matches(r))
}

/// Successful launches only.
pub fn successful_rows(table: &LaunchTable) -> impl Iterator<Item = &LaunchRecord> {
    table.records().iter().filter(|r| r.outcome.is_success())
}

/// Rows whose payload lies in `range`, optionally narrowed to one site.
pub fn rows_in_payload_range<'a>(
    table: &'a LaunchTable,
    site: &'a SiteSelection,
    range: PayloadRange,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    table
        .records()
        .iter()
        .filter(move |r| range.contains(r.payload_mass_kg) && site.matches(r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::sample_table;

    #[test]
    fn test_site_selection_values() {
        assert_eq!(SiteSelection::from_value("ALL"), SiteSelection::All);
        assert_eq!(
            SiteSelection::from_value("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".to_string())
        );
        assert_eq!(SiteSelection::Site("X".into()).value(), "X");
        assert_eq!(SiteSelection::All.to_string(), "ALL");
    }

    #[test]
    fn test_payload_range_is_inclusive() {
        let range = PayloadRange::new(500.0, 3170.0);
        assert!(range.contains(500.0));
        assert!(range.contains(3170.0));
        assert!(!range.contains(499.9));
        assert!(!range.contains(3170.1));
    }

    #[test]
    fn test_clamped_orders_and_bounds() {
        let bounds = PayloadBounds { min: 0.0, max: 9600.0 };
        assert_eq!(
            PayloadRange::new(12000.0, -5.0).clamped(bounds),
            PayloadRange::new(0.0, 9600.0)
        );
        assert_eq!(
            PayloadRange::new(100.0, 200.0).clamped(bounds),
            PayloadRange::new(100.0, 200.0)
        );
    }

    #[test]
    fn test_row_filters() {
        let table = sample_table();
        let ksc = SiteSelection::Site("KSC LC-39A".to_string());

        assert_eq!(rows_for_site(&table, &ksc).count(), 3);
        assert_eq!(rows_for_site(&table, &SiteSelection::All).count(), 10);
        assert_eq!(successful_rows(&table).count(), 5);

        let range = PayloadRange::new(2000.0, 6000.0);
        assert_eq!(rows_in_payload_range(&table, &SiteSelection::All, range).count(), 4);
        assert_eq!(rows_in_payload_range(&table, &ksc, range).count(), 3);
    }
}
