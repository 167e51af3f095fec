//! Chart handlers: pure functions from (table, selection) to a chart spec.
//!
//! Grouping keeps the order in which groups first appear in the table.

use crate::chart::{ChartSpec, PieChart, PieSlice, ScatterChart, ScatterSeries};
use crate::color::ColorMap;
use crate::data::filter::{
    PayloadRange, SiteSelection, rows_for_site, rows_in_payload_range, successful_rows,
};
use crate::data::model::{LaunchOutcome, LaunchRecord, LaunchTable};

pub const PIE_ALL_TITLE: &str = "Total Successful Launches by Site";
pub const PAYLOAD_AXIS: &str = "Payload Mass (kg)";
pub const CLASS_AXIS: &str = "class";

/// Count rows per key, preserving first-appearance order of the keys.
fn count_by<'a, K, I>(rows: I, key: impl Fn(&LaunchRecord) -> K) -> Vec<(K, usize)>
where
    K: PartialEq,
    I: Iterator<Item = &'a LaunchRecord>,
{
    let mut groups: Vec<(K, usize)> = Vec::new();
    for rec in rows {
        let k = key(rec);
        match groups.iter_mut().find(|(g, _)| *g == k) {
            Some((_, n)) => *n += 1,
            None => groups.push((k, 1)),
        }
    }
    groups
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Success counts per site for `ALL`, otherwise success/failure counts for
/// the selected site. An unknown site gives a pie with no slices.
pub fn pie_chart(table: &LaunchTable, site: &SiteSelection) -> ChartSpec {
    let pie = match site {
        SiteSelection::All => {
            let colors = ColorMap::new(table.sites());
            let slices = count_by(successful_rows(table), |r| r.launch_site.clone())
                .into_iter()
                .map(|(label, count)| PieSlice {
                    color: colors.color_for(&label),
                    label,
                    count,
                })
                .collect();
            PieChart {
                title: PIE_ALL_TITLE.to_string(),
                slices,
            }
        }
        SiteSelection::Site(name) => {
            let colors = ColorMap::new(&[
                LaunchOutcome::Success.to_string(),
                LaunchOutcome::Failure.to_string(),
            ]);
            let slices = count_by(rows_for_site(table, site), |r| r.outcome)
                .into_iter()
                .map(|(outcome, count)| {
                    let label = outcome.to_string();
                    PieSlice {
                        color: colors.color_for(&label),
                        label,
                        count,
                    }
                })
                .collect();
            PieChart {
                title: format!("Total Launch Outcomes for site {name}"),
                slices,
            }
        }
    };

    let spec = ChartSpec::Pie(pie);
    log_spec("success-pie-chart", &spec);
    spec
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// Payload mass against outcome class for rows inside `range` (inclusive),
/// one coloured series per booster version category.
pub fn scatter_chart(table: &LaunchTable, site: &SiteSelection, range: PayloadRange) -> ChartSpec {
    let colors = ColorMap::new(table.booster_categories());

    let mut series: Vec<ScatterSeries> = Vec::new();
    for rec in rows_in_payload_range(table, site, range) {
        let point = [rec.payload_mass_kg, f64::from(rec.outcome.class())];
        match series
            .iter_mut()
            .find(|s| s.name == rec.booster_version_category)
        {
            Some(s) => s.points.push(point),
            None => series.push(ScatterSeries {
                name: rec.booster_version_category.clone(),
                color: colors.color_for(&rec.booster_version_category),
                points: vec![point],
            }),
        }
    }

    let title = match site {
        SiteSelection::All => "Payload vs. Outcome for All Sites".to_string(),
        SiteSelection::Site(name) => format!("Payload vs. Outcome for {name}"),
    };

    let spec = ChartSpec::Scatter(ScatterChart {
        title,
        x_label: PAYLOAD_AXIS.to_string(),
        y_label: CLASS_AXIS.to_string(),
        series,
    });
    log_spec("success-payload-scatter-chart", &spec);
    spec
}

fn log_spec(output: &str, spec: &ChartSpec) {
    if log::log_enabled!(log::Level::Debug) {
        match serde_json::to_string(spec) {
            Ok(json) => log::debug!("{output}: {} marks {json}", spec.mark_count()),
            Err(e) => log::warn!("{output}: cannot serialise chart spec: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::{record, sample_table};
    use std::collections::BTreeSet;

    fn as_pie(spec: ChartSpec) -> PieChart {
        match spec {
            ChartSpec::Pie(p) => p,
            other => panic!("expected pie, got {other:?}"),
        }
    }

    fn as_scatter(spec: ChartSpec) -> ScatterChart {
        match spec {
            ChartSpec::Scatter(s) => s,
            other => panic!("expected scatter, got {other:?}"),
        }
    }

    #[test]
    fn test_pie_all_counts_successes_per_site() {
        let table = sample_table();
        let pie = as_pie(pie_chart(&table, &SiteSelection::All));
        assert_eq!(pie.title, PIE_ALL_TITLE);

        let got: Vec<(&str, usize)> = pie.slices.iter().map(|s| (s.label.as_str(), s.count)).collect();
        assert_eq!(
            got,
            vec![("KSC LC-39A", 2), ("CCAFS LC-40", 1), ("VAFB SLC-4E", 1), ("CCAFS SLC-40", 1)]
        );

        let sites_with_success: BTreeSet<&str> = table
            .records()
            .iter()
            .filter(|r| r.outcome.is_success())
            .map(|r| r.launch_site.as_str())
            .collect();
        assert_eq!(pie.slices.len(), sites_with_success.len());
    }

    #[test]
    fn test_pie_all_skips_sites_without_success() {
        let table = LaunchTable::from_records(vec![
            record("A", 100.0, 1, "FT"),
            record("B", 200.0, 0, "FT"),
        ])
        .unwrap();
        let pie = as_pie(pie_chart(&table, &SiteSelection::All));
        assert_eq!(pie.slices.len(), 1);
        assert_eq!(pie.slices[0].label, "A");
    }

    #[test]
    fn test_pie_site_counts_outcomes() {
        let table = sample_table();
        for site in table.sites() {
            let selection = SiteSelection::Site(site.clone());
            let pie = as_pie(pie_chart(&table, &selection));
            assert_eq!(pie.title, format!("Total Launch Outcomes for site {site}"));

            let classes: BTreeSet<u8> = rows_for_site(&table, &selection)
                .map(|r| r.outcome.class())
                .collect();
            assert_eq!(pie.slices.len(), classes.len());
            assert_eq!(pie.total(), rows_for_site(&table, &selection).count());
        }

        let ksc = as_pie(pie_chart(&table, &SiteSelection::Site("KSC LC-39A".into())));
        let got: Vec<(&str, usize)> = ksc.slices.iter().map(|s| (s.label.as_str(), s.count)).collect();
        assert_eq!(got, vec![("1", 2), ("0", 1)]);
    }

    #[test]
    fn test_unknown_site_yields_empty_charts() {
        let table = sample_table();
        let nowhere = SiteSelection::Site("Boca Chica".into());

        let pie = pie_chart(&table, &nowhere);
        assert!(pie.is_empty());

        let scatter = scatter_chart(&table, &nowhere, PayloadRange::full(table.bounds()));
        assert!(scatter.is_empty());
        assert_eq!(scatter.title(), "Payload vs. Outcome for Boca Chica");
    }

    #[test]
    fn test_scatter_points_stay_inside_range() {
        let table = sample_table();
        let ranges = [
            PayloadRange::new(0.0, 9600.0),
            PayloadRange::new(500.0, 525.0),
            PayloadRange::new(2490.0, 2490.0),
            PayloadRange::new(4000.0, 5000.0),
        ];
        for range in ranges {
            for site in [SiteSelection::All, SiteSelection::Site("KSC LC-39A".into())] {
                let scatter = as_scatter(scatter_chart(&table, &site, range));
                assert!(scatter.points().all(|p| range.contains(p[0])));
                assert_eq!(
                    scatter.point_count(),
                    rows_in_payload_range(&table, &site, range).count()
                );
            }
        }
    }

    #[test]
    fn test_scatter_all_sites_zero_to_ten_thousand() {
        let table = sample_table();
        let scatter = as_scatter(scatter_chart(
            &table,
            &SiteSelection::All,
            PayloadRange::new(0.0, 10000.0),
        ));
        assert_eq!(scatter.title, "Payload vs. Outcome for All Sites");
        assert_eq!(scatter.point_count(), table.len());
        assert_eq!(scatter.x_label, "Payload Mass (kg)");
        assert_eq!(scatter.y_label, "class");

        let names: Vec<&str> = scatter.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["v1.0", "v1.1", "FT", "B4", "B5"]);
        assert!(scatter.points().all(|p| p[1] == 0.0 || p[1] == 1.0));
    }

    #[test]
    fn test_scatter_colors_are_stable_under_filtering() {
        let table = sample_table();
        let wide = as_scatter(scatter_chart(&table, &SiteSelection::All, PayloadRange::full(table.bounds())));
        let narrow = as_scatter(scatter_chart(&table, &SiteSelection::All, PayloadRange::new(3000.0, 4000.0)));

        for s in &narrow.series {
            let same = wide.series.iter().find(|w| w.name == s.name).unwrap();
            assert_eq!(s.color, same.color);
        }
    }

    #[test]
    fn test_handlers_are_idempotent() {
        let table = sample_table();
        let site = SiteSelection::Site("CCAFS LC-40".into());
        let range = PayloadRange::new(0.0, 4000.0);

        assert_eq!(pie_chart(&table, &site), pie_chart(&table, &site));
        assert_eq!(
            scatter_chart(&table, &site, range),
            scatter_chart(&table, &site, range)
        );
    }
}
