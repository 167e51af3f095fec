use std::collections::BTreeMap;

use crate::chart::ChartSpec;
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::data::model::LaunchTable;
use crate::signals::{Callback, InputChange, OutputId, default_callbacks};

// ---------------------------------------------------------------------------
// Selection – current widget values for one session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub site: SiteSelection,
    /// Always ordered and inside the table's payload bounds.
    pub payload: PayloadRange,
}

impl Selection {
    /// All sites, full payload range.
    pub fn initial(table: &LaunchTable) -> Self {
        Selection {
            site: SiteSelection::All,
            payload: PayloadRange::full(table.bounds()),
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard – table, selection, callbacks and their latest outputs
// ---------------------------------------------------------------------------

/// Owns one session. Each input change re-runs the callbacks subscribed to
/// it and replaces their outputs wholesale.
pub struct Dashboard {
    table: LaunchTable,
    selection: Selection,
    callbacks: Vec<Callback>,
    outputs: BTreeMap<OutputId, ChartSpec>,
}

impl Dashboard {
    /// Register the standard callbacks and render every output once.
    pub fn new(table: LaunchTable) -> Self {
        Self::with_callbacks(table, default_callbacks())
    }

    pub fn with_callbacks(table: LaunchTable, callbacks: Vec<Callback>) -> Self {
        let selection = Selection::initial(&table);
        let mut dashboard = Dashboard {
            table,
            selection,
            callbacks,
            outputs: BTreeMap::new(),
        };
        let all: Vec<usize> = (0..dashboard.callbacks.len()).collect();
        dashboard.fire(&all);
        dashboard
    }

    pub fn table(&self) -> &LaunchTable {
        &self.table
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Latest chart for an output, if a callback produces it.
    pub fn output(&self, id: OutputId) -> Option<&ChartSpec> {
        self.outputs.get(&id)
    }

    /// Apply one widget change and return the outputs that were re-rendered.
    ///
    /// Payload ranges are ordered and clamped to the table bounds first. A
    /// change that leaves the selection as it was fires nothing.
    pub fn dispatch(&mut self, change: InputChange) -> Vec<OutputId> {
        let input = change.input();
        let previous = self.selection.clone();

        match change {
            InputChange::Site(site) => self.selection.site = site,
            InputChange::PayloadRange(range) => {
                self.selection.payload = range.clamped(self.table.bounds());
            }
        }

        if self.selection == previous {
            return Vec::new();
        }
        log::debug!(
            "{input} changed: site={} payload=[{}, {}]",
            self.selection.site,
            self.selection.payload.low,
            self.selection.payload.high
        );

        let subscribed: Vec<usize> = self
            .callbacks
            .iter()
            .enumerate()
            .filter(|(_, cb)| cb.listens_to(input))
            .map(|(i, _)| i)
            .collect();
        self.fire(&subscribed)
    }

    fn fire(&mut self, indices: &[usize]) -> Vec<OutputId> {
        let mut fired = Vec::with_capacity(indices.len());
        for &i in indices {
            let cb = &self.callbacks[i];
            let spec = (cb.handler)(&self.table, &self.selection);
            self.outputs.insert(cb.output, spec);
            fired.push(cb.output);
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::sample_table;
    use crate::handlers;

    #[test]
    fn test_initial_render_fills_every_output() {
        let dash = Dashboard::new(sample_table());
        assert_eq!(dash.selection().site, SiteSelection::All);
        assert_eq!(dash.selection().payload, PayloadRange::new(0.0, 9600.0));

        let pie = dash.output(OutputId::SuccessPieChart).unwrap();
        assert_eq!(pie, &handlers::pie_chart(dash.table(), &SiteSelection::All));
        let scatter = dash.output(OutputId::SuccessPayloadScatterChart).unwrap();
        assert_eq!(scatter.mark_count(), 10);
    }

    #[test]
    fn test_slider_change_fires_only_scatter() {
        let mut dash = Dashboard::new(sample_table());
        let pie_before = dash.output(OutputId::SuccessPieChart).cloned();

        let fired = dash.dispatch(InputChange::PayloadRange(PayloadRange::new(2000.0, 4000.0)));
        assert_eq!(fired, vec![OutputId::SuccessPayloadScatterChart]);
        assert_eq!(dash.output(OutputId::SuccessPieChart).cloned(), pie_before);
        assert_eq!(
            dash.output(OutputId::SuccessPayloadScatterChart).unwrap().mark_count(),
            3
        );
    }

    #[test]
    fn test_dropdown_change_fires_both() {
        let mut dash = Dashboard::new(sample_table());
        let fired = dash.dispatch(InputChange::Site(SiteSelection::Site("VAFB SLC-4E".into())));
        assert_eq!(
            fired,
            vec![OutputId::SuccessPieChart, OutputId::SuccessPayloadScatterChart]
        );
        assert_eq!(
            dash.output(OutputId::SuccessPieChart).unwrap().title(),
            "Total Launch Outcomes for site VAFB SLC-4E"
        );
        assert_eq!(
            dash.output(OutputId::SuccessPayloadScatterChart).unwrap().mark_count(),
            2
        );
    }

    #[test]
    fn test_unchanged_value_fires_nothing() {
        let mut dash = Dashboard::new(sample_table());
        assert!(dash.dispatch(InputChange::Site(SiteSelection::All)).is_empty());
        assert!(dash
            .dispatch(InputChange::PayloadRange(PayloadRange::new(0.0, 9600.0)))
            .is_empty());
    }

    #[test]
    fn test_payload_range_is_kept_within_bounds() {
        let mut dash = Dashboard::new(sample_table());
        dash.dispatch(InputChange::PayloadRange(PayloadRange::new(20000.0, 3000.0)));
        assert_eq!(dash.selection().payload, PayloadRange::new(3000.0, 9600.0));

        dash.dispatch(InputChange::PayloadRange(PayloadRange::new(-100.0, -50.0)));
        assert_eq!(dash.selection().payload, PayloadRange::new(0.0, 0.0));
        assert_eq!(
            dash.output(OutputId::SuccessPayloadScatterChart).unwrap().mark_count(),
            1
        );
    }

    #[test]
    fn test_unknown_site_renders_empty_charts() {
        let mut dash = Dashboard::new(sample_table());
        dash.dispatch(InputChange::Site(SiteSelection::from_value("Nowhere")));
        assert!(dash.output(OutputId::SuccessPieChart).unwrap().is_empty());
        assert!(dash.output(OutputId::SuccessPayloadScatterChart).unwrap().is_empty());
    }
}
