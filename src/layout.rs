//! Immutable description of the dashboard page.
//!
//! The layout only says what goes where; the UI walks it in order and the
//! [`Dashboard`](crate::state::Dashboard) supplies graph contents.

use crate::config::APP_TITLE;
use crate::data::filter::ALL_SITES;
use crate::data::model::{LaunchTable, PayloadBounds};
use crate::signals::{InputId, OutputId};

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Heading(String),
    Paragraph(String),
    Dropdown {
        input: InputId,
        options: Vec<DropdownOption>,
        default: String,
        placeholder: String,
        searchable: bool,
    },
    RangeSlider {
        input: InputId,
        min: f64,
        max: f64,
        default: [f64; 2],
    },
    Graph(OutputId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    widgets: Vec<Widget>,
}

impl Layout {
    /// The standard page for a loaded table.
    pub fn for_table(table: &LaunchTable) -> Self {
        let mut options = vec![DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(table.sites().iter().map(|site| DropdownOption {
            label: site.clone(),
            value: site.clone(),
        }));

        LayoutBuilder::new()
            .heading(APP_TITLE)
            .dropdown(InputId::SiteDropdown, options, ALL_SITES, "Select a Launch Site here")
            .graph(OutputId::SuccessPieChart)
            .paragraph("Payload range (Kg):")
            .range_slider(InputId::PayloadSlider, table.bounds())
            .graph(OutputId::SuccessPayloadScatterChart)
            .build()
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Outputs placed on the page, top to bottom.
    pub fn graphs(&self) -> impl Iterator<Item = OutputId> + '_ {
        self.widgets.iter().filter_map(|w| match w {
            Widget::Graph(id) => Some(*id),
            _ => None,
        })
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct LayoutBuilder {
    widgets: Vec<Widget>,
}

impl LayoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(mut self, text: &str) -> Self {
        self.widgets.push(Widget::Heading(text.to_string()));
        self
    }

    pub fn paragraph(mut self, text: &str) -> Self {
        self.widgets.push(Widget::Paragraph(text.to_string()));
        self
    }

    /// Searchable dropdown with `default` preselected.
    pub fn dropdown(
        mut self,
        input: InputId,
        options: Vec<DropdownOption>,
        default: &str,
        placeholder: &str,
    ) -> Self {
        self.widgets.push(Widget::Dropdown {
            input,
            options,
            default: default.to_string(),
            placeholder: placeholder.to_string(),
            searchable: true,
        });
        self
    }

    /// Slider spanning `bounds`, initially selecting all of it.
    pub fn range_slider(mut self, input: InputId, bounds: PayloadBounds) -> Self {
        self.widgets.push(Widget::RangeSlider {
            input,
            min: bounds.min,
            max: bounds.max,
            default: [bounds.min, bounds.max],
        });
        self
    }

    pub fn graph(mut self, output: OutputId) -> Self {
        self.widgets.push(Widget::Graph(output));
        self
    }

    pub fn build(self) -> Layout {
        Layout {
            widgets: self.widgets,
        }
    }
}
