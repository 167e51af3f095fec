//! Named input and output signals and the callbacks that connect them.

use std::fmt;

use crate::chart::ChartSpec;
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::data::model::LaunchTable;
use crate::handlers;
use crate::state::Selection;

/// Widgets whose value changes trigger callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InputId {
    SiteDropdown,
    PayloadSlider,
}

impl InputId {
    pub fn id(self) -> &'static str {
        match self {
            InputId::SiteDropdown => "site-dropdown",
            InputId::PayloadSlider => "payload-slider",
        }
    }
}

/// Chart slots filled by callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputId {
    SuccessPieChart,
    SuccessPayloadScatterChart,
}

impl OutputId {
    pub fn id(self) -> &'static str {
        match self {
            OutputId::SuccessPieChart => "success-pie-chart",
            OutputId::SuccessPayloadScatterChart => "success-payload-scatter-chart",
        }
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A new value for one input widget.
#[derive(Debug, Clone, PartialEq)]
pub enum InputChange {
    Site(SiteSelection),
    PayloadRange(PayloadRange),
}

impl InputChange {
    pub fn input(&self) -> InputId {
        match self {
            InputChange::Site(_) => InputId::SiteDropdown,
            InputChange::PayloadRange(_) => InputId::PayloadSlider,
        }
    }
}

pub type Handler = fn(&LaunchTable, &Selection) -> ChartSpec;

/// One handler subscribed to a set of inputs, producing one output.
#[derive(Clone)]
pub struct Callback {
    pub output: OutputId,
    pub inputs: &'static [InputId],
    pub handler: Handler,
}

impl Callback {
    pub fn listens_to(&self, input: InputId) -> bool {
        self.inputs.contains(&input)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("output", &self.output)
            .field("inputs", &self.inputs)
            .finish()
    }
}

/// The dashboard's two callbacks, in firing order.
pub fn default_callbacks() -> Vec<Callback> {
    vec![
        Callback {
            output: OutputId::SuccessPieChart,
            inputs: &[InputId::SiteDropdown],
            handler: |table, sel| handlers::pie_chart(table, &sel.site),
        },
        Callback {
            output: OutputId::SuccessPayloadScatterChart,
            inputs: &[InputId::SiteDropdown, InputId::PayloadSlider],
            handler: |table, sel| handlers::scatter_chart(table, &sel.site, sel.payload),
        },
    ]
}
