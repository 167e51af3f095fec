use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::model::LaunchTable;
use crate::layout::{Layout, Widget};
use crate::signals::InputChange;
use crate::state::Dashboard;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    dashboard: Dashboard,
    layout: Layout,
    /// Text typed into the searchable site dropdown.
    site_query: String,
}

impl LaunchDashApp {
    pub fn new(table: LaunchTable) -> Self {
        let layout = Layout::for_table(&table);
        Self {
            dashboard: Dashboard::new(table),
            layout,
            site_query: String::new(),
        }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let LaunchDashApp {
            dashboard,
            layout,
            site_query,
        } = self;

        // ---- Bottom bar: row count ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let table = dashboard.table();
            ui.label(format!(
                "{} launches from {} sites",
                table.len(),
                table.sites().len()
            ));
        });

        // ---- Central panel: the page, top to bottom ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    for widget in layout.widgets() {
                        if let Some(change) = render_widget(ui, widget, dashboard, site_query) {
                            let fired = dashboard.dispatch(change);
                            log::debug!("re-rendered {fired:?}");
                        }
                        ui.add_space(8.0);
                    }
                });
        });
    }
}

/// Draw one layout widget; returns the input change it produced, if any.
fn render_widget(
    ui: &mut Ui,
    widget: &Widget,
    dashboard: &Dashboard,
    site_query: &mut String,
) -> Option<InputChange> {
    match widget {
        Widget::Heading(text) => {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(
                    RichText::new(text)
                        .size(32.0)
                        .strong()
                        .color(egui::Color32::from_rgb(0x50, 0x3D, 0x36)),
                );
            });
            None
        }
        Widget::Paragraph(text) => {
            ui.label(text);
            None
        }
        Widget::Dropdown {
            input,
            options,
            default,
            placeholder,
            searchable,
        } => panels::site_dropdown(
            ui,
            *input,
            options,
            default,
            placeholder,
            *searchable,
            &dashboard.selection().site,
            site_query,
        ),
        Widget::RangeSlider {
            input,
            min,
            max,
            default,
        } => ui
            .push_id(input.id(), |ui: &mut Ui| {
                panels::payload_slider(ui, *min, *max, *default, dashboard.selection().payload)
            })
            .inner,
        Widget::Graph(output) => {
            plot::chart(ui, *output, dashboard.output(*output));
            None
        }
    }
}
