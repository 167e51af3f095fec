mod app;
mod chart;
mod color;
mod config;
mod data;
mod error;
mod handlers;
mod layout;
mod signals;
mod state;
mod ui;

use std::path::Path;

use app::LaunchDashApp;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let table = match data::loader::load_csv(Path::new(config::DATA_FILE)) {
        Ok(table) => table,
        Err(e) => {
            log::error!("Failed to load launch records: {e:#}");
            return Err(e);
        }
    };
    let bounds = table.bounds();
    log::info!(
        "Loaded {} launches from sites {:?}, payload {}..={} kg",
        table.len(),
        table.sites(),
        bounds.min,
        bounds.max
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        config::APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(table)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}
