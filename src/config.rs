//! Fixed application settings. There are no flags or environment overrides.

/// Launch records, read from the working directory at startup.
pub const DATA_FILE: &str = "spacex_launch_dash.csv";

pub const APP_TITLE: &str = "SpaceX Launch Records Dashboard";

pub const WINDOW_SIZE: [f32; 2] = [1100.0, 900.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [600.0, 500.0];

/// Height of each chart area in the central panel.
pub const CHART_HEIGHT: f32 = 340.0;
