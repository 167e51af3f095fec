use std::f64::consts::TAU;

use eframe::egui::{Align2, Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::chart::{ChartSpec, PieChart, ScatterChart};
use crate::config::CHART_HEIGHT;
use crate::signals::OutputId;

/// Segments used to approximate a full circle.
const PIE_SEGMENTS: usize = 120;

// ---------------------------------------------------------------------------
// Graph slot
// ---------------------------------------------------------------------------

/// Render whatever chart currently fills `output`.
pub fn chart(ui: &mut Ui, output: OutputId, spec: Option<&ChartSpec>) {
    let Some(spec) = spec else {
        ui.label(format!("{output}: waiting for first render"));
        return;
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(spec.title());
    });

    if spec.is_empty() {
        ui.label(RichText::new("No data for the current selection.").italics());
        return;
    }

    match spec {
        ChartSpec::Pie(pie) => pie_plot(ui, output, pie),
        ChartSpec::Scatter(scatter) => scatter_plot(ui, output, scatter),
    }
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

fn pie_plot(ui: &mut Ui, output: OutputId, pie: &PieChart) {
    let fractions = pie.fractions();

    Plot::new(output.id())
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            // Start at twelve o'clock and go clockwise.
            let mut start = TAU / 4.0;
            for (slice, fraction) in pie.slices.iter().zip(&fractions) {
                let sweep = fraction * TAU;
                let end = start - sweep;

                // Filled polygons must be convex, so wide slices are drawn in
                // quarter-turn pieces sharing one legend entry.
                let pieces = (sweep / (TAU / 4.0)).ceil().max(1.0) as usize;
                for k in 0..pieces {
                    let a = start - sweep * k as f64 / pieces as f64;
                    let b = start - sweep * (k + 1) as f64 / pieces as f64;
                    plot_ui.polygon(
                        Polygon::new(wedge(a, b))
                            .fill_color(slice.color.to_color32())
                            .stroke(Stroke::new(0.0, Color32::TRANSPARENT))
                            .name(&slice.label),
                    );
                }

                let mid = start - sweep / 2.0;
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                        RichText::new(format!("{:.1}%", fraction * 100.0)).strong(),
                    )
                    .color(Color32::BLACK)
                    .anchor(Align2::CENTER_CENTER),
                );

                start = end;
            }
        });
}

/// Unit-radius wedge from angle `start` to `end` (radians).
fn wedge(start: f64, end: f64) -> Vec<[f64; 2]> {
    let steps = ((start - end).abs() / TAU * PIE_SEGMENTS as f64).ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let angle = start + (end - start) * i as f64 / steps as f64;
        points.push([angle.cos(), angle.sin()]);
    }
    points
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

fn scatter_plot(ui: &mut Ui, output: OutputId, scatter: &ScatterChart) {
    Plot::new(output.id())
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .x_axis_label(scatter.x_label.clone())
        .y_axis_label(scatter.y_label.clone())
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &scatter.series {
                let points: PlotPoints = series.points.iter().copied().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(&series.name)
                        .color(series.color.to_color32())
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(4.0),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wedge_spans_requested_arc() {
        let points = wedge(TAU / 4.0, 0.0);
        assert_eq!(points[0], [0.0, 0.0]);

        let first = points[1];
        let last = points[points.len() - 1];
        assert!(first[0].abs() < 1e-9 && (first[1] - 1.0).abs() < 1e-9);
        assert!((last[0] - 1.0).abs() < 1e-9 && last[1].abs() < 1e-9);
        assert!(points[1..]
            .iter()
            .all(|p| ((p[0] * p[0] + p[1] * p[1]).sqrt() - 1.0).abs() < 1e-9));
    }
}
