use eframe::egui::{self, Slider, TextEdit, Ui};

use crate::data::filter::{PayloadRange, SiteSelection};
use crate::layout::DropdownOption;
use crate::signals::{InputChange, InputId};

// ---------------------------------------------------------------------------
// Site dropdown
// ---------------------------------------------------------------------------

/// Render the site selector. Returns a change only when the user picks a
/// different option or clears back to `default`.
pub fn site_dropdown(
    ui: &mut Ui,
    input: InputId,
    options: &[DropdownOption],
    default: &str,
    placeholder: &str,
    searchable: bool,
    current: &SiteSelection,
    query: &mut String,
) -> Option<InputChange> {
    let selected_text = options
        .iter()
        .find(|o| o.value == current.value())
        .map(|o| o.label.as_str())
        .unwrap_or(placeholder);

    let mut picked: Option<&str> = None;
    ui.horizontal(|ui: &mut Ui| {
        egui::ComboBox::from_id_salt(input.id())
            .selected_text(selected_text)
            .width(ui.available_width().min(480.0))
            .show_ui(ui, |ui: &mut Ui| {
                if searchable {
                    ui.add(TextEdit::singleline(&mut *query).hint_text("Search sites…"));
                    ui.separator();
                }
                let needle = query.to_lowercase();
                for option in options {
                    if !needle.is_empty() && !option.label.to_lowercase().contains(&needle) {
                        continue;
                    }
                    let is_current = option.value == current.value();
                    if ui.selectable_label(is_current, &option.label).clicked() && !is_current {
                        picked = Some(option.value.as_str());
                    }
                }
            });
        if current.value() != default && ui.small_button("Clear").clicked() {
            picked = Some(default);
        }
    });

    picked.map(|value| {
        query.clear();
        InputChange::Site(SiteSelection::from_value(value))
    })
}

// ---------------------------------------------------------------------------
// Payload range slider
// ---------------------------------------------------------------------------

/// Two handles over `[min, max]`. Dragging one past the other pushes it along
/// so the range stays ordered. "Reset" restores `default`.
pub fn payload_slider(
    ui: &mut Ui,
    min: f64,
    max: f64,
    default: [f64; 2],
    current: PayloadRange,
) -> Option<InputChange> {
    let mut low = current.low;
    let mut high = current.high;

    let (low_changed, high_changed, reset) = ui
        .horizontal(|ui: &mut Ui| {
            let low_changed = ui
                .add(Slider::new(&mut low, min..=max).text("from").fixed_decimals(0))
                .changed();
            let high_changed = ui
                .add(Slider::new(&mut high, min..=max).text("to").fixed_decimals(0))
                .changed();
            let reset = ui.small_button("Reset").clicked();
            (low_changed, high_changed, reset)
        })
        .inner;

    if reset {
        return Some(InputChange::PayloadRange(PayloadRange::new(default[0], default[1])));
    }

    if low_changed && low > high {
        high = low;
    }
    if high_changed && high < low {
        low = high;
    }

    (low_changed || high_changed)
        .then(|| InputChange::PayloadRange(PayloadRange::new(low, high)))
}
