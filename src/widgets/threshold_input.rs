//! Linked log-slider / linear-field input for the minimum spectrum count

use crate::constants::threshold::{LOG_MAX, LOG_MIN};
use crate::state::{ThresholdEvent, ThresholdPair};
use egui::Ui;

const SLIDER_WIDTH: f32 = 180.0;

/// Two views of one threshold.
///
/// Both widgets are drawn from `pair`. Only the widget the user actually
/// edited produces an event; the value shown in the other one is written
/// back without emitting anything.
pub struct ThresholdInput<'a> {
    pair: ThresholdPair,
    linear_text: &'a mut String,
}

impl<'a> ThresholdInput<'a> {
    /// `linear_text` is the edit buffer of the linear field; it persists
    /// across frames so partial input survives while the field has focus
    pub fn new(pair: ThresholdPair, linear_text: &'a mut String) -> Self {
        Self { pair, linear_text }
    }

    /// Show the widget. Returns the edit to apply, if any.
    pub fn show(self, ui: &mut Ui) -> Option<ThresholdEvent> {
        let mut event = None;

        ui.vertical(|ui| {
            ui.label("Minimum number of spectra");

            let mut log = self.pair.log;
            ui.spacing_mut().slider_width = SLIDER_WIDTH;
            let slider = ui.add(
                egui::Slider::new(&mut log, LOG_MIN..=LOG_MAX)
                    .step_by(0.1)
                    .custom_formatter(|v, _| format!("10^{:.1}", v))
                    .text("log"),
            );
            if slider.changed() {
                event = Some(ThresholdEvent::LogEdited(log));
            }

            ui.horizontal(|ui| {
                ui.label("N ≥");
                let field = ui.add(
                    egui::TextEdit::singleline(&mut *self.linear_text)
                        .hint_text("e.g. 10000")
                        .desired_width(100.0),
                );

                if event.is_none() {
                    event = linear_commit(field.lost_focus(), self.linear_text.as_str());
                }

                // Mirror the pair into the buffer whenever the user is not typing
                if !field.has_focus() {
                    *self.linear_text = self.pair.linear.to_string();
                }
            });
        });

        event
    }
}

/// Edit produced by the linear field. Partial input is never applied; the
/// value is committed when the field loses focus, which includes Enter.
pub fn linear_commit(lost_focus: bool, text: &str) -> Option<ThresholdEvent> {
    lost_focus.then(|| ThresholdEvent::LinearEdited(parse_linear(text)))
}

/// Parse the linear field. Accepts plain integers, digit separators and
/// float notation such as `1e5`; anything else is `None`.
pub fn parse_linear(text: &str) -> Option<i64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    if let Ok(value) = cleaned.parse::<i64>() {
        return Some(value);
    }
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.abs() < i64::MAX as f64)
        .map(|v| v.round() as i64)
}
