use crate::app::SurveyOxide;
use crate::constants::plot::{MARKER_RADIUS, POINT_SELECT_TOLERANCE};
use crate::data::WavelengthBand;
use crate::engine::{SurveyPoint, format_count};
use eframe::egui::{self, Color32, RichText};
use egui_plot::{Legend, Line, LineStyle, MarkerShape, Plot, PlotBounds, PlotPoint, PlotPoints, Points, Polygon, Text};

/// Reversed magma ramp, one entry per wavelength band (X-ray first)
const BAND_COLORS: [Color32; 8] = [
    Color32::from_rgb(254, 202, 141),
    Color32::from_rgb(253, 150, 104),
    Color32::from_rgb(241, 96, 93),
    Color32::from_rgb(205, 64, 113),
    Color32::from_rgb(158, 47, 127),
    Color32::from_rgb(114, 31, 129),
    Color32::from_rgb(68, 15, 118),
    Color32::from_rgb(24, 15, 61),
];

pub fn band_color(band: WavelengthBand) -> Color32 {
    BAND_COLORS[band.ordinal() % BAND_COLORS.len()]
}

/// Index of the point closest to `target`, if within the selection tolerance.
///
/// Distances are measured in plot-normalised units so the tolerance does not
/// depend on the zoom level.
pub fn nearest_point(points: &[[f64; 2]], target: [f64; 2], width: f64, height: f64) -> Option<usize> {
    let mut closest = None;
    let mut min_dist = f64::INFINITY;

    for (idx, point) in points.iter().enumerate() {
        let dx = (point[0] - target[0]) / width;
        let dy = (point[1] - target[1]) / height;
        let dist = dx * dx + dy * dy;
        if dist < min_dist {
            min_dist = dist;
            closest = Some(idx);
        }
    }

    closest.filter(|_| min_dist < POINT_SELECT_TOLERANCE)
}

/// Tick label for a log10 coordinate
fn decade_label(log_value: f64) -> String {
    format_count(10f64.powf(log_value))
}

/// Render the survey scatter plot
pub fn render_plot(app: &mut SurveyOxide, ui: &mut egui::Ui) {
    profiling::scope!("render_plot");

    let view = app.state.session.view();
    let axis = view.axis;
    let show_curves = app.state.config.show_reference_curves;
    let show_labels = app.state.config.show_labels;
    let dark_mode = app.state.config.dark_mode;
    let selected = app.state.ui.selected_survey.clone();

    let log_positions: Vec<[f64; 2]> = view.render.points.iter().map(SurveyPoint::log_position).collect();

    let mut plot = Plot::new("survey_plot")
        .legend(Legend::default().position(egui_plot::Corner::LeftBottom))
        .x_axis_label("Survey area (deg²)")
        .y_axis_label("Source density (deg⁻²)")
        .x_axis_formatter(|mark, _range| decade_label(mark.value))
        .y_axis_formatter(|mark, _range| decade_label(mark.value))
        .label_formatter(|name, value| {
            let coords = format!(
                "area {} deg²\ndensity {} deg⁻²",
                decade_label(value.x),
                decade_label(value.y)
            );
            if name.is_empty() {
                coords
            } else {
                format!("{}\n{}", name, coords)
            }
        })
        .height(ui.available_height().max(200.0));

    let reset_bounds = app.state.ui.reset_bounds;
    if reset_bounds {
        plot = plot.reset();
        app.state.ui.reset_bounds = false;
    }

    let line_color = if dark_mode { Color32::LIGHT_GRAY } else { Color32::BLACK };

    let plot_response = plot.show(ui, |plot_ui| {
        if reset_bounds {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([axis.x[0], axis.y[0]], [axis.x[1], axis.y[1]]));
        }

        let impossible = view.render.impossible.log_polygon([-4.0, 10.0], 3.0);
        plot_ui.polygon(
            Polygon::new("Beyond full sky", PlotPoints::from(impossible))
                .fill_color(Color32::from_gray(128).gamma_multiply(0.25))
                .stroke(egui::Stroke::NONE),
        );

        if show_curves {
            for curve in &view.render.reference_curves {
                plot_ui.line(
                    Line::new(curve.label(), curve.log_samples())
                        .color(line_color)
                        .width(1.0)
                        .style(LineStyle::Dashed { length: 6.0 }),
                );

                // Label each curve near the left edge of the default window
                let x = axis.x[0] + 0.15;
                let y = curve.total.log10() - x;
                if y > axis.y[0] && y < axis.y[1] {
                    plot_ui.text(
                        Text::new("", PlotPoint::new(x, y), RichText::new(curve.label()).size(10.0))
                            .color(line_color)
                            .anchor(egui::Align2::LEFT_BOTTOM),
                    );
                }
            }
        }

        for (band, members) in view.render.groups() {
            let positions: Vec<[f64; 2]> = members.iter().map(|p| p.log_position()).collect();
            plot_ui.points(
                Points::new(band.label(), positions.clone())
                    .radius(MARKER_RADIUS)
                    .color(band_color(band))
                    .shape(MarkerShape::Circle)
                    .filled(true),
            );

            if show_labels {
                for (point, pos) in members.iter().zip(&positions) {
                    plot_ui.text(
                        Text::new("", PlotPoint::new(pos[0], pos[1]), RichText::new(&point.detail.survey).size(10.0))
                            .anchor(egui::Align2::CENTER_TOP),
                    );
                }
            }
        }

        if let Some(ref survey) = selected {
            if let Some(idx) = view.render.points.iter().position(|p| &p.detail.survey == survey) {
                plot_ui.points(
                    Points::new("", vec![log_positions[idx]])
                        .radius(MARKER_RADIUS + 4.0)
                        .color(line_color)
                        .shape(MarkerShape::Circle)
                        .filled(false),
                );
            }
        }
    });

    let bounds = plot_response.transform.bounds();
    let (width, height) = (bounds.width(), bounds.height());

    // Handle click to select point first
    let was_clicked = plot_response.response.clicked();
    let click_pos = plot_response.response.interact_pointer_pos();

    let hovered = plot_response.response.hover_pos().and_then(|pointer_pos| {
        let plot_pos = plot_response.transform.value_from_position(pointer_pos);
        nearest_point(&log_positions, [plot_pos.x, plot_pos.y], width, height)
    });

    let clicked = if was_clicked {
        click_pos.map(|pointer_pos| {
            let plot_pos = plot_response.transform.value_from_position(pointer_pos);
            nearest_point(&log_positions, [plot_pos.x, plot_pos.y], width, height)
        })
    } else {
        None
    };

    let response = match hovered.and_then(|idx| view.render.points.get(idx)) {
        Some(point) => {
            let color = band_color(point.band);
            plot_response.response.on_hover_ui(|ui| {
                let lines = point.detail.summary_lines();
                let mut lines = lines.iter();
                if let Some(title) = lines.next() {
                    ui.colored_label(color, RichText::new(title).strong());
                }
                for line in lines {
                    ui.label(line);
                }
            })
        }
        None => plot_response.response,
    };

    let clicked_survey = clicked.map(|hit| hit.and_then(|idx| view.render.points.get(idx)).map(|p| p.detail.survey.clone()));

    app.state.ui.hovered_point = hovered;

    // Select if close enough, otherwise deselect
    match clicked_survey {
        Some(Some(survey)) => app.state.ui.toggle_selection(&survey),
        Some(None) => app.state.ui.selected_survey = None,
        None => {}
    }

    response.context_menu(|ui| {
        if ui.button("Reset View").clicked() {
            app.state.ui.reset_bounds = true;
            ui.close();
        }
        if ui.button("Toggle Labels").clicked() {
            app.state.config.show_labels = !app.state.config.show_labels;
            ui.close();
        }
        if ui.button("Toggle Reference Curves").clicked() {
            app.state.config.show_reference_curves = !app.state.config.show_reference_curves;
            ui.close();
        }
        ui.separator();
        if ui.button("Clear Selection").clicked() {
            app.state.ui.clear_selection();
            ui.close();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_point_within_tolerance() {
        let points = [[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]];
        assert_eq!(nearest_point(&points, [1.05, 1.0], 6.0, 6.0), Some(1));
        assert_eq!(nearest_point(&points, [1.5, 1.5], 6.0, 6.0), None);
        assert_eq!(nearest_point(&[], [0.0, 0.0], 6.0, 6.0), None);
    }

    #[test]
    fn test_band_colors_distinct() {
        let colors: Vec<Color32> = WavelengthBand::ALL.iter().map(|b| band_color(*b)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_decade_label() {
        assert_eq!(decade_label(2.0), "100");
        assert_eq!(decade_label(4.0), "10k");
        assert_eq!(decade_label(-1.0), "0.1");
    }
}
