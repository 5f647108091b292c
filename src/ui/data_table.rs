use crate::app::SurveyOxide;
use crate::engine::{SurveyPoint, format_count};
use crate::ui::plot::band_color;
use egui_extras::{Column, TableBuilder};
use std::cmp::Ordering;

const HEADERS: [&str; 8] = [
    "Survey",
    "Facility",
    "Wavelength",
    "Status",
    "Nspec",
    "Area",
    "Density",
    "Resolution",
];

fn compare(a: &SurveyPoint, b: &SurveyPoint, column: usize) -> Ordering {
    let (a, b) = (&a.detail, &b.detail);
    match column {
        0 => a.survey.to_lowercase().cmp(&b.survey.to_lowercase()),
        1 => a.facility.cmp(&b.facility),
        2 => Ordering::Equal,
        3 => a.status.cmp(&b.status),
        4 => a.nspec.cmp(&b.nspec),
        5 => a.area.total_cmp(&b.area),
        6 => (a.nspec as f64 / a.area).total_cmp(&(b.nspec as f64 / b.area)),
        _ => a.resolution.total_cmp(&b.resolution),
    }
}

/// Display order of the visible points. Without a sort column this is the
/// plot order; sorting is stable so ties keep it too.
pub fn table_order(points: &[SurveyPoint], sort: Option<(usize, bool)>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    if let Some((column, ascending)) = sort {
        order.sort_by(|&i, &j| {
            let cmp = if column == 2 {
                points[i].band.ordinal().cmp(&points[j].band.ordinal())
            } else {
                compare(&points[i], &points[j], column)
            };
            if ascending { cmp } else { cmp.reverse() }
        });
    }
    order
}

/// Rows as tab-separated text with a header line
pub fn rows_as_tsv(points: &[SurveyPoint], order: &[usize]) -> String {
    let mut output = HEADERS.join("\t");
    output.push('\n');
    for &idx in order {
        let p = &points[idx];
        let d = &p.detail;
        let row = [
            d.survey.clone(),
            d.facility.clone(),
            p.band.label().to_string(),
            d.status.to_string(),
            d.nspec.to_string(),
            d.area.to_string(),
            (d.nspec as f64 / d.area).to_string(),
            d.resolution.to_string(),
        ];
        output.push_str(&row.join("\t"));
        output.push('\n');
    }
    output
}

/// Render the table of visible surveys
pub fn render_survey_table(app: &mut SurveyOxide, ui: &mut eframe::egui::Ui) {
    profiling::scope!("render_survey_table");

    let sort = app
        .state
        .ui
        .sort_column
        .map(|column| (column, app.state.ui.sort_ascending));
    let points = &app.state.session.view().render.points;
    let order = table_order(points, sort);

    let mut clicked: Option<String> = None;
    let mut header_clicked: Option<usize> = None;
    let mut copy_requested = false;
    let mut clear_sort = false;

    ui.horizontal(|ui| {
        ui.label(format!("{} surveys", points.len()));
        if let Some((column, ascending)) = sort {
            ui.separator();
            let dir = if ascending { "↑" } else { "↓" };
            ui.small(format!("Sorted by {} {}", HEADERS[column], dir));
            if ui.small_button("✖").on_hover_text("Clear sort").clicked() {
                clear_sort = true;
            }
        }
        ui.separator();
        if ui.small_button("Copy").on_hover_text("Copy table as TSV").clicked() {
            copy_requested = true;
        }
    });

    ui.separator();

    let selected = app.state.ui.selected_survey.as_deref();
    let hovered = app.state.ui.hovered_point;

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(eframe::egui::Layout::left_to_right(eframe::egui::Align::Center))
        .column(Column::initial(110.0).resizable(true).clip(true))
        .columns(Column::initial(90.0).resizable(true).clip(true), HEADERS.len() - 1)
        .sense(eframe::egui::Sense::click())
        .header(22.0, |mut header| {
            for (col_idx, label) in HEADERS.iter().enumerate() {
                header.col(|ui| {
                    let sort_indicator = match sort {
                        Some((column, true)) if column == col_idx => " ↑",
                        Some((column, false)) if column == col_idx => " ↓",
                        _ => "",
                    };
                    let btn = eframe::egui::Button::new(
                        eframe::egui::RichText::new(format!("{}{}", label, sort_indicator)).strong(),
                    )
                    .frame(false);
                    if ui.add(btn).on_hover_text("Click to sort").clicked() {
                        header_clicked = Some(col_idx);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(18.0, order.len(), |mut row| {
                let Some(&idx) = order.get(row.index()) else {
                    return;
                };
                let point = &points[idx];
                let detail = &point.detail;

                let is_selected = selected == Some(detail.survey.as_str());
                row.set_selected(is_selected || hovered == Some(idx));

                row.col(|ui| {
                    ui.strong(&detail.survey);
                });
                row.col(|ui| {
                    ui.label(&detail.facility);
                });
                row.col(|ui| {
                    ui.colored_label(band_color(point.band), point.band.label());
                });
                row.col(|ui| {
                    ui.label(detail.status);
                });
                row.col(|ui| {
                    ui.label(format_count(detail.nspec as f64));
                });
                row.col(|ui| {
                    ui.label(format_count(detail.area));
                });
                row.col(|ui| {
                    ui.label(format_count(point.position.1));
                });
                row.col(|ui| {
                    ui.label(format!("{}", detail.resolution));
                });

                if row.response().clicked() {
                    clicked = Some(detail.survey.clone());
                }
            });
        });

    let tsv = copy_requested.then(|| rows_as_tsv(points, &order));

    if let Some(column) = header_clicked {
        app.state.ui.toggle_sort(column);
    }
    if clear_sort {
        app.state.ui.clear_sort();
    }
    if let Some(survey) = clicked {
        app.state.ui.toggle_selection(&survey);
    }
    if let Some(text) = tsv {
        app.copy_to_clipboard(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::tests::sample;
    use crate::data::{SurveyStatus, WavelengthBand};
    use crate::engine::assemble;

    fn points() -> Vec<SurveyPoint> {
        let a = sample("Beta", "VLT", WavelengthBand::Ultraviolet, SurveyStatus::Ongoing, 10.0, 20_000, 3000.0);
        let b = sample("alpha", "HST", WavelengthBand::Optical, SurveyStatus::Complete, 100.0, 50_000, 1000.0);
        let c = sample("Gamma", "Keck", WavelengthBand::Optical, SurveyStatus::Proposed, 1.0, 10_000, 5000.0);
        assemble(&[&a, &b, &c]).points
    }

    #[test]
    fn test_table_order() {
        let points = points();
        assert_eq!(table_order(&points, None), vec![0, 1, 2]);
        assert_eq!(table_order(&points, Some((0, true))), vec![1, 0, 2]);
        assert_eq!(table_order(&points, Some((4, false))), vec![1, 0, 2]);
        // Density: 2000, 500, 10000
        assert_eq!(table_order(&points, Some((6, true))), vec![1, 0, 2]);
        assert_eq!(table_order(&points, Some((2, false))), vec![1, 2, 0]);
    }

    #[test]
    fn test_rows_as_tsv() {
        let points = points();
        let text = rows_as_tsv(&points, &[2]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Survey\tFacility\tWavelength"));
        assert_eq!(lines[1], "Gamma\tKeck\t500-950nm\tProposed\t10000\t1\t10000\t5000");
    }
}
