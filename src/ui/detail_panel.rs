use crate::app::SurveyOxide;
use crate::engine::{format_count, reference_url};
use crate::ui::plot::band_color;
use eframe::egui;

/// Side panel describing the selected survey
pub fn render_detail_panel(app: &mut SurveyOxide, ctx: &egui::Context, ui: &mut egui::Ui) {
    let Some(record) = app
        .state
        .ui
        .selected_survey
        .as_deref()
        .and_then(|survey| app.state.session.find(survey))
        .cloned()
    else {
        app.state.ui.clear_selection();
        return;
    };

    let url = reference_url(&record.reference);

    ui.horizontal(|ui| {
        ui.heading(&record.survey);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("✖").on_hover_text("Close").clicked() {
                app.state.ui.clear_selection();
            }
        });
    });
    ui.label(egui::RichText::new(&record.full_name).italics());
    ui.separator();

    egui::Grid::new("survey_detail_grid")
        .num_columns(2)
        .striped(true)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label("Facility");
            ui.label(&record.facility);
            ui.end_row();

            ui.label("Wavelength");
            ui.colored_label(band_color(record.band), record.band.label());
            ui.end_row();

            ui.label("Status");
            ui.label(record.status.label());
            ui.end_row();

            ui.label("Spectra");
            ui.label(format!("{} ({})", record.nspec, format_count(record.nspec as f64)));
            ui.end_row();

            ui.label("Area");
            ui.label(format!("{} deg²", format_count(record.area)));
            ui.end_row();

            ui.label("Density");
            ui.label(format!("{} deg⁻²", format_count(record.density)));
            ui.end_row();

            ui.label("Resolution");
            ui.label(format!("R ≈ {}", record.resolution));
            ui.end_row();
        });

    if !record.notes.is_empty() {
        ui.separator();
        ui.strong("Selection notes");
        ui.label(&record.notes);
    }

    ui.separator();
    ui.strong("Reference");
    ui.horizontal_wrapped(|ui| {
        if ui.link(&record.reference).on_hover_text(&url).clicked() {
            ctx.open_url(egui::OpenUrl::new_tab(&url));
        }
    });
    if ui.button("📋 Copy link").clicked() {
        app.copy_to_clipboard(url);
    }
}
