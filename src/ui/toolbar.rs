use crate::app::SurveyOxide;
use crate::engine::format_count;
use crate::state::FilterEvent;
use crate::widgets::{FacilityPicker, ResolutionFilter, StatusFilter, ThresholdInput};
use eframe::egui;

/// Top toolbar: catalog, export and display toggles
pub fn render_toolbar(app: &mut SurveyOxide, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.heading("Galaxy and Cosmology Spectroscopic Surveys");
        ui.separator();

        if ui.button("📂 Open catalog").on_hover_text("Choose a folder of survey files").clicked() {
            app.open_catalog_dialog();
        }

        let has_data = app.state.has_data();
        if ui
            .add_enabled(has_data, egui::Button::new("💾 Download data"))
            .on_hover_text("Export the visible surveys as CSV")
            .clicked()
        {
            app.export_csv();
        }

        ui.separator();

        ui.toggle_value(&mut app.state.ui.show_table, "📋").on_hover_text("Survey table (D)");
        ui.toggle_value(&mut app.state.config.show_reference_curves, "N=const")
            .on_hover_text("Constant-N reference curves");
        ui.toggle_value(&mut app.state.config.show_labels, "🏷").on_hover_text("Survey labels");
        if ui.button("🔄").on_hover_text("Reset view (R)").clicked() {
            app.state.ui.reset_bounds = true;
        }

        ui.separator();

        let theme_icon = if app.state.config.dark_mode { "🌙" } else { "☀" };
        if ui.button(theme_icon).on_hover_text("Toggle theme (T)").clicked() {
            app.state.config.dark_mode = !app.state.config.dark_mode;
        }
        if ui.button("⚙").on_hover_text("Save display settings").clicked() {
            app.save_config();
        }
        if ui.button("ℹ").on_hover_text("About (F1)").clicked() {
            app.state.ui.show_about = !app.state.ui.show_about;
        }
    });
}

/// Left panel holding every filter control
pub fn render_filter_panel(app: &mut SurveyOxide, ui: &mut egui::Ui) {
    profiling::scope!("render_filter_panel");

    let mut events: Vec<FilterEvent> = Vec::new();
    let groups = app
        .state
        .session
        .catalog()
        .facility_groups(&app.state.config.space_based_facilities);

    egui::ScrollArea::vertical().show(ui, |ui| {
        let criteria = app.state.session.criteria();

        egui::CollapsingHeader::new("⏱ Survey status")
            .id_salt("status_filter")
            .default_open(true)
            .show(ui, |ui| {
                events.extend(StatusFilter::new(&criteria.statuses).show(ui));
            });

        egui::CollapsingHeader::new("🔭 Facilities")
            .id_salt("facility_filter")
            .default_open(false)
            .show(ui, |ui| {
                events.extend(
                    FacilityPicker::new(&criteria.facilities, &groups, &mut app.state.ui.facility_search)
                        .show(ui),
                );
            });

        egui::CollapsingHeader::new("∑ Sample size")
            .id_salt("threshold_filter")
            .default_open(true)
            .show(ui, |ui| {
                let pair = criteria.threshold.pair();
                if let Some(edit) = ThresholdInput::new(pair, &mut app.state.ui.linear_text).show(ui) {
                    events.push(FilterEvent::Threshold(edit));
                }
            });

        egui::CollapsingHeader::new("📐 Resolution")
            .id_salt("resolution_filter")
            .default_open(false)
            .show(ui, |ui| {
                events.extend(ResolutionFilter::new(&criteria.resolution_bins).show(ui));
            });

        ui.separator();
        let active = criteria.has_active_filters();
        if ui
            .add_enabled(active, egui::Button::new("Reset filters"))
            .on_hover_text("Cmd/Ctrl + Backspace")
            .clicked()
        {
            events.push(FilterEvent::Reset);
        }
    });

    for event in events {
        app.apply(event);
    }
}

/// Bottom status bar
pub fn render_status_bar(app: &mut SurveyOxide, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        if let Some(dir) = app.state.session.catalog().source() {
            if let Some(name) = dir.file_name() {
                ui.label(format!("📁 {}", name.to_string_lossy()))
                    .on_hover_text(dir.display().to_string());
                ui.separator();
            }
        }

        let visible = app.state.session.view().visible_count();
        let total = app.state.session.catalog().len();
        ui.label(format!("Showing {} of {} surveys", visible, total));
        ui.separator();
        ui.label(format!(
            "N ≥ {}",
            format_count(app.state.session.threshold().linear as f64)
        ));

        if let Some(ref survey) = app.state.ui.selected_survey {
            ui.separator();
            ui.label(format!("Selected: {}", survey));
        }

        // An error replaces the status message until dismissed
        if !app.state.ui.has_error() {
            if let Some(ref message) = app.state.ui.status_message {
                ui.separator();
                ui.weak(message);
            }
        }

        if let Some(message) = app.state.ui.error_message.clone() {
            ui.separator();
            ui.colored_label(egui::Color32::from_rgb(220, 80, 60), message);
            if ui.small_button("✖").on_hover_text("Dismiss").clicked() {
                app.state.ui.clear_error();
            }
        }
    });
}
