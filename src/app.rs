use std::path::{Path, PathBuf};

use eframe::egui;

use crate::config::AppConfig;
use crate::constants;
use crate::data::{Catalog, export};
use crate::error::{Result, SurveyError};
use crate::state::{self, FilterEvent};
use crate::ui;

pub struct SurveyOxide {
    pub state: state::AppState,
    config_path: PathBuf,
}

impl Default for SurveyOxide {
    fn default() -> Self {
        Self::with_config(AppConfig::default(), PathBuf::from(constants::config::CONFIG_FILE))
    }
}

impl SurveyOxide {
    /// Load the config file and the catalog it points at
    pub fn new() -> Self {
        let config_path = PathBuf::from(constants::config::CONFIG_FILE);
        let config = AppConfig::load_or_default(&config_path);
        let catalog_dir = config.catalog_dir.clone();

        let mut app = Self::with_config(config, config_path);
        if let Err(e) = app.load_catalog(&catalog_dir) {
            log::error!("{}: {}", e.title(), e);
            app.state.ui.set_error(e.user_message());
        }
        app
    }

    pub fn with_config(config: AppConfig, config_path: PathBuf) -> Self {
        Self {
            state: state::AppState::new(config),
            config_path,
        }
    }

    /// Replace the catalog with the surveys found in `dir`
    pub fn load_catalog(&mut self, dir: &Path) -> Result<()> {
        let load = Catalog::load_dir(dir)?;
        if load.catalog.is_empty() {
            return Err(SurveyError::EmptyCatalog {
                path: dir.to_path_buf(),
            });
        }
        let loaded = load.catalog.len();
        let skipped = load.rejected.len();

        self.state.set_catalog(load.catalog, load.rejected);
        self.state.config.catalog_dir = dir.to_path_buf();

        if skipped > 0 {
            self.state.ui.set_error(format!(
                "⚠ {} survey file(s) skipped, see the log for details",
                skipped
            ));
        }
        self.state
            .ui
            .set_status(format!("Loaded {} surveys from {}", loaded, dir.display()));
        Ok(())
    }

    pub fn open_catalog_dialog(&mut self) {
        if let Some(dir) = rfd::FileDialog::new()
            .set_directory(&self.state.config.catalog_dir)
            .pick_folder()
        {
            if let Err(e) = self.load_catalog(&dir) {
                log::error!("{}: {}", e.title(), e);
                self.state.ui.set_error(e.user_message());
            }
        }
    }

    /// Route one control edit through the session
    pub fn apply(&mut self, event: FilterEvent) {
        if !self.state.session.apply(event) {
            return;
        }
        self.state.ui.reset_bounds = true;

        // Drop a selection that the new criteria hide
        if let Some(selected) = self.state.ui.selected_survey.clone() {
            let still_visible = self
                .state
                .session
                .view()
                .render
                .points
                .iter()
                .any(|p| p.detail.survey == selected);
            if !still_visible {
                self.state.ui.clear_selection();
            }
        }
    }

    /// Write the visible surveys to `path`; returns the number of rows
    pub fn export_to(&self, path: &Path) -> Result<usize> {
        let rows = self.state.session.export_rows();
        let file = std::fs::File::create(path)?;
        export::write_csv(&rows, std::io::BufWriter::new(file))?;
        log::info!("Exported {} surveys to {}", rows.len(), path.display());
        Ok(rows.len())
    }

    pub fn export_csv(&mut self) {
        if !self.state.has_data() {
            return;
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name(&self.state.config.export_file_name)
            .save_file()
        {
            match self.export_to(&path) {
                Ok(count) => self
                    .state
                    .ui
                    .set_status(format!("Exported {} surveys to {}", count, path.display())),
                Err(e) => self.state.ui.set_error(e.user_message()),
            }
        }
    }

    /// Put `text` on the system clipboard, reporting failure in the status bar
    pub fn copy_to_clipboard(&mut self, text: String) {
        let copied = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
        match copied {
            Ok(()) => self.state.ui.set_status("Copied to clipboard"),
            Err(e) => {
                let e = SurveyError::from(e);
                log::warn!("{}", e);
                self.state.ui.set_error(e.user_message());
            }
        }
    }

    pub fn save_config(&mut self) {
        if let Err(e) = self.state.config.save(&self.config_path) {
            self.state.ui.set_error(format!("Failed to save config: {}", e));
        }
    }
}

impl eframe::App for SurveyOxide {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        profiling::finish_frame!();

        // Set theme
        if self.state.config.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // Keyboard shortcuts are ignored while a text field has focus
        if !ctx.wants_keyboard_input() {
            let mut reset_filters = false;
            ctx.input(|i| {
                if i.key_pressed(egui::Key::R) {
                    self.state.ui.reset_bounds = true;
                }
                if i.key_pressed(egui::Key::T) {
                    self.state.config.dark_mode = !self.state.config.dark_mode;
                }
                if i.key_pressed(egui::Key::D) {
                    self.state.ui.show_table = !self.state.ui.show_table;
                }
                if i.key_pressed(egui::Key::F1) {
                    self.state.ui.show_about = !self.state.ui.show_about;
                }
                if i.key_pressed(egui::Key::Escape) {
                    self.state.ui.show_about = false;
                    self.state.ui.clear_selection();
                }
                if i.modifiers.command && i.key_pressed(egui::Key::Backspace) {
                    reset_filters = true;
                }
            });
            if reset_filters {
                self.apply(FilterEvent::Reset);
            }
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::render_toolbar(self, ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui::render_status_bar(self, ui);
        });

        if self.state.has_data() {
            egui::SidePanel::left("filters")
                .resizable(true)
                .default_width(constants::layout::FILTER_PANEL_WIDTH)
                .show(ctx, |ui| {
                    ui::render_filter_panel(self, ui);
                });
        }

        if self.state.ui.show_table && self.state.has_data() {
            egui::TopBottomPanel::bottom("survey_table")
                .resizable(true)
                .default_height(constants::layout::TABLE_PANEL_HEIGHT)
                .show(ctx, |ui| {
                    ui::render_survey_table(self, ui);
                });
        }

        if self.state.ui.selected_survey.is_some() {
            egui::SidePanel::right("survey_detail")
                .resizable(true)
                .default_width(constants::layout::DETAIL_PANEL_WIDTH)
                .show(ctx, |ui| {
                    ui::render_detail_panel(self, ctx, ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.has_data() {
                ui::render_plot(self, ui);
            } else {
                ui.vertical_centered(|ui| {
                    ui.heading("No surveys loaded");
                    ui.label("Click 'Open catalog' and choose a folder of survey files");
                });
            }
        });

        ui::render_about_dialog(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{SurveyStatus, WavelengthBand};
    use crate::data::record::tests::sample;
    use crate::state::ThresholdEvent;
    use tempfile::TempDir;

    fn write_survey(dir: &Path, file: &str, survey: &str, status: i64, nspec: u64) {
        let json = format!(
            r#"{{"Survey": "{survey}", "Full Name": "{survey} Survey", "Reference": "10.1/x",
                "Facility": "VLT", "Selection Wavelength": "500-950nm", "Status": {status},
                "Area": 100, "Nspec": {nspec}}}"#
        );
        std::fs::write(dir.join(file), json).unwrap();
    }

    fn app() -> SurveyOxide {
        let mut app = SurveyOxide::with_config(AppConfig::default(), PathBuf::from("unused.json"));
        let catalog = Catalog::from_records(vec![
            sample("A", "VLT", WavelengthBand::Optical, SurveyStatus::Complete, 100.0, 50_000, 1000.0),
            sample("B", "HST", WavelengthBand::Ultraviolet, SurveyStatus::Proposed, 10.0, 20_000, 3000.0),
        ]);
        app.state.set_catalog(catalog, Vec::new());
        app
    }

    #[test]
    fn test_load_catalog_reports_rejections() {
        let dir = TempDir::new().unwrap();
        write_survey(dir.path(), "a.json", "A", 0, 50_000);
        write_survey(dir.path(), "b.json", "B", 9, 50_000);

        let mut app = SurveyOxide::with_config(AppConfig::default(), dir.path().join("cfg.json"));
        app.load_catalog(dir.path()).unwrap();

        assert_eq!(app.state.session.catalog().len(), 1);
        assert_eq!(app.state.rejected.len(), 1);
        assert!(app.state.ui.has_error());
        assert_eq!(app.state.config.catalog_dir, dir.path());
    }

    #[test]
    fn test_load_empty_dir_keeps_catalog() {
        let dir = TempDir::new().unwrap();
        let mut app = app();
        let err = app.load_catalog(dir.path()).unwrap_err();
        assert!(matches!(err, SurveyError::EmptyCatalog { .. }));
        assert_eq!(app.state.session.catalog().len(), 2);
    }

    #[test]
    fn test_load_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let mut app = SurveyOxide::with_config(AppConfig::default(), dir.path().join("cfg.json"));
        assert!(app.load_catalog(&dir.path().join("nope")).is_err());
        assert!(!app.state.has_data());
    }

    #[test]
    fn test_hidden_selection_is_cleared() {
        let mut app = app();
        app.state.ui.toggle_selection("B");
        app.apply(FilterEvent::SetFacility("VLT".to_string(), true));
        assert_eq!(app.state.ui.selected_survey, None);

        app.state.ui.toggle_selection("A");
        app.apply(FilterEvent::Threshold(ThresholdEvent::LogEdited(4.5)));
        assert_eq!(app.state.ui.selected_survey.as_deref(), Some("A"));
    }

    #[test]
    fn test_export_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let mut app = app();
        app.apply(FilterEvent::SetStatus(SurveyStatus::Proposed, false));

        assert_eq!(app.export_to(&path).unwrap(), 1);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().nth(1).unwrap().starts_with("A,"));
    }

    #[test]
    fn test_save_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("survey-oxide.json");
        let mut app = SurveyOxide::with_config(AppConfig::default(), path.clone());
        app.state.config.dark_mode = true;
        app.save_config();
        assert!(AppConfig::load(&path).unwrap().dark_mode);
    }
}
