use crate::app::SurveyOxide;

pub fn render_about_dialog(app: &mut SurveyOxide, ctx: &eframe::egui::Context) {
    if app.state.ui.show_about {
        eframe::egui::Window::new("ℹ About SurveyOxide")
            .anchor(eframe::egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Galaxy and cosmology spectroscopic surveys: area against source density.");
                ui.horizontal(|ui| {
                    ui.label("Survey compilation by Kenneth Duncan");
                    ui.hyperlink_to("(website)", "https://dunkenj.github.io/");
                });

                ui.separator();
                ui.heading("Keyboard Shortcuts");
                ui.label("R - Reset view");
                ui.label("D - Toggle survey table");
                ui.label("T - Toggle dark/light theme");
                ui.label("F1 - Toggle this window");
                ui.label("Cmd/Ctrl + Backspace - Reset filters");
                ui.label("ESC - Close window / clear selection");

                ui.separator();
                ui.heading("Mouse Controls");
                ui.label("Scroll - Zoom in/out");
                ui.label("Drag - Pan view");
                ui.label("Hover point - Survey summary");
                ui.label("Click point - Show survey details");
                ui.label("Right-click - Context menu");

                ui.separator();
                if ui.button("Close").clicked() {
                    app.state.ui.show_about = false;
                }
            });
    }
}
