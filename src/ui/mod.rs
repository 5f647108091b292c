mod about_dialog;
mod data_table;
mod detail_panel;
mod plot;
mod toolbar;

pub use about_dialog::render_about_dialog;
pub use data_table::render_survey_table;
pub use detail_panel::render_detail_panel;
pub use plot::render_plot;
pub use toolbar::{render_filter_panel, render_status_bar, render_toolbar};
