#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

// Survey catalog loading and export
mod data;

// Pure filter / axis / render computations
mod engine;

// Application constants
mod constants;

// Persistent display settings
mod config;

// Error handling
mod error;

// Application state modules
mod state;

mod app;
mod ui;
mod widgets;

use app::SurveyOxide;

#[cfg(feature = "profile-with-puffin")]
fn start_puffin_server() -> Option<puffin_http::Server> {
    puffin::set_scopes_on(true);
    let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    match puffin_http::Server::new(&addr) {
        Ok(server) => {
            log::info!("Puffin server listening on {}", addr);
            Some(server)
        }
        Err(e) => {
            log::warn!("Could not start puffin server: {}", e);
            None
        }
    }
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = start_puffin_server();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "SurveyOxide - Spectroscopic Survey Explorer",
        options,
        Box::new(|_| Ok(Box::new(SurveyOxide::new()))),
    )
}
