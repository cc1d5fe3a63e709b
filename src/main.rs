#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod canvas;
mod constants;
mod error;
mod forms;
mod mock;
mod model;
mod persistence;
mod settings;
mod state;
mod ui;
mod widgets;

use app::SignalDash;
use eframe::egui;
use settings::Settings;

#[cfg(feature = "profile-with-puffin")]
fn start_puffin_server() -> Option<puffin_http::Server> {
    puffin::set_scopes_on(true);
    let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    match puffin_http::Server::new(&addr) {
        Ok(server) => {
            tracing::info!(%addr, "puffin server listening");
            Some(server)
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to start puffin server");
            None
        }
    }
}

fn main() -> eframe::Result {
    tracing_subscriber::fmt::init();

    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = start_puffin_server();

    let settings = Settings::load();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([900.0, 600.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };
    eframe::run_native(
        "Signal Dash",
        options,
        Box::new(move |cc| Ok(Box::new(SignalDash::new(cc, &settings)))),
    )
}
