#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use pp_factory::{logging, CURRENT_VERSION};

mod app;
mod tabs;
mod theme;
mod utils;

fn main() -> eframe::Result<()> {
    logging::init();

    let title = format!("PyInstaller Packager v{}", CURRENT_VERSION);
    tracing::info!(version = CURRENT_VERSION, "starting GUI");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([760.0, 560.0])
            .with_title(&title),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Box::new(app::PackApp::default())),
    )
}
