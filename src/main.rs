mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::BeritaPandaApp;
use data::loader::{load_file, DEFAULT_DATA_FILE};
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

    // Nothing is shown unless the data loads.
    let dataset = match load_file(&path) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("Failed to load data: {e:#}");
            eprintln!("Failed to load data: {e:#}");
            std::process::exit(1);
        }
    };
    if dataset.is_empty() {
        log::warn!("{} contains no articles", path.display());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Berita Panda – News Category Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(BeritaPandaApp::new(AppState::new(dataset))))),
    )
}
