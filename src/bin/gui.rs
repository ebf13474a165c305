// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use ncaa_scrape::{config::consts::LOG_FILE, config::state::GuiState, gui, log};

fn main() {
    log::init_file(LOG_FILE);

    let size = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([size.window_w as f32, size.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        tracing::error!("GUI failed: {e}");
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
