// src/gui/components/warnings.rs
//
// Per-season problems from the last scrape. Read-only.

use eframe::egui::{self, RichText};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let amber = egui::Color32::from_rgb(0xF0, 0xD2, 0x3C);

    ui.label(RichText::new(format!("Warnings ({})", app.warnings.len())).strong());
    egui::ScrollArea::vertical()
        .id_salt("warnings_scroll")
        .max_height(140.0)
        .show(ui, |ui| {
            for w in &app.warnings {
                ui.label(RichText::new(w).color(amber).monospace());
            }
        });
}
