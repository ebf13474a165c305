// src/gui/components/export_bar.rs

use eframe::egui;
use tracing::{debug, info};

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, ExportFormat::Tsv, "TSV");

            ui.separator();
            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                info!("UI: Include_headers → {}", export.include_headers);
            }

            ui.checkbox(&mut app.state.gui.show_warnings, "Show warnings");
        });

        if fmt != prev_fmt {
            export.format = fmt;
            info!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            debug!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions (Copy / Export) + status ---
    ui.horizontal(|ui| {
        let has_rows = !app.data.is_empty();

        if ui.add_enabled(has_rows, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.add_enabled(has_rows, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }

        ui.label(format!("Status: {}", app.status_text()));
    });
}
