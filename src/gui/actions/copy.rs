// src/gui/actions/copy.rs
use eframe::egui;
use tracing::{debug, error, info};

use crate::{csv::to_export_string, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.data.is_empty() {
        app.status("Nothing to copy");
        debug!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    match to_export_string(&app.data, export.include_headers, export.format.delim()) {
        Ok(txt) => {
            info!(rows = app.data.row_count(), cols = app.data.ncols(), "Copy: to clipboard");
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            error!("Copy: Error: {e}");
            app.status(format!("Copy error: {e}"));
        }
    }
}
