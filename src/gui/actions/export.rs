// src/gui/actions/export.rs
use tracing::{debug, error};

use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    app.commit_out_path();

    if app.data.is_empty() {
        debug!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let status_msg = match file::write_export(&app.state.options.export, &app.data) {
        Ok(path) => format!("Exported {} row(s) to {}", app.data.row_count(), path.display()),
        Err(e) => {
            error!("Export: Error: {e}");
            format!("Export error: {e}")
        }
    };

    app.status(status_msg);
}
