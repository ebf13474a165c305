// src/gui/components/data_table.rs
//
// Draws the result table. Purely a view over `app.data`.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::{PLAYER_COLUMN, SEASON_COLUMN};
use crate::gui::app::App;

const ROW_H: f32 = 20.0;
const HEADER_H: f32 = 24.0;

fn initial_width(header: &str) -> f32 {
    match header {
        PLAYER_COLUMN => 160.0,
        SEASON_COLUMN => 70.0,
        h => (h.len() as f32 * 8.0).clamp(40.0, 140.0),
    }
}

/// Player and Season read left-aligned; everything else is a stat.
fn is_numeric(header: &str) -> bool {
    header != PLAYER_COLUMN && header != SEASON_COLUMN
}

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let data = &app.data;
    let cols = data.ncols();

    if cols == 0 {
        ui.centered_and_justified(|ui| {
            let msg = match (&app.player, app.running) {
                (_, true) => s!("Working…"),
                (Some(name), false) => format!("No stats found for {name}"),
                (None, false) => s!("Paste a player URL and press SCRAPE"),
            };
            ui.label(msg);
        });
        return;
    }

    let headers: Vec<String> = match &data.headers {
        Some(h) => h.clone(),
        None => (0..cols).map(|i| format!("Col {}", i + 1)).collect(),
    };
    let numeric: Vec<bool> = headers.iter().map(|h| is_numeric(h)).collect();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false; // reserve space instead of overlaying content
        s.bar_width = 10.0;
    }

    egui::ScrollArea::horizontal()
        .id_salt("table_hscroll")
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("result_table", cols));
            for h in &headers {
                table = table.column(Column::initial(initial_width(h)).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(HEADER_H, |mut header| {
                    for h in &headers {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.add(egui::Label::new(RichText::new(h).strong()).selectable(false));
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_H, data.row_count(), |mut row| {
                        let Some(cells) = data.rows.get(row.index()) else { return };
                        for (ci, is_num) in numeric.iter().enumerate() {
                            let text = cells.get(ci).map(String::as_str).unwrap_or("");
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if *is_num {
                                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(text); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
                                }
                            });
                        }
                    });
                });
        });
}
