// src/gui/components/url_bar.rs

use eframe::egui;
use tracing::debug;

use crate::config::consts::MAX_WORKERS;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();

    ui.horizontal(|ui| {
        ui.label("Player URL:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.url_text)
                .hint_text("https://stats.ncaa.org/players/…")
                .desired_width(480.0)
                .font(egui::TextStyle::Monospace),
        );
        let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let scrape = &mut app.state.options.scrape;
        ui.label("Workers:");
        if ui
            .add(egui::DragValue::new(&mut scrape.workers).range(1..=MAX_WORKERS))
            .changed()
        {
            debug!("UI: workers → {}", scrape.workers);
        }

        // SCRAPE
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        let button = egui::Button::new(egui::RichText::new("SCRAPE").color(black).strong()).fill(red);
        let clicked = ui.add_enabled(!app.running, button).clicked();

        if clicked || submitted {
            actions::start_scrape(app, &ctx);
        }
        if app.running {
            ui.spinner();
        }
    });
}
