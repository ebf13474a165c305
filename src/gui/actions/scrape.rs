// src/gui/actions/scrape.rs
use std::{sync::PoisonError, thread};

use eframe::egui;
use tracing::{error, info};
use url::Url;

use crate::{
    gui::{app::App, progress::GuiProgress},
    scrape::scrape_player,
};

/// Kick off a scrape on a background thread. The UI keeps painting; the
/// result lands in `app.job` and is picked up by `poll_scrape`.
pub fn start_scrape(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }
    // Whatever is on screen belonged to the previous URL.
    app.clear_results();

    let url = app.url_text.trim();
    if url.is_empty() || Url::parse(url).is_err() {
        app.status("Enter a valid player URL");
        return;
    }

    app.state.options.scrape.player_url = s!(url);
    let opts = app.state.options.scrape.clone();
    info!(url = %opts.player_url, workers = opts.worker_count(), "Scrape: Begin");

    let slot = app.job.clone();
    let mut prog = GuiProgress::new(app.status.clone(), ctx.clone());
    let ctx = ctx.clone();

    app.running = true;
    app.status("Scraping…");

    thread::spawn(move || {
        // → This is where the scrape happens ←
        let res = scrape_player(&opts, Some(&mut prog));
        *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(res);
        ctx.request_repaint();
    });
}

/// Pull a finished scrape (if any) into the app.
pub fn poll_scrape(app: &mut App) {
    let Some(res) = app.job.lock().unwrap_or_else(PoisonError::into_inner).take() else {
        return;
    };
    app.running = false;

    match res {
        Ok(report) => {
            let name = s!(report.player.canonical());
            info!(
                player = %name,
                seasons = report.seasons_found,
                rows = report.table.row_count(),
                warnings = report.warnings.len(),
                "Scrape: OK"
            );

            app.warnings = report.warnings.iter().map(ToString::to_string).collect();
            app.data = report.table.to_dataset();

            if report.is_empty() {
                app.status(format!("No stats found for {name}"));
            } else {
                app.status(format!(
                    "{name}: {} season(s), {} warning(s)",
                    app.data.row_count(),
                    app.warnings.len()
                ));
            }
            app.player = Some(name);
        }
        Err(e) => {
            error!("Scrape: Error: {e}");
            app.clear_results();
            app.status(format!("Error: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::state::AppState, data::DataSet, error::ScrapeError};

    fn app_with_previous_run() -> App {
        let mut app = App::new(AppState::default());
        app.player = Some(s!("John Smith"));
        app.data = DataSet {
            headers: Some(vec![s!("Season")]),
            rows: vec![vec![s!("2022-23")]],
        };
        app.warnings = vec![s!("Season 2021-22: team page: GET x: no page available")];
        app
    }

    #[test]
    fn fatal_error_clears_previous_table() {
        let mut app = app_with_previous_run();
        app.running = true;
        let url = Url::parse("https://stats.ncaa.org/players/2").unwrap();
        *app.job.lock().unwrap() = Some(Err(ScrapeError::PlayerNameMissing(url)));

        poll_scrape(&mut app);

        assert!(!app.running);
        assert!(app.data.is_empty());
        assert!(app.data.headers.is_none());
        assert!(app.warnings.is_empty());
        assert_eq!(app.player, None);
        assert!(app.status_text().starts_with("Error: player name not found"));
    }

    #[test]
    fn new_scrape_clears_previous_table_even_when_url_is_rejected() {
        let mut app = app_with_previous_run();
        app.url_text = s!("not a url");

        start_scrape(&mut app, &egui::Context::default());

        assert!(!app.running);
        assert!(app.data.is_empty());
        assert_eq!(app.player, None);
        assert_eq!(app.status_text(), "Enter a valid player URL");
    }

    #[test]
    fn nothing_to_poll_changes_nothing() {
        let mut app = app_with_previous_run();
        app.running = true;
        poll_scrape(&mut app);
        assert!(app.running);
        assert_eq!(app.data.row_count(), 1);
    }
}
