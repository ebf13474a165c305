// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, PoisonError},
};

use eframe::egui;
use tracing::info;

use crate::{
    config::state::AppState,
    data::DataSet,
    error::ScrapeError,
    report::StatsReport,
};

use super::{actions, components};

/// Where the background scrape drops its result for the UI thread to pick up.
pub type JobSlot = Arc<Mutex<Option<Result<StatsReport, ScrapeError>>>>;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "NCAA Player Stats",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // input
    pub url_text: String,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // last finished scrape
    pub player: Option<String>,
    pub data: DataSet,
    pub warnings: Vec<String>,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub job: JobSlot,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        info!("Init: window={}x{}", state.gui.window_w, state.gui.window_h);

        Self {
            state,
            url_text: s!(),
            out_path_text,
            out_path_dirty: false,
            player: None,
            data: DataSet::default(),
            warnings: Vec::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            job: Arc::new(Mutex::new(None)),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = msg.into();
    }

    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Forget the last run: no table, no warnings, no player.
    pub fn clear_results(&mut self) {
        self.player = None;
        self.data = DataSet::default();
        self.warnings.clear();
    }

    /// Push the out path text field into ExportOptions if the user edited it.
    pub fn commit_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            info!("UI: Out path set → {}", self.state.options.export.out_path().display());
            self.out_path_dirty = false;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.running {
            actions::poll_scrape(self);
        }

        egui::TopBottomPanel::top("input").show(ctx, |ui| {
            components::url_bar::draw(ui, self);
            ui.separator();
            components::export_bar::draw(ui, self);
        });

        if self.state.gui.show_warnings && !self.warnings.is_empty() {
            egui::TopBottomPanel::bottom("warnings")
                .resizable(true)
                .show(ctx, |ui| components::warnings::draw(ui, self));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            components::data_table::draw(ui, self);
        });
    }
}
