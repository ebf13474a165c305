// src/gui/progress.rs
use std::sync::{Arc, Mutex, PoisonError};

use eframe::egui;

use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    done: usize,
    skipped: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, done: 0, skipped: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = msg.into();
        self.ctx.request_repaint();
    }
    fn counted(&self) -> usize {
        self.done + self.skipped
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Found {total} season(s)"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, season: &str) {
        self.done += 1;
        self.set_status(format!("Season {} ({}/{})", season, self.counted(), self.total));
    }
    fn item_failed(&mut self, season: &str) {
        self.skipped += 1;
        self.set_status(format!("Season {} skipped ({}/{})", season, self.counted(), self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Scrape complete")); // no counts if there were no seasons
        } else {
            self.set_status(format!("Scrape complete ({} row(s), {} skipped)", self.done, self.skipped));
        }
    }
}
