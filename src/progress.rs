// src/progress.rs
/// Lightweight progress reporting used by long-running operations (scrape/export).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One season finished and contributed a row.
    fn item_done(&mut self, _season: &str) {}

    /// One season finished without a row (failed, gated out, or no stats link).
    fn item_failed(&mut self, _season: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
