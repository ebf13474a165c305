// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Show the per-season warning list under the table
    pub show_warnings: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            show_warnings: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
