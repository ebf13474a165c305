// src/gui/mod.rs
pub mod app;
mod actions;
mod components;
pub mod progress;

pub use app::run;
