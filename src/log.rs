// src/log.rs
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log to stderr. `RUST_LOG` overrides the default `info` level.
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Log to a file in append mode, for frontends without a terminal.
/// Falls back to stderr when the file cannot be opened.
pub fn init_file(path: impl AsRef<Path>) {
    let path = path.as_ref();
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
        Err(e) => {
            init();
            tracing::warn!("Log: cannot open {}: {e}", path.display());
        }
    }
}
