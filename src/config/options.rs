// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Player profile page the run starts from.
    pub player_url: String,
    /// Origin relative links are resolved against.
    pub base_url: String,
    pub user_agent: String,
    /// Per-request deadline; `None` leaves the transport default alone.
    pub timeout_secs: Option<u64>,
    /// Seasons processed in parallel. 1 = strictly sequential.
    pub workers: usize,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            player_url: s!(),
            base_url: s!(BASE_URL),
            user_agent: s!(USER_AGENT),
            timeout_secs: None,
            workers: 1,
        }
    }
}

impl ScrapeOptions {
    pub fn worker_count(&self) -> usize {
        self.workers.clamp(1, MAX_WORKERS)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// "<dir>/<stem>.<ext>", extension taken from the current format unless
    /// the user typed one explicitly.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        let file = match &self.out_path.ext {
            Some(ext) => join!(stem, ".", &ext.to_string_lossy()),
            None => join!(stem, ".", self.format.ext()),
        };
        self.out_path.dir.join(file)
    }

    /// Parse user text into dir + stem (+ explicit extension, if any).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
