// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::config::consts::BASE_URL;
use crate::config::options::{AppOptions, ExportFormat};
use crate::csv::to_export_string;
use crate::file::write_export;
use crate::progress::Progress;
use crate::scrape::scrape_player;

/// Scrape season-by-season statistics for one NCAA football player.
#[derive(Parser, Debug)]
#[command(name = "ncaa_scrape")]
#[command(about = "Scrape season-by-season NCAA player statistics", long_about = None)]
#[command(version)]
pub struct Args {
    /// Player profile URL on the stats site.
    pub player_url: String,

    /// Output file. Defaults to out/<player>.<format>.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Omit the header line.
    #[arg(long)]
    pub no_headers: bool,

    /// Site origin relative links are resolved against.
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Seasons fetched in parallel.
    #[arg(long, default_value_t = 1)]
    pub workers: usize,

    /// Per-request timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Write the table to stdout instead of a file.
    #[arg(long)]
    pub print: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.scrape.player_url = self.player_url.clone();
        opts.scrape.base_url = self.base_url.clone();
        opts.scrape.workers = self.workers;
        opts.scrape.timeout_secs = self.timeout;
        opts.export.format = self.format.into();
        opts.export.include_headers = !self.no_headers;
        if let Some(out) = &self.out {
            opts.export.set_path(&out.to_string_lossy());
        }
        opts
    }
}

/// Season progress on stderr.
struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("{total} season(s) found");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, season: &str) {
        eprintln!("  {season}: ok");
    }
    fn item_failed(&mut self, season: &str) {
        eprintln!("  {season}: no row");
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let opts = args.to_options();

    let mut progress = StderrProgress;
    let report = scrape_player(&opts.scrape, Some(&mut progress))
        .wrap_err_with(|| format!("scraping {}", args.player_url))?;

    for w in &report.warnings {
        eprintln!("warning: {w}");
    }

    if report.is_empty() {
        println!("No stats found for {}", report.player.canonical());
        return Ok(());
    }

    let data = report.table.to_dataset();

    if args.print {
        let text = to_export_string(&data, opts.export.include_headers, opts.export.format.delim())?;
        print!("{text}");
        return Ok(());
    }

    let path = write_export(&opts.export, &data)?;
    eprintln!("{}: wrote {} season(s) to {}", report.player.canonical(), data.row_count(), path.display());
    Ok(())
}
