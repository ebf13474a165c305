// src/bin/cli.rs
use color_eyre::eyre::Result;
use ncaa_scrape::{cli, log};

fn main() -> Result<()> {
    color_eyre::install()?;
    log::init();
    cli::run()
}
