// src/error.rs
//
// Error taxonomy for a scrape run:
// - FetchError:  transport failures (one GET).
// - PageError:   markup we could not read (missing cells, bad hrefs).
// - ScrapeError: fatal, aborts the run before any season is processed.
// - SeasonError: season-local, the season is dropped and a warning emitted.
// - ExportError: writing the finished table.

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("GET {url}: {source}")]
    Http {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url}: no page available")]
    NotFound { url: Url },
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("invalid link '{href}': {source}")]
    BadHref {
        href: String,
        #[source]
        source: url::ParseError,
    },

    #[error("row {row} has no cell at column {col} ('{header}')")]
    MissingCell { row: usize, col: usize, header: String },
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid player URL '{input}': {source}")]
    BadPlayerUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid site URL '{input}': {source}")]
    BadBaseUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid user agent '{value}': {source}")]
    BadUserAgent {
        value: String,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("could not load player page: {0}")]
    PlayerPage(#[from] FetchError),

    #[error("player name not found on {0}")]
    PlayerNameMissing(Url),
}

#[derive(Debug, Error)]
pub enum SeasonError {
    #[error("team page: {source}")]
    TeamPage {
        season: String,
        #[source]
        source: FetchError,
    },

    #[error("team statistics page: {source}")]
    TeamStatsPage {
        season: String,
        #[source]
        source: FetchError,
    },

    #[error("{source}")]
    Markup {
        season: String,
        #[source]
        source: PageError,
    },
}

impl SeasonError {
    pub fn season(&self) -> &str {
        match self {
            SeasonError::TeamPage { season, .. }
            | SeasonError::TeamStatsPage { season, .. }
            | SeasonError::Markup { season, .. } => season,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("CSV: {0}")]
    Csv(#[from] csv::Error),
}
