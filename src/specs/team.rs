// src/specs/team.rs
//! Scraping *spec* for the two team hops.
//!
//! - Team page: the link whose text is exactly "Team Statistics".
//! - Team statistics page: one link per category, text equal to the category
//!   label ("Rushing", "Passes Defended", ...).
//!
//! Exact text only. A missing link is a normal outcome (`None`), not an error.

use tracing::debug;
use url::Url;

use crate::config::consts::TEAM_STATS_LABEL;
use crate::core::html::{self, Document};
use crate::core::net::PageFetcher;
use crate::error::{PageError, SeasonError};
use crate::model::{CategoryLinks, SeasonLink};

pub fn team_stats_link(doc: &Document, base: &Url) -> Result<Option<Url>, PageError> {
    doc.link_by_text(TEAM_STATS_LABEL)
        .map(|href| html::resolve(base, href))
        .transpose()
}

pub fn category_links(doc: &Document, base: &Url) -> Result<CategoryLinks, PageError> {
    let mut links = CategoryLinks::default();
    for cat in crate::model::Category::ALL {
        if let Some(href) = doc.link_by_text(cat.label()) {
            links.set(cat, Some(html::resolve(base, href)?));
        }
    }
    Ok(links)
}

/// Team page → team statistics page → category links.
/// `Ok(None)` when the team page has no statistics link.
pub fn locate<F: PageFetcher + ?Sized>(
    fetcher: &F,
    season: &SeasonLink,
    base: &Url,
) -> Result<Option<CategoryLinks>, SeasonError> {
    let label = &season.season;
    let markup_err = |source| SeasonError::Markup { season: label.clone(), source };

    let team_html = fetcher
        .fetch(&season.team_url)
        .map_err(|source| SeasonError::TeamPage { season: label.clone(), source })?;

    let stats_url = {
        let doc = Document::parse(&team_html);
        team_stats_link(&doc, base).map_err(markup_err)?
    };
    let Some(stats_url) = stats_url else {
        debug!(season = %label, "Team: no '{TEAM_STATS_LABEL}' link");
        return Ok(None);
    };

    let stats_html = fetcher
        .fetch(&stats_url)
        .map_err(|source| SeasonError::TeamStatsPage { season: label.clone(), source })?;

    let doc = Document::parse(&stats_html);
    let links = category_links(&doc, base).map_err(markup_err)?;
    debug!(
        season = %label,
        found = links.iter().filter(|(_, u)| u.is_some()).count(),
        "Team: category links resolved"
    );
    Ok(Some(links))
}
