// src/scrape/season.rs
//
// One season, start to finish: team hops, eight category tables, presence
// gate, merge. Failures before the category tables end the season; a failing
// category only empties that category.

use tracing::{debug, warn};
use url::Url;

use crate::core::net::PageFetcher;
use crate::error::SeasonError;
use crate::model::{Category, CategoryRow, CategoryRows, PlayerIdentity, SeasonLink, SeasonRecord};
use crate::report::{Diagnostic, Scope};
use crate::specs::{category, team};

#[derive(Debug)]
pub enum SeasonOutcome {
    Merged(SeasonRecord),
    /// Team page had no "Team Statistics" link.
    NoTeamStats,
    /// Rushing or Passing came back empty.
    Gated,
}

#[derive(Debug)]
pub struct SeasonResult {
    pub outcome: Result<SeasonOutcome, SeasonError>,
    /// Category-level problems that did not end the season.
    pub warnings: Vec<Diagnostic>,
}

pub fn process_season<F: PageFetcher + ?Sized>(
    fetcher: &F,
    link: &SeasonLink,
    player: &PlayerIdentity,
    base: &Url,
) -> SeasonResult {
    let mut warnings = Vec::new();
    let outcome = run(fetcher, link, player, base, &mut warnings);
    SeasonResult { outcome, warnings }
}

fn run<F: PageFetcher + ?Sized>(
    fetcher: &F,
    link: &SeasonLink,
    player: &PlayerIdentity,
    base: &Url,
    warnings: &mut Vec<Diagnostic>,
) -> Result<SeasonOutcome, SeasonError> {
    let Some(links) = team::locate(fetcher, link, base)? else {
        return Ok(SeasonOutcome::NoTeamStats);
    };

    let mut rows = CategoryRows::default();
    for cat in Category::ALL {
        let row = match category::extract(fetcher, links.get(cat).as_ref(), player) {
            Ok(row) => row,
            Err(e) => {
                warn!(season = %link.season, category = %cat, "Category: {e}");
                warnings.push(Diagnostic::new(
                    Scope::Category { season: link.season.clone(), category: cat },
                    e.to_string(),
                ));
                CategoryRow::empty()
            }
        };
        rows.set(cat, row);
    }

    if !rows.passes_gate() {
        debug!(
            season = %link.season,
            rushing = !rows.get(Category::Rushing).is_empty(),
            passing = !rows.get(Category::Passing).is_empty(),
            "Season: gated out"
        );
        return Ok(SeasonOutcome::Gated);
    }

    Ok(SeasonOutcome::Merged(SeasonRecord::merge(&link.season, rows)))
}
