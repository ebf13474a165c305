// src/specs/player.rs
//! Scraping *spec* for the player profile page.
//!
//! Reads two things:
//! - the player's display name, from the selected option of `select#player_id`;
//! - the season list, from every `table.dataTable` whose header row names both
//!   a `Year` and a `Team` column. Each data row with a linked team becomes a
//!   `SeasonLink`; rows whose team cell has no link are placeholders and skipped.
//!
//! A malformed row stops its own table (one warning) but never the next one.

use scraper::ElementRef;
use tracing::{debug, warn};
use url::Url;

use crate::config::consts::{SEASON_TABLE_CLASS, TEAM_HEADER, YEAR_HEADER};
use crate::core::html::{self, Document};
use crate::error::PageError;
use crate::model::{PlayerIdentity, SeasonLink};
use crate::report::{Diagnostic, Scope};

#[derive(Debug, Default)]
pub struct Discovery {
    pub seasons: Vec<SeasonLink>,
    pub warnings: Vec<Diagnostic>,
}

/// Display name of the selected player, if the page has one.
pub fn read_identity(doc: &Document) -> Option<PlayerIdentity> {
    let opt = doc.first(selector!(r#"select#player_id option[selected="selected"]"#))?;
    let raw = html::text_of(opt);
    if raw.is_empty() { None } else { Some(PlayerIdentity::new(&raw)) }
}

pub fn discover_seasons(doc: &Document, base: &Url) -> Discovery {
    let mut out = Discovery::default();

    let tables = doc
        .select(selector!("table"))
        .filter(|t| t.value().classes().any(|c| c == SEASON_TABLE_CLASS));

    for (table_ix, table) in tables.enumerate() {
        let headers = header_cells(table);
        let (Some(year_col), Some(team_col)) = (
            headers.iter().position(|h| h == YEAR_HEADER),
            headers.iter().position(|h| h == TEAM_HEADER),
        ) else {
            debug!(table = table_ix, ?headers, "Discover: not a season table");
            continue;
        };

        match scan_table(table, year_col, team_col, &headers, base, &mut out.seasons) {
            Ok(n) => debug!(table = table_ix, seasons = n, "Discover: table scanned"),
            Err(e) => {
                warn!(table = table_ix, "Discover: {e}");
                out.warnings.push(Diagnostic::new(Scope::SeasonTable(table_ix), e.to_string()));
            }
        }
    }

    out
}

/// Text of the first row that carries `<th>` cells.
fn header_cells(table: ElementRef<'_>) -> Vec<String> {
    table
        .select(selector!("tr"))
        .find(|tr| tr.select(selector!("th")).next().is_some())
        .map(|tr| tr.select(selector!("th")).map(html::text_of).collect())
        .unwrap_or_default()
}

/// Push this table's seasons; stops at the first malformed row.
fn scan_table(
    table: ElementRef<'_>,
    year_col: usize,
    team_col: usize,
    headers: &[String],
    base: &Url,
    out: &mut Vec<SeasonLink>,
) -> Result<usize, PageError> {
    let mut found = 0;
    let rows = table
        .select(selector!("tr"))
        .filter(|tr| tr.select(selector!("td")).next().is_some());

    for (row_ix, tr) in rows.enumerate() {
        let cells: Vec<ElementRef<'_>> = tr.select(selector!("td")).collect();
        let cell = |col: usize| {
            cells.get(col).copied().ok_or_else(|| PageError::MissingCell {
                row: row_ix,
                col,
                header: headers.get(col).cloned().unwrap_or_default(),
            })
        };

        let team_cell = cell(team_col)?;
        let season = html::text_of(cell(year_col)?);

        let Some(href) = html::first_href(team_cell) else {
            debug!(%season, "Discover: no team link yet, skipping row");
            continue;
        };

        let team_url = html::resolve(base, href)?;
        out.push(SeasonLink { season, team_url });
        found += 1;
    }

    Ok(found)
}
