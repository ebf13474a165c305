// src/specs/category.rs
//! Scraping *spec* for a category statistics page (Rushing, Tackles, ...).
//!
//! The page's first `<table>` is the dataset. Headers come from `<thead>`, or
//! failing that the first row carrying `<th>`; data rows are the rows with
//! `<td>` cells. The player's row is the one whose `Player` cell equals the
//! canonical name exactly.
//!
//! Expected absences all produce an empty `CategoryRow`:
//! no link, no table, no `Player` column, no matching row.

use scraper::ElementRef;
use tracing::debug;
use url::Url;

use crate::config::consts::PLAYER_COLUMN;
use crate::core::html::{self, Document};
use crate::core::net::PageFetcher;
use crate::core::sanitize::normalize_column;
use crate::error::FetchError;
use crate::model::{CategoryRow, PlayerIdentity};

/// First table of a page, as text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn parse_first_table(doc: &Document) -> Option<RawTable> {
    let table = doc.first(selector!("table"))?;

    let header_row = table
        .select(selector!("thead tr"))
        .next()
        .or_else(|| {
            table
                .select(selector!("tr"))
                .find(|tr| tr.select(selector!("th")).next().is_some())
        });
    let headers: Vec<String> = header_row
        .map(|tr| tr.select(selector!("th, td")).map(html::text_of).collect())
        .unwrap_or_default();

    let rows = table
        .select(selector!("tr"))
        .filter(|tr| !in_thead(*tr))
        .filter(|tr| tr.select(selector!("td")).next().is_some())
        .map(|tr| tr.select(selector!("td")).map(html::text_of).collect())
        .collect();

    Some(RawTable { headers, rows })
}

fn in_thead(tr: ElementRef<'_>) -> bool {
    tr.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|el| el.value().name() == "thead")
}

/// The player's row with normalized column names, or empty.
pub fn extract_player_row(table: &RawTable, player: &PlayerIdentity) -> CategoryRow {
    let Some(player_col) = table.headers.iter().position(|h| h == PLAYER_COLUMN) else {
        return CategoryRow::empty();
    };

    let mut matches = table
        .rows
        .iter()
        .filter(|r| r.get(player_col).map(String::as_str) == Some(player.canonical()));

    let Some(row) = matches.next() else {
        return CategoryRow::empty();
    };
    let extra = matches.count();
    if extra > 0 {
        debug!(player = player.canonical(), extra, "Category: duplicate player rows, keeping the first");
    }

    let fields = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| (normalize_column(h), row.get(i).cloned().unwrap_or_default()))
        .collect();
    CategoryRow::from_fields(fields)
}

/// Fetch one category page and pull the player's row out of it.
pub fn extract<F: PageFetcher + ?Sized>(
    fetcher: &F,
    url: Option<&Url>,
    player: &PlayerIdentity,
) -> Result<CategoryRow, FetchError> {
    let Some(url) = url else {
        return Ok(CategoryRow::empty());
    };

    let page = fetcher.fetch(url)?;
    let doc = Document::parse(&page);
    let Some(table) = parse_first_table(&doc) else {
        debug!(%url, "Category: page has no table");
        return Ok(CategoryRow::empty());
    };
    Ok(extract_player_row(&table, player))
}
