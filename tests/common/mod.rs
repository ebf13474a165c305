// tests/common/mod.rs
//
// Canned pages for pipeline tests. Everything is served from memory; a URL
// with no page behind it fails the way a dead link would.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use ncaa_scrape::config::options::ScrapeOptions;
use ncaa_scrape::core::PageFetcher;
use ncaa_scrape::error::FetchError;
use ncaa_scrape::progress::Progress;
use url::Url;

pub const BASE: &str = "https://stats.ncaa.org";
pub const PLAYER_URL: &str = "https://stats.ncaa.org/players/100";
pub const RAW_NAME: &str = "Smith, John Michael";
pub const NAME: &str = "John Smith";

#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, String>,
    hits: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// `path` is joined onto the site origin.
    pub fn page(mut self, path: &str, html: impl Into<String>) -> Self {
        let url = Url::parse(BASE).unwrap().join(path).unwrap();
        self.pages.insert(url.to_string(), html.into());
        self
    }

    pub fn without(mut self, path: &str) -> Self {
        let url = Url::parse(BASE).unwrap().join(path).unwrap();
        self.pages.remove(url.as_str());
        self
    }

    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

impl PageFetcher for FakeFetcher {
    fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        self.hits.lock().unwrap().push(url.to_string());
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| FetchError::NotFound { url: url.clone() })
    }
}

pub fn options() -> ScrapeOptions {
    ScrapeOptions {
        player_url: PLAYER_URL.into(),
        base_url: BASE.into(),
        ..ScrapeOptions::default()
    }
}

/* ---------------- page builders ---------------- */

/// Player page: name dropdown plus one season table. `seasons` is
/// (label, team id); team id `None` renders an unlinked team cell.
pub fn player_page(raw_name: &str, seasons: &[(&str, Option<u32>)]) -> String {
    let rows: String = seasons
        .iter()
        .map(|(label, team)| match team {
            Some(id) => format!(
                r#"<tr><td>{label}</td><td><a href="/teams/{id}">Team {id}</a></td><td>11</td></tr>"#
            ),
            None => format!(r#"<tr><td>{label}</td><td>-</td><td>0</td></tr>"#),
        })
        .collect();

    format!(
        r#"<html><body>
        <select id="player_id">
          <option value="99">Other, Guy</option>
          <option value="100" selected="selected">{raw_name}</option>
        </select>
        <table class="dataTable small_font">
          <thead><tr><th>Year</th><th>Team</th><th>GP</th></tr></thead>
          <tbody>{rows}</tbody>
        </table>
        </body></html>"#
    )
}

pub fn team_page(team: u32) -> String {
    format!(
        r#"<a href="/teams/{team}/roster">Roster</a>
           <a href="/teams/{team}/stats">Team Statistics</a>"#
    )
}

pub fn team_page_without_stats(team: u32) -> String {
    format!(r#"<a href="/teams/{team}/roster">Roster</a>"#)
}

pub fn cat_path(team: u32, slug: &str) -> String {
    format!("/teams/{team}/cat/{slug}")
}

/// Team statistics page linking every category.
pub fn team_stats_page(team: u32) -> String {
    team_stats_page_without(team, &[])
}

/// Team statistics page with the `missing` labels left out entirely.
pub fn team_stats_page_without(team: u32, missing: &[&str]) -> String {
    [
        ("Rushing", "rush"),
        ("Passing", "pass"),
        ("Receiving", "rec"),
        ("Sacks", "sacks"),
        ("Tackles", "tackles"),
        ("Passes Defended", "pd"),
        ("Fumbles", "fum"),
        ("Defense", "def"),
    ]
    .iter()
    .filter(|(label, _)| !missing.contains(label))
    .map(|(label, slug)| format!(r#"<a href="{}">{label}</a>"#, cat_path(team, slug)))
    .collect()
}

/// Category page: one table, `Player` first, then `cols`.
pub fn category_page(cols: &[&str], rows: &[(&str, &[&str])]) -> String {
    let head: String = std::iter::once("Player")
        .chain(cols.iter().copied())
        .map(|c| format!("<th>{c}</th>"))
        .collect();
    let body: String = rows
        .iter()
        .map(|(player, vals)| {
            let tds: String = vals.iter().map(|v| format!("<td>{v}</td>")).collect();
            format!("<tr><td>{player}</td>{tds}</tr>")
        })
        .collect();
    format!(r#"<table><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table>"#)
}

/// A season where Rushing and Passing both list the player; other
/// categories are present but the player is not in them.
pub fn season_pages(f: FakeFetcher, team: u32, rush_yds: &str, pass_yds: &str) -> FakeFetcher {
    let empty = category_page(&["Yds"], &[("Someone Else", &["1"])]);
    let mut f = f
        .page(&format!("/teams/{team}"), team_page(team))
        .page(&format!("/teams/{team}/stats"), team_stats_page(team))
        .page(
            &cat_path(team, "rush"),
            category_page(&["Rush Att", "Rush Yds"], &[(NAME, &["10", rush_yds]), ("Jim Jones", &["2", "4"])]),
        )
        .page(
            &cat_path(team, "pass"),
            category_page(&["Pass Att", "Pass Yds"], &[(NAME, &["20", pass_yds])]),
        );
    for slug in ["rec", "sacks", "tackles", "pd", "fum", "def"] {
        f = f.page(&cat_path(team, slug), empty.clone());
    }
    f
}

/* ---------------- progress ---------------- */

#[derive(Default)]
pub struct RecordingProgress {
    pub total: Option<usize>,
    pub done: Vec<String>,
    pub failed: Vec<String>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) {
        self.total = Some(total);
    }
    fn item_done(&mut self, season: &str) {
        self.done.push(season.to_string());
    }
    fn item_failed(&mut self, season: &str) {
        self.failed.push(season.to_string());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}
