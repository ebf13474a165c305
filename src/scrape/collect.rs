// src/scrape/collect.rs
use std::{
    thread,
    time::Duration,
    sync::{ mpsc, atomic::{ AtomicUsize, Ordering }},
};

use tracing::{info, warn};
use url::Url;

use crate::{
    config::consts::{ FILL_VALUE, REQUEST_PAUSE_MS },
    config::options::ScrapeOptions,
    core::{ Document, HttpFetcher, PageFetcher },
    error::ScrapeError,
    model::{ PlayerIdentity, ResultTable, SeasonLink },
    progress::{ NullProgress, Progress },
    report::{ Diagnostic, Scope, StatsReport },
    specs::player,
};

use super::season::{ process_season, SeasonOutcome, SeasonResult };

/// Scrape one player over HTTP.
pub fn scrape_player(
    opts: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<StatsReport, ScrapeError> {
    let fetcher = HttpFetcher::new(opts)?;
    collect_player_stats(&fetcher, opts, progress)
}

/// Player page → seasons → per-season tables → one zero-filled table.
/// Only the player page itself is fatal; everything after it degrades per season.
pub fn collect_player_stats<F: PageFetcher + ?Sized>(
    fetcher: &F,
    opts: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<StatsReport, ScrapeError> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let player_url = Url::parse(opts.player_url.trim()).map_err(|source| {
        ScrapeError::BadPlayerUrl { input: opts.player_url.clone(), source }
    })?;
    let base = Url::parse(opts.base_url.trim()).map_err(|source| {
        ScrapeError::BadBaseUrl { input: opts.base_url.clone(), source }
    })?;

    progress.log("Fetching player page…");
    let page = fetcher.fetch(&player_url)?;

    let (player, discovery) = {
        let doc = Document::parse(&page);
        let player = player::read_identity(&doc)
            .ok_or_else(|| ScrapeError::PlayerNameMissing(player_url.clone()))?;
        (player, player::discover_seasons(&doc, &base))
    };
    info!(player = player.canonical(), seasons = discovery.seasons.len(), "Scrape: player page read");

    let seasons = discovery.seasons;
    let mut warnings = discovery.warnings;

    progress.begin(seasons.len());
    let results = run_seasons(fetcher, &seasons, &player, &base, opts.worker_count(), &mut *progress);

    // Fold outcomes in discovery order.
    let mut table = ResultTable::new();
    for (link, result) in seasons.iter().zip(results) {
        warnings.extend(result.warnings);
        match result.outcome {
            Ok(SeasonOutcome::Merged(record)) => table.push(record),
            Ok(SeasonOutcome::NoTeamStats | SeasonOutcome::Gated) => {}
            Err(e) => {
                warn!(season = %e.season(), "Season: {e}");
                warnings.push(Diagnostic::new(Scope::Season(link.season.clone()), e.to_string()));
            }
        }
    }

    table.fill_missing(FILL_VALUE);

    progress.finish();
    info!(
        player = player.canonical(),
        rows = table.row_count(),
        columns = table.column_count(),
        warnings = warnings.len(),
        "Scrape: done"
    );

    Ok(StatsReport { player, seasons_found: seasons.len(), table, warnings })
}

fn report(progress: &mut dyn Progress, link: &SeasonLink, result: &SeasonResult) {
    match result.outcome {
        Ok(SeasonOutcome::Merged(_)) => progress.item_done(&link.season),
        _ => progress.item_failed(&link.season),
    }
}

/// Results come back in the same order as `seasons`, whatever the worker count.
fn run_seasons<F: PageFetcher + ?Sized>(
    fetcher: &F,
    seasons: &[SeasonLink],
    player: &PlayerIdentity,
    base: &Url,
    workers: usize,
    progress: &mut dyn Progress,
) -> Vec<SeasonResult> {
    let workers = workers.min(seasons.len()).max(1);

    if workers == 1 {
        return seasons
            .iter()
            .map(|link| {
                let result = process_season(fetcher, link, player, base);
                report(&mut *progress, link, &result);
                result
            })
            .collect();
    }

    let counter = AtomicUsize::new(0);
    let (res_tx, res_rx) = mpsc::channel::<(usize, SeasonResult)>();
    let mut done: Vec<(usize, SeasonResult)> = Vec::with_capacity(seasons.len());

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = res_tx.clone();
            let counter = &counter;
            scope.spawn(move || {
                loop {
                    let i = counter.fetch_add(1, Ordering::Relaxed);
                    let Some(link) = seasons.get(i) else { break };
                    let result = process_season(fetcher, link, player, base);
                    if tx.send((i, result)).is_err() {
                        break;
                    }
                    thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS)); // be polite
                }
            });
        }
        drop(res_tx); // main thread is sole receiver now

        for (i, result) in res_rx.iter() {
            report(&mut *progress, &seasons[i], &result);
            done.push((i, result));
        }
    });

    // Every index is claimed exactly once, and a panicking worker re-panics
    // out of the scope, so `done` holds one result per season.
    done.sort_unstable_by_key(|(i, _)| *i);
    done.into_iter().map(|(_, result)| result).collect()
}
