// src/scrape/mod.rs
mod collect;
mod season;

pub use collect::collect_player_stats;
pub use collect::scrape_player;
pub use season::{ process_season, SeasonOutcome, SeasonResult };
