// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://stats.ncaa.org";
pub const USER_AGENT: &str = "Mozilla/5.0";

// Link labels on the team pages (matched exactly)
pub const TEAM_STATS_LABEL: &str = "Team Statistics";

// Player page
pub const SEASON_TABLE_CLASS: &str = "dataTable";
pub const YEAR_HEADER: &str = "Year";
pub const TEAM_HEADER: &str = "Team";

// Category tables
pub const PLAYER_COLUMN: &str = "Player";
pub const SEASON_COLUMN: &str = "Season";
pub const FILL_VALUE: &str = "0";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "player_statistics";

// Concurrency
pub const MAX_WORKERS: usize = 8;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite

// Logging
pub const LOG_FILE: &str = "ncaa_scrape.log";
