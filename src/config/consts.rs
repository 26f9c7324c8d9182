// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.rivercityslowpitch.org/";
pub const USER_AGENT: &str = concat!("league_scrape/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 20;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite

// Results are assumed posted by this local hour on game day
pub const CHECK_HOURS: u32 = 16;

// Site markup contract
pub const MAINTENANCE_CLASS: &str = "maintenance-mode";
pub const SCHEDULES_MENU_LABEL: &str = "Schedules";

// Local store
pub const STORE_DIR: &str = ".store";
pub const STORE_FILE: &str = "leagues.json";
pub const LOG_SUBDIR: &str = "log";
pub const LOG_FILE: &str = "log.ndjson";
pub const LOG_INDEX_FILE: &str = "sessions.json";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
