// tests/common/mod.rs
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use league_scrape::config::options::ScrapeOptions;
use league_scrape::core::StaticFetcher;

pub const BASE: &str = "https://league.test/";
pub const MONDAY: &str = "https://league.test/calendar/monday-mens/";
pub const TUESDAY: &str = "https://league.test/calendar/tuesday-co-ed/";

pub fn event(id: u32) -> String {
    format!("https://league.test/event/{id}/")
}

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

/// The whole captured site: navigation, two schedules, and every results page.
pub fn site() -> StaticFetcher {
    StaticFetcher::new()
        .with_page(BASE, fixture("nav.html"))
        .with_page(MONDAY, fixture("schedule_monday.html"))
        .with_page(TUESDAY, fixture("schedule_tuesday.html"))
        .with_page(&event(4411), fixture("event_4411.html"))
        .with_page(&event(4412), fixture("event_4412.html"))
        .with_page(&event(4413), fixture("event_rainout.html"))
        .with_page(&event(4421), fixture("event_rainout.html"))
}

pub fn options() -> ScrapeOptions {
    ScrapeOptions { base_url: BASE.to_string(), request_pause_ms: 0, ..ScrapeOptions::default() }
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
}
