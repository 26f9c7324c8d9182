// src/specs/leagues.rs
//! League discovery from the site navigation.
//!
//! Markup contract: a menu `li` whose own `a` reads "Schedules", with a nested
//! `ul` of `li > a` links, one per league schedule page.
use chrono::{DateTime, Local};
use scraper::{ElementRef, Html};

use crate::config::consts::SCHEDULES_MENU_LABEL;
use crate::core::html::{absolute_url, child_elements, sel, text_of};
use crate::core::net::{Fetch, fetch_document};
use crate::error::{Result, ScrapeError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueLink {
    pub label: String,
    pub url: String,
}

/// Leagues in menu order, stamped with when they were read.
#[derive(Debug, Clone)]
pub struct LeagueIndex {
    pub leagues: Vec<LeagueLink>,
    pub discovered_at: DateTime<Local>,
}

pub fn locate(fetcher: &dyn Fetch, base_url: &str) -> Result<LeagueIndex> {
    let doc = fetch_document(fetcher, base_url)?;
    let t = std::time::Instant::now();
    let leagues = parse_doc(&doc, base_url)?;
    logd!("Leagues: Parse navigation in {:?}", t.elapsed());
    logf!("Leagues: {} discovered at {}", leagues.len(), base_url);
    Ok(LeagueIndex { leagues, discovered_at: Local::now() })
}

/// Split out for unit tests.
pub fn parse_doc(doc: &Html, base_url: &str) -> Result<Vec<LeagueLink>> {
    // Themes often render the menu twice (desktop + mobile); the first one wins.
    let menu = doc
        .select(&sel("li"))
        .find(|li| is_schedules_item(*li))
        .ok_or_else(|| ScrapeError::parse("\"Schedules\" menu", base_url))?;

    let submenu = child_elements(menu)
        .find(|el| el.value().name() == "ul")
        .ok_or_else(|| ScrapeError::parse("\"Schedules\" submenu", base_url))?;

    let leagues: Vec<LeagueLink> = child_elements(submenu)
        .filter(|el| el.value().name() == "li")
        .filter_map(|li| child_elements(li).find(|el| el.value().name() == "a"))
        .filter_map(|a| {
            let href = a.value().attr("href")?.trim();
            let label = text_of(a);
            if href.is_empty() || label.is_empty() {
                return None;
            }
            Some(LeagueLink { label, url: absolute_url(base_url, href) })
        })
        .collect();

    if leagues.is_empty() {
        return Err(ScrapeError::parse("league links under \"Schedules\"", base_url));
    }
    Ok(leagues)
}

fn is_schedules_item(li: ElementRef<'_>) -> bool {
    child_elements(li)
        .find(|el| el.value().name() == "a")
        .is_some_and(|a| text_of(a).eq_ignore_ascii_case(SCHEDULES_MENU_LABEL))
}
