// src/specs/game_results.rs
//! One event (game) page: details table, team summary, per-team box scores.
//!
//! Sections are found by their SportsPress marker classes:
//! - `.sp-section-content-details` → `table.sp-event-details`, second row:
//!   cell 2 = "{Day} {Category} League", cell 3 = season label.
//! - `.sp-section-content-results` → `tbody tr`, visiting team first, home second;
//!   cells `td.data-name`, `td.data-r`, `td.data-h`, `td.data-outcome`.
//! - `.sp-section-content-performance` → one `.sp-template-event-performance`
//!   block per team (`h4.sp-table-caption` heading, `td[data-label]` cells).
//!
//! Stats are strict whole numbers, except `BB` which falls back to 0.
use scraper::{ElementRef, Html};

use crate::core::html::{sel, select_one, select_within, text_of};
use crate::core::net::{Fetch, fetch_document};
use crate::core::sanitize::last_path_segment;
use crate::error::{Result, ScrapeError};
use crate::model::{Game, GameInformation, Player, ScheduledGame, Team};

/// Construct builds `GameInformation` from the page; Update keeps the one the
/// game already carries and only replaces the teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Construct,
    Update,
}

/// First population of a game's results.
pub fn construct(fetcher: &dyn Fetch, game: &ScheduledGame) -> Result<Game> {
    fetch(fetcher, game, Mode::Construct)
}

/// Re-population: same `GameInformation`, fresh teams.
pub fn update(fetcher: &dyn Fetch, game: &ScheduledGame) -> Result<Game> {
    fetch(fetcher, game, Mode::Update)
}

fn fetch(fetcher: &dyn Fetch, game: &ScheduledGame, mode: Mode) -> Result<Game> {
    let doc = fetch_document(fetcher, &game.results_url)?;
    let t = std::time::Instant::now();
    let out = parse_doc(&doc, game, mode)?;
    logd!("Results: Parse {} ({} teams) in {:?}", game.game_id(), out.teams.len(), t.elapsed());
    Ok(out)
}

/// Split out for unit tests.
pub fn parse_doc(doc: &Html, game: &ScheduledGame, mode: Mode) -> Result<Game> {
    let url = game.results_url.as_str();

    let details = select_one(doc, ".sp-section-content-details", "details section", url)?;
    let results = select_one(doc, ".sp-section-content-results", "results section", url)?;
    let performance = select_one(doc, ".sp-section-content-performance", "performance section", url)?;

    // A game that was stored before its page existed has no information yet.
    let game_information = match (mode, &game.game_results.game_information) {
        (Mode::Update, Some(existing)) => existing.clone(),
        _ => parse_information(doc, details, game)?,
    };

    let mut teams = parse_teams(results, url)?;
    if teams.len() == 2 {
        attach_players(performance, &mut teams, url)?;
    }

    Ok(Game { game_information: Some(game_information), teams })
}

fn parse_information(doc: &Html, details: ElementRef<'_>, game: &ScheduledGame) -> Result<GameInformation> {
    let url = game.results_url.as_str();
    let title = text_of(select_one(doc, "article header .entry-title", "article title", url)?);

    let table = select_within(details, "table.sp-event-details", "details table", url)?;
    let row = table
        .select(&sel("tr"))
        .nth(1)
        .ok_or_else(|| ScrapeError::parse("details table data row", url))?;
    let cells: Vec<String> = row.select(&sel("td")).map(text_of).collect();
    let (league_label, season) = match (cells.get(2), cells.get(3)) {
        (Some(league), Some(season)) => (league, season),
        _ => return Err(ScrapeError::parse("league/season cells of details row", url)),
    };
    let (league_day, league_category) = split_league_label(league_label);

    Ok(GameInformation {
        title,
        game_id: s!(last_path_segment(url)),
        data_source: s!(url),
        date: game.date,
        league_category,
        league_day,
        season: season.clone(),
    })
}

/// "Monday Mens League" → ("Monday", "Mens"); "Tuesday Co Ed League" → ("Tuesday", "Co Ed").
fn split_league_label(label: &str) -> (String, String) {
    let trimmed = label.trim();
    let without_suffix = trimmed
        .strip_suffix("League")
        .or_else(|| trimmed.strip_suffix("league"))
        .unwrap_or(trimmed)
        .trim();
    match without_suffix.split_once(' ') {
        Some((day, category)) => (s!(day), s!(category.trim())),
        None => (s!(without_suffix), s!()),
    }
}

fn parse_teams(results: ElementRef<'_>, url: &str) -> Result<Vec<Team>> {
    let mut teams = Vec::with_capacity(2);
    let mut home_team = false;

    for row in results.select(&sel("tbody tr")) {
        let name = cell_text(row, "td.data-name", "team name", url)?;
        let runs_scored = parse_stat("R", &cell_text(row, "td.data-r", "R cell", url)?)?;
        let hits = parse_stat("H", &cell_text(row, "td.data-h", "H cell", url)?)?;
        let outcome = row.select(&sel("td.data-outcome")).next().map(text_of).unwrap_or_default();

        teams.push(Team { name, home_team, runs_scored, runs_against: 0, hits, outcome, players: Vec::new() });
        home_team = !home_team;
    }

    if teams.len() == 2 {
        teams[0].runs_against = teams[1].runs_scored;
        teams[1].runs_against = teams[0].runs_scored;
    }
    Ok(teams)
}

fn cell_text(row: ElementRef<'_>, css: &str, what: &str, url: &str) -> Result<String> {
    select_within(row, css, what, url).map(text_of)
}

fn attach_players(performance: ElementRef<'_>, teams: &mut [Team], url: &str) -> Result<()> {
    for block in performance.select(&sel(".sp-template-event-performance")) {
        let heading = text_of(select_within(block, "h4.sp-table-caption", "team heading", url)?);
        let players = block
            .select(&sel("tbody tr"))
            .map(parse_player)
            .collect::<Result<Vec<_>>>()?;

        let Some(idx) = teams.iter().position(|t| t.name == heading) else {
            return Err(ScrapeError::NameMismatch {
                heading,
                visitor: teams[0].name.clone(),
                home: teams[1].name.clone(),
            });
        };
        teams[idx].players = players;
    }
    Ok(())
}

/// Map one performance row by its `data-label` cells.
pub fn parse_player(row: ElementRef<'_>) -> Result<Player> {
    let mut player = Player::default();
    for cell in row.select(&sel("td[data-label]")) {
        let Some(label) = cell.value().attr("data-label") else { continue };
        let value = text_of(cell);
        match label.trim() {
            "Player" => player.name = value,
            "AB" => player.at_bats = parse_stat("AB", &value)?,
            "R" => player.runs = parse_stat("R", &value)?,
            "1B" => player.singles = parse_stat("1B", &value)?,
            "2B" => player.doubles = parse_stat("2B", &value)?,
            "3B" => player.triples = parse_stat("3B", &value)?,
            "HR" => player.home_runs = parse_stat("HR", &value)?,
            // Walks are often left blank or "-" on the site.
            "BB" => player.bases_on_balls = value.trim().parse().unwrap_or(0),
            "SF" => player.sacrifice_flies = parse_stat("SF", &value)?,
            _ => {}
        }
    }
    Ok(player)
}

fn parse_stat(field: &str, value: &str) -> Result<u32> {
    value.trim().parse().map_err(|_| ScrapeError::numeric(field, value.trim()))
}
