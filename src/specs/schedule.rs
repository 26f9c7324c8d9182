// src/specs/schedule.rs
//! One league's schedule page.
//!
//! - League identity is encoded in the `article` classes:
//!   `sp_league-{day}-{category}-league` and `sp_season-{season}-{year}`.
//! - Rows: `table.sp-event-list tbody tr` with `td.data-date` (nested `<date>`),
//!   `td.data-away`, `td.data-home`, `td.data-time a[href]`.
//! - The result link's text is the score (`"7 - 3"`) once the game is played,
//!   and a start time or nothing before that.
use chrono::{NaiveDate, NaiveDateTime};
use scraper::{ElementRef, Html};

use crate::core::html::{absolute_url, sel, select_one, select_within, text_of};
use crate::core::net::{Fetch, fetch_document};
use crate::error::{Result, ScrapeError};
use crate::model::{GameOutcome, LeagueDescription, LeagueSchedule, ScheduledGame};

use super::game_results;

const LEAGUE_PREFIX: &str = "sp_league-";
const LEAGUE_SUFFIX: &str = "-league";
const SEASON_PREFIX: &str = "sp_season-";

/// Fetch a schedule page and build every already-complete game's results.
pub fn fetch(fetcher: &dyn Fetch, url: &str) -> Result<LeagueSchedule> {
    let doc = fetch_document(fetcher, url)?;
    let t = std::time::Instant::now();
    let mut schedule = parse_doc(&doc, url)?;
    logd!("Schedule: Parse {} ({} games) in {:?}", url, schedule.scheduled_games.len(), t.elapsed());

    for game in schedule.scheduled_games.iter_mut().filter(|g| g.is_complete()) {
        let result = game_results::construct(fetcher, game)?;
        let (listed, teams) = (game.outcome(), result.teams.len());
        if !game.settle(result) && listed != GameOutcome::Canceled {
            logf!("Schedule: {} listed as {:?} but its page has {} teams, canceled", game.label(), listed, teams);
        }
    }
    Ok(schedule)
}

/// Split out for unit tests. Scores are read; results pages are not fetched.
pub fn parse_doc(doc: &Html, url: &str) -> Result<LeagueSchedule> {
    let article = select_one(doc, "article", "schedule article", url)?;
    let league_description = parse_description(article, url)?;

    let scheduled_games = article
        .select(&sel("table.sp-event-list tbody tr"))
        .map(|row| parse_row(row, url))
        .collect::<Result<Vec<_>>>()?;

    Ok(LeagueSchedule { league_description, scheduled_games })
}

fn parse_description(article: ElementRef<'_>, url: &str) -> Result<LeagueDescription> {
    let mut league: Option<(String, String)> = None;
    let mut season: Option<(String, String)> = None;

    for class in article.value().classes() {
        if league.is_none() {
            league = class
                .strip_prefix(LEAGUE_PREFIX)
                .and_then(|rest| rest.strip_suffix(LEAGUE_SUFFIX))
                .and_then(|rest| rest.split_once('-'))
                .map(|(day, category)| (s!(day), s!(category)));
        }
        if season.is_none() {
            season = class
                .strip_prefix(SEASON_PREFIX)
                .and_then(|rest| rest.rsplit_once('-'))
                .map(|(season, year)| (s!(season), s!(year)));
        }
    }

    let (league_day, league_category) = league.ok_or_else(|| ScrapeError::parse("league class on article", url))?;
    let (season, year) = season.ok_or_else(|| ScrapeError::parse("season class on article", url))?;

    Ok(LeagueDescription {
        league_category,
        league_day,
        season,
        year,
        schedule_data_source: s!(url),
    })
}

fn parse_row(row: ElementRef<'_>, url: &str) -> Result<ScheduledGame> {
    let date_text = text_of(select_within(row, "td.data-date date", "game date", url)?);
    let date = parse_date(&date_text).ok_or_else(|| ScrapeError::parse(join!("game date '", &date_text, "'"), url))?;

    let visiting = text_of(select_within(row, "td.data-away", "visiting team", url)?);
    let home = text_of(select_within(row, "td.data-home", "home team", url)?);

    let link = select_within(row, "td.data-time a[href]", "result link", url)?;
    let results_url = absolute_url(url, link.value().attr("href").unwrap_or_default());
    let (visitor_score, home_score) = parse_score(&text_of(link))?;

    let mut game = ScheduledGame::new(date, visiting, home, results_url);
    game.visitor_score = visitor_score;
    game.home_score = home_score;
    Ok(game)
}

/// `2024-05-13 18:30:00`, tolerating a missing seconds or time part.
pub fn parse_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M"))
        .ok()
        .or_else(|| NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?.and_hms_opt(0, 0, 0))
}

/// Score text of a result link.
/// - no `-` at all (blank, or a start time) → not played yet
/// - `"V - H"` → both sides, trimmed
pub fn parse_score(text: &str) -> Result<(Option<u32>, Option<u32>)> {
    let normalized = text.replace(['–', '—'], "-");
    let mut parts = normalized.split('-');
    let (Some(visitor), Some(home), None) = (parts.next(), parts.next(), parts.next()) else {
        return if normalized.contains('-') {
            Err(ScrapeError::parse(join!("score '", text, "'"), "score text"))
        } else {
            Ok((None, None))
        };
    };
    let side = |field: &str, value: &str| -> Result<u32> {
        value.trim().parse().map_err(|_| ScrapeError::numeric(field, value.trim()))
    };
    Ok((Some(side("visitor score", visitor)?), Some(side("home score", home)?)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://x.org/calendar/monday-mens/";

    fn page(rows: &str) -> String {
        format!(
            r#"<html><body><article class="sp_calendar type-sp_calendar sp_league-monday-mens-league sp_season-summer-2024">
              <table class="sp-event-list"><thead><tr><th>Date</th><th>Away</th><th>Result</th><th>Home</th></tr></thead>
              <tbody>{rows}</tbody></table></article></body></html>"#
        )
    }

    fn row(date: &str, away: &str, score: &str, home: &str, href: &str) -> String {
        format!(
            r#"<tr><td class="data-date"><date>{date}</date> May 13</td><td class="data-away">{away}</td>
               <td class="data-time"><a href="{href}">{score}</a></td><td class="data-home">{home}</td></tr>"#
        )
    }

    #[test]
    fn description_from_article_classes() {
        let doc = Html::parse_document(&page(""));
        let schedule = parse_doc(&doc, URL).unwrap();
        let d = &schedule.league_description;
        assert_eq!((d.league_day.as_str(), d.league_category.as_str()), ("monday", "mens"));
        assert_eq!((d.season.as_str(), d.year.as_str()), ("summer", "2024"));
        assert_eq!(d.schedule_data_source, URL);
        assert!(schedule.scheduled_games.is_empty());
    }

    #[test]
    fn rows_keep_page_order() {
        let rows = [
            row("2024-05-20 19:30:00", "Gloves", "7:30 pm", "Bats", "/event/4412/"),
            row("2024-05-13 18:30:00", "Bats &amp;#038; Balls", "7 - 3", " Gloves\n ", "/event/4411/"),
        ]
        .concat();
        let doc = Html::parse_document(&page(&rows));
        let games = parse_doc(&doc, URL).unwrap().scheduled_games;

        assert_eq!(games.len(), 2);
        assert_eq!(games[0].visiting_team_name, "Gloves");
        assert!(!games[0].is_complete());
        assert_eq!(games[0].results_url, "https://x.org/event/4412/");

        assert_eq!(games[1].visiting_team_name, "Bats & Balls");
        assert_eq!(games[1].home_team_name, "Gloves");
        assert_eq!((games[1].visitor_score, games[1].home_score), (Some(7), Some(3)));
        assert_eq!(games[1].date.format("%Y-%m-%d %H:%M").to_string(), "2024-05-13 18:30");
    }

    #[test]
    fn rows_outside_the_article_are_ignored() {
        let sidebar = format!(
            r#"<aside class="widget"><table class="sp-event-list"><tbody>{}</tbody></table></aside>"#,
            row("2024-05-14 18:30:00", "Other", "4 - 2", "League", "/event/9999/")
        );
        let html = page(&row("2024-05-13 18:30:00", "Gloves", "6:30 pm", "Bats", "/event/4412/"))
            .replace("</article>", &join!("</article>", &sidebar));
        let games = parse_doc(&Html::parse_document(&html), URL).unwrap().scheduled_games;
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].visiting_team_name, "Gloves");
    }

    #[test]
    fn missing_league_class_is_parse_error() {
        let doc = Html::parse_document("<html><body><article class='sp_season-summer-2024'></article></body></html>");
        assert!(matches!(parse_doc(&doc, URL), Err(ScrapeError::Parse { .. })));
    }

    #[test]
    fn hyphenated_category() {
        let doc = Html::parse_document(
            "<html><body><article class='sp_league-tuesday-co-ed-league sp_season-fall-2023'></article></body></html>",
        );
        let d = parse_doc(&doc, URL).unwrap().league_description;
        assert_eq!(d.league_category, "co-ed");
        assert_eq!(d.year, "2023");
    }

    #[test]
    fn score_text() {
        assert_eq!(parse_score("").unwrap(), (None, None));
        assert_eq!(parse_score("6:30 pm").unwrap(), (None, None));
        assert_eq!(parse_score("7 - 3").unwrap(), (Some(7), Some(3)));
        assert_eq!(parse_score("0–0").unwrap(), (Some(0), Some(0)));
        assert!(matches!(parse_score("7 - x"), Err(ScrapeError::NumericFormat { .. })));
        assert!(matches!(parse_score("1 - 2 - 3"), Err(ScrapeError::Parse { .. })));
    }

    #[test]
    fn date_formats() {
        assert!(parse_date("2024-05-13 18:30:00").is_some());
        assert!(parse_date("2024-05-13 18:30").is_some());
        assert_eq!(parse_date("2024-05-13").unwrap().format("%H:%M").to_string(), "00:00");
        assert!(parse_date("May 13").is_none());
    }
}
