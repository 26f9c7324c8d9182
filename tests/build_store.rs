// tests/build_store.rs
mod common;

use common::*;
use league_scrape::model::GameOutcome;
use league_scrape::scrape::build_store;
use league_scrape::specs::{leagues, schedule};
use league_scrape::ScrapeError;

#[test]
fn leagues_in_menu_order() {
    let index = leagues::locate(&site(), BASE).unwrap();
    let labels: Vec<&str> = index.leagues.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, ["Monday Mens", "Tuesday Co Ed"]);
    assert_eq!(index.leagues[0].url, MONDAY);
}

#[test]
fn schedule_constructs_complete_games_only() {
    let league = schedule::fetch(&site(), MONDAY).unwrap();
    let d = &league.league_description;
    assert_eq!((d.league_day.as_str(), d.league_category.as_str()), ("monday", "mens"));
    assert_eq!((d.season.as_str(), d.year.as_str()), ("summer", "2024"));
    assert_eq!(league.scheduled_games.len(), 4);

    let played = &league.scheduled_games[0];
    assert_eq!(played.visiting_team_name, "Bats & Balls");
    assert_eq!(played.outcome(), GameOutcome::Recorded { visitor: 7, home: 3 });
    assert_eq!(played.results_url, event(4411));

    let box_score = &played.game_results;
    let info = box_score.game_information.as_ref().unwrap();
    assert_eq!(info.game_id, "4411");
    assert_eq!(info.title, "Bats & Balls vs Gloves");
    assert_eq!(info.date, played.date);
    assert_eq!(box_score.teams.len(), 2);
    assert_eq!(box_score.teams[0].players.len(), 2);
    assert_eq!(box_score.teams[1].players[0].name, "Lee");
    assert_eq!(box_score.teams[1].runs_against, 7);

    // Walks left as "-" read as zero; the tfoot total row is not a player.
    let jones = &box_score.teams[0].players[0];
    assert_eq!((jones.name.as_str(), jones.bases_on_balls, jones.home_runs), ("Jones", 0, 1));

    for game in &league.scheduled_games[1..] {
        assert!(!game.is_complete());
        assert!(game.game_results.game_information.is_none());
        assert!(game.game_results.teams.is_empty());
    }
}

#[test]
fn one_team_results_page_cancels_listed_score() {
    let gloves_row = r#"<tr class="sp-row "><td class="data-name">Gloves</td><td class="data-r">3</td><td class="data-h">6</td><td class="data-outcome">Loss</td></tr>"#;
    let mut fetcher = site();
    fetcher.insert(&event(4411), fixture("event_4411.html").replace(gloves_row, ""));

    let league = schedule::fetch(&fetcher, MONDAY).unwrap();
    let game = &league.scheduled_games[0];
    assert_eq!(game.outcome(), GameOutcome::Canceled);
    assert!(game.game_results.teams.is_empty());
    assert_eq!(game.game_results.game_information.as_ref().unwrap().game_id, "4411");
}

#[test]
fn build_covers_every_league() {
    let data = build_store(&site(), &options(), None).unwrap();
    assert_eq!(data.league_schedules.len(), 2);
    assert_eq!(data.game_count(), 5);
    assert_eq!(data.incomplete_count(), 3);

    // A 0-0 score on the schedule is taken as-is: the results page has no
    // team rows, so nothing is attached.
    let rainout = &data.league_schedules[1].scheduled_games[0];
    assert_eq!(rainout.outcome(), GameOutcome::Canceled);
    assert!(rainout.game_results.game_information.is_some());
    assert!(rainout.game_results.teams.is_empty());
}

#[test]
fn missing_schedule_fails_the_build() {
    let mut fetcher = site();
    fetcher.insert(TUESDAY, fixture("maintenance.html"));

    let err = build_store(&fetcher, &options(), None).unwrap_err();
    match &err {
        ScrapeError::Build { league, source } => {
            assert_eq!(league, "Tuesday Co Ed");
            assert!(matches!(**source, ScrapeError::Maintenance { .. }));
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(err.is_retryable());
}

#[test]
fn broken_box_score_fails_its_league() {
    let mut fetcher = site();
    let page = fixture("event_4411.html").replace(r#"<td data-label="AB">4</td>"#, r#"<td data-label="AB">four</td>"#);
    fetcher.insert(&event(4411), page);

    let err = build_store(&fetcher, &options(), None).unwrap_err();
    let ScrapeError::Build { league, source } = err else { panic!("expected Build") };
    assert_eq!(league, "Monday Mens");
    assert!(matches!(*source, ScrapeError::NumericFormat { ref field, .. } if field == "AB"));
}

#[test]
fn navigation_failure_is_wrapped() {
    let fetcher = site().with_page(BASE, "<html><body><nav><ul><li><a href='/'>Home</a></li></ul></nav></body></html>");
    let err = build_store(&fetcher, &options(), None).unwrap_err();
    assert!(matches!(err, ScrapeError::Build { ref source, .. } if matches!(**source, ScrapeError::Parse { .. })));
    assert!(!err.is_retryable());
}
