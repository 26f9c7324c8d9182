// tests/update_store.rs
mod common;

use common::*;
use league_scrape::config::options::FailurePolicy;
use league_scrape::model::{GameOutcome, LeaguesData};
use league_scrape::progress::Progress;
use league_scrape::scrape::{build_store, update_store};
use league_scrape::ScrapeError;

fn built() -> LeaguesData {
    build_store(&site(), &options(), None).unwrap()
}

/// Keeps a copy of the store at every checkpoint.
#[derive(Default)]
struct Recorder {
    total: usize,
    checkpoints: Vec<LeaguesData>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn game_updated(&mut self, store: &LeaguesData) {
        self.checkpoints.push(store.clone());
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn due_games_are_recorded_or_canceled() {
    let mut data = built();
    let report = update_store(&mut data, &site(), &options(), at(2024, 6, 1, 12, 0), None).unwrap();
    assert_eq!(report.updated, 2);
    assert_eq!(report.not_due, 1);
    assert!(report.failures.is_empty());

    let games = &data.league_schedules[0].scheduled_games;
    assert_eq!(games[1].outcome(), GameOutcome::Recorded { visitor: 5, home: 2 });
    assert_eq!(games[1].game_results.teams[1].players[0].name, "Cruz");

    // Empty results table: canceled, but the page details are kept.
    assert_eq!(games[2].outcome(), GameOutcome::Canceled);
    assert!(games[2].game_results.teams.is_empty());
    let info = games[2].game_results.game_information.as_ref().unwrap();
    assert_eq!(info.game_id, "4413");

    assert_eq!(games[3].outcome(), GameOutcome::Scheduled);
}

#[test]
fn one_team_results_page_cancels() {
    let sluggers_row = r#"<tr class="sp-row "><td class="data-name">Sluggers</td><td class="data-r">2</td><td class="data-h">4</td><td class="data-outcome">Loss</td></tr>"#;
    let mut fetcher = site();
    fetcher.insert(&event(4412), fixture("event_4412.html").replace(sluggers_row, ""));

    let mut data = built();
    let report = update_store(&mut data, &fetcher, &options(), at(2024, 6, 1, 12, 0), None).unwrap();
    assert_eq!(report.updated, 2);

    let game = &data.league_schedules[0].scheduled_games[1];
    assert_eq!(game.outcome(), GameOutcome::Canceled);
    assert!(game.game_results.teams.is_empty());
    assert_eq!(game.game_results.game_information.as_ref().unwrap().game_id, "4412");
}

#[test]
fn second_pass_changes_nothing() {
    let mut data = built();
    let now = at(2024, 6, 1, 12, 0);
    update_store(&mut data, &site(), &options(), now, None).unwrap();
    let after_first = data.clone();

    let report = update_store(&mut data, &site(), &options(), now, None).unwrap();
    assert_eq!(report.updated, 0);
    assert!(report.is_current());
    assert_eq!(data, after_first);
}

#[test]
fn nothing_is_due_before_check_hour() {
    let mut data = built();
    let before = data.clone();

    let report = update_store(&mut data, &site(), &options(), at(2024, 5, 13, 16, 29), None).unwrap();
    assert_eq!((report.updated, report.not_due), (0, 3));
    assert_eq!(data, before);

    let report = update_store(&mut data, &site(), &options(), at(2024, 5, 13, 16, 30), None).unwrap();
    assert_eq!((report.updated, report.not_due), (2, 1));
}

#[test]
fn later_check_hour_defers_results() {
    let mut data = built();
    let opts = league_scrape::config::options::ScrapeOptions { check_hours: 23, ..options() };
    let report = update_store(&mut data, &site(), &opts, at(2024, 5, 13, 22, 0), None).unwrap();
    assert_eq!(report.updated, 0);
    assert_eq!(report.not_due, 3);
}

#[test]
fn every_change_is_checkpointed() {
    let mut data = built();
    let mut progress = Recorder::default();
    update_store(&mut data, &site(), &options(), at(2024, 6, 1, 12, 0), Some(&mut progress)).unwrap();

    assert_eq!(progress.total, 3);
    assert!(progress.finished);
    assert_eq!(progress.checkpoints.len(), 2);

    let first = &progress.checkpoints[0].league_schedules[0].scheduled_games;
    assert!(first[1].is_complete());
    assert!(!first[2].is_complete());
    assert_eq!(progress.checkpoints[1].incomplete_count(), 1);
}

#[test]
fn abort_keeps_earlier_changes() {
    let mut data = built();
    let mut fetcher = site();
    fetcher.insert(&event(4413), fixture("maintenance.html"));
    let mut progress = Recorder::default();

    let err = update_store(&mut data, &fetcher, &options(), at(2024, 6, 1, 12, 0), Some(&mut progress)).unwrap_err();
    assert!(matches!(err, ScrapeError::Maintenance { .. }));
    assert!(progress.finished);
    assert_eq!(progress.checkpoints.len(), 1);

    let games = &data.league_schedules[0].scheduled_games;
    assert!(games[1].is_complete());
    assert!(!games[2].is_complete());
    assert!(games[2].game_results.game_information.is_none());
}

#[test]
fn continue_collects_failures() {
    let mut data = built();
    let fetcher = {
        let mut f = site();
        let page = fixture("event_4412.html").replace(r#"<td class="data-r">5</td>"#, r#"<td class="data-r">five</td>"#);
        f.insert(&event(4412), page);
        f
    };
    let opts = league_scrape::config::options::ScrapeOptions { failure_policy: FailurePolicy::Continue, ..options() };

    let report = update_store(&mut data, &fetcher, &opts, at(2024, 6, 1, 12, 0), None).unwrap();
    assert_eq!(report.updated, 1);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].game.contains("Gloves @ Sluggers"));
    assert!(report.failures[0].error.contains("five"));
    assert!(!report.is_current());

    let games = &data.league_schedules[0].scheduled_games;
    assert!(!games[1].is_complete());
    assert_eq!(games[2].outcome(), GameOutcome::Canceled);
}
