// tests/reports.rs
mod common;

use common::*;
use league_scrape::config::options::{ExportFormat, ExportOptions, ReportKind};
use league_scrape::model::LeaguesData;
use league_scrape::reports::build_report;
use league_scrape::scrape::{build_store, update_store};

fn updated() -> LeaguesData {
    let mut data = build_store(&site(), &options(), None).unwrap();
    update_store(&mut data, &site(), &options(), at(2024, 6, 1, 12, 0), None).unwrap();
    data
}

#[test]
fn standings_skip_canceled_games() {
    let ds = build_report(ReportKind::Standings, &updated(), &[0]);
    let rows: Vec<Vec<&str>> = ds.rows.iter().map(|r| r.iter().map(String::as_str).collect()).collect();
    assert_eq!(
        rows,
        vec![
            vec!["Bats & Balls", "1", "1", "0", "0", "7", "3", "+4"],
            vec!["Gloves", "2", "1", "1", "0", "8", "9", "-1"],
            vec!["Sluggers", "1", "0", "1", "0", "2", "5", "-3"],
        ]
    );
}

#[test]
fn schedule_report_shows_status() {
    let ds = build_report(ReportKind::Schedule, &updated(), &[]);
    assert_eq!(ds.rows.len(), 5);
    let status: Vec<&str> = ds.rows.iter().map(|r| r[5].as_str()).collect();
    assert_eq!(status, ["Final", "Final", "Canceled", "Scheduled", "Canceled"]);
    assert_eq!(ds.rows[0][6], "4411");
}

#[test]
fn batting_sums_box_scores() {
    let ds = build_report(ReportKind::Batting, &updated(), &[]);
    let lee = ds.rows.iter().find(|r| r[0] == "Lee").unwrap();
    // Player, Team, G, AB, R, H, 1B, 2B, 3B, HR, BB, SF, AVG
    assert_eq!(lee[1], "Gloves");
    assert_eq!(lee[2], "2");
    assert_eq!(lee[3], "7");
    assert_eq!(lee[5], "4");
    assert_eq!(lee[12], ".571");
}

#[test]
fn export_writes_selected_league() {
    let data = updated();
    let ds = build_report(ReportKind::Standings, &data, &[0]);
    let dir = tempfile::tempdir().unwrap();
    let export = ExportOptions {
        format: ExportFormat::Tsv,
        include_headers: true,
        out_path: Some(dir.path().join("")),
    };

    let path = league_scrape::file::write_export(&export, ReportKind::Standings, "monday", &ds).unwrap();
    assert!(path.ends_with("standings_monday.tsv"));
    let text = std::fs::read_to_string(path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Team\tGP\tW\tL\tT\tRS\tRA\tDiff"));
    assert_eq!(lines.next(), Some("Bats & Balls\t1\t1\t0\t0\t7\t3\t+4"));
}
