// src/reports/mod.rs
//! Tabular views over the store, resolved by [`ReportKind`] from a static table.
//!
//! Every report is a plain function `(&LeaguesData, selection) -> DataSet`,
//! where `selection` holds indexes into `league_schedules` (empty = all).
mod batting;
mod schedule;
mod standings;

use crate::config::options::ReportKind;
use crate::model::{LeagueSchedule, LeaguesData};

/// Headers + rows, ready for a table view or CSV/TSV export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

pub type BuildFn = fn(&LeaguesData, &[usize]) -> DataSet;

pub struct Report {
    pub kind: ReportKind,
    pub title: &'static str,
    pub build: BuildFn,
}

pub static REPORTS: &[Report] = &[
    Report { kind: ReportKind::Schedule, title: "Schedule", build: schedule::build },
    Report { kind: ReportKind::Standings, title: "Standings", build: standings::build },
    Report { kind: ReportKind::Batting, title: "Batting", build: batting::build },
];

pub fn report_for(kind: ReportKind) -> &'static Report {
    // Every ReportKind has an entry; covered by `registry_is_complete`.
    REPORTS.iter().find(|r| r.kind == kind).unwrap_or(&REPORTS[0])
}

pub fn build_report(kind: ReportKind, data: &LeaguesData, selection: &[usize]) -> DataSet {
    (report_for(kind).build)(data, selection)
}

/// Leagues in `selection` order; unknown indexes are skipped.
pub(crate) fn selected<'a>(data: &'a LeaguesData, selection: &[usize]) -> Vec<&'a LeagueSchedule> {
    if selection.is_empty() {
        data.league_schedules.iter().collect()
    } else {
        selection.iter().filter_map(|&i| data.league_schedules.get(i)).collect()
    }
}

pub(crate) fn headers(names: &[&str]) -> Option<Vec<String>> {
    Some(names.iter().map(|h| s!(*h)).collect())
}
