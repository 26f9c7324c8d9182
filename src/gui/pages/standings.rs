// src/gui/pages/standings.rs
use crate::config::options::ReportKind;

use super::Page;

pub struct StandingsPage;
pub static PAGE: StandingsPage = StandingsPage;

impl Page for StandingsPage {
    fn kind(&self) -> ReportKind { ReportKind::Standings }
    fn numeric_columns(&self) -> &'static [usize] { &[1, 2, 3, 4, 5, 6, 7] }
}
