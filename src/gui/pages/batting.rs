// src/gui/pages/batting.rs
use crate::config::options::ReportKind;

use super::Page;

pub struct BattingPage;
pub static PAGE: BattingPage = BattingPage;

impl Page for BattingPage {
    fn kind(&self) -> ReportKind { ReportKind::Batting }
    fn numeric_columns(&self) -> &'static [usize] { &[2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12] }
}
