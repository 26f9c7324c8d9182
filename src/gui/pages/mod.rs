// src/gui/pages/mod.rs
use eframe::egui;

use crate::{
    config::{ options::ReportKind, state::AppState },
    reports::{ self, DataSet },
};

pub mod batting;
pub mod schedule;
pub mod standings;

/// One tab of the main window. Each page shows one report.
pub trait Page: Send + Sync + 'static {
    fn kind(&self) -> ReportKind;

    fn title(&self) -> &'static str {
        reports::report_for(self.kind()).title
    }

    /// Draw page-specific controls. Returns true when the view must be rebuilt.
    fn draw_controls(&self, _ui: &mut egui::Ui, _state: &mut AppState) -> bool { false }

    /// Column indexes drawn centered (counts, scores).
    fn numeric_columns(&self) -> &'static [usize] { &[] }

    /// Optional: adapt the report for on-screen display (e.g. hide columns).
    fn view_for_display(&self, _state: &AppState, data: DataSet) -> DataSet {
        data
    }

    /// Export/copy always get the full report unless a page says otherwise.
    fn view_for_export(&self, _state: &AppState, data: DataSet) -> DataSet {
        data
    }
}
