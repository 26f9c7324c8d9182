// src/gui/pages/schedule.rs
use eframe::egui;

use crate::{
    config::{ options::ReportKind, state::AppState },
    reports::DataSet,
};

use super::Page;

const GAME_ID_COL: usize = 6;

pub struct SchedulePage;
pub static PAGE: SchedulePage = SchedulePage;

impl Page for SchedulePage {
    fn kind(&self) -> ReportKind { ReportKind::Schedule }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        ui.checkbox(&mut state.gui.schedule_show_game_id, "Show game id").changed()
    }

    fn numeric_columns(&self) -> &'static [usize] { &[2, 3] }

    fn view_for_display(&self, state: &AppState, mut data: DataSet) -> DataSet {
        if !state.gui.schedule_show_game_id {
            if let Some(h) = data.headers.as_mut() {
                if h.len() > GAME_ID_COL { h.remove(GAME_ID_COL); }
            }
            for r in data.rows.iter_mut() {
                if r.len() > GAME_ID_COL { r.remove(GAME_ID_COL); }
            }
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_game_id_for_display_only() {
        let mut state = AppState::default();
        state.gui.schedule_show_game_id = false;
        let ds = DataSet {
            headers: Some((0..7).map(|i| i.to_string()).collect()),
            rows: vec![(0..7).map(|i| i.to_string()).collect()],
        };
        let shown = PAGE.view_for_display(&state, ds.clone());
        assert_eq!(shown.headers.unwrap().len(), 6);
        assert_eq!(shown.rows[0].len(), 6);
        assert_eq!(PAGE.view_for_export(&state, ds.clone()), ds);
    }
}
