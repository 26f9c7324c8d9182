// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Indexes into `LeaguesData::league_schedules` selected in the left panel
    pub selected_leagues: Vec<usize>,

    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Schedule page -> show/hide Game id column
    pub schedule_show_game_id: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_leagues: Vec::new(),
            window_w: 1100,
            window_h: 700,
            current_page_index: 0,
            schedule_show_game_id: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
