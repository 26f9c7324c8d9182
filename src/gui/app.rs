// src/gui/app.rs
use std::{
    error::Error,
    path::Path,
    sync::{ mpsc, Arc, Mutex },
    time::Duration,
};

use eframe::egui;

use crate::{
    config::{
        options::ReportKind,
        state::AppState },
    model::LeaguesData,
    reports::{ self, DataSet },
    store,
};

use super::{
    pages::Page,
    router,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let state = AppState::default();
    if let Err(e) = crate::log::init(&state.options.log) {
        eprintln!("Warning: session log disabled ({e})");
    }
    let res = eframe::run_native(
        "League Scrape",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    );
    crate::log::finish();
    res?;
    Ok(())
}

/// What a worker thread hands back: the new store and a status line, or an error text.
pub type JobOutcome = Result<(LeaguesData, String), String>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // the store, once built or loaded
    pub data: Option<LeaguesData>,
    pub last_clicked: Option<usize>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,

    // display view of the CURRENT page
    pub view: DataSet,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub job: Option<mpsc::Receiver<JobOutcome>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let (data, status) = match store::load_if_exists(&state.options.store.path) {
            Ok(Some(d)) => {
                let msg = format!("Loaded store built {}", d.build_date.format("%Y-%m-%d %H:%M"));
                (Some(d), msg)
            }
            Ok(None) => (None, s!("No store yet. Build to fetch all leagues")),
            Err(e) => {
                loge!("Store: Load failed: {}", e);
                (None, format!("Store unreadable: {e}"))
            }
        };

        let mut app = Self {
            state,
            data,
            last_clicked: None,
            out_path_text: String::new(),
            view: DataSet::default(),
            status: Arc::new(Mutex::new(status)),
            running: false,
            job: None,
        };
        app.select_all_leagues();
        app.refresh_out_path_text();
        app.rebuild_view();

        logf!(
            "Init: leagues={}, games={}",
            app.league_count(),
            app.data.as_ref().map(|d| d.game_count()).unwrap_or(0)
        );
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.state.gui.current_page_index.min(pages.len() - 1)]
    }

    #[inline]
    pub fn current_kind(&self) -> ReportKind { self.current_page().kind() }

    #[inline]
    pub fn league_count(&self) -> usize {
        self.data.as_ref().map(|d| d.league_schedules.len()).unwrap_or(0)
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn select_all_leagues(&mut self) {
        self.state.gui.selected_leagues = (0..self.league_count()).collect();
    }

    pub fn refresh_out_path_text(&mut self) {
        self.out_path_text = self
            .state
            .options
            .export
            .out_path_for(self.current_kind(), "all")
            .to_string_lossy()
            .into_owned();
    }

    /// Full report for the current page and league selection.
    pub fn current_report(&self) -> DataSet {
        let kind = self.current_kind();
        match &self.data {
            Some(data) if !self.state.gui.selected_leagues.is_empty() => {
                reports::build_report(kind, data, &self.state.gui.selected_leagues)
            }
            // Headers only, so the table still shows its columns.
            _ => reports::build_report(kind, &LeaguesData::new(Vec::new()), &[]),
        }
    }

    pub fn rebuild_view(&mut self) {
        let report = self.current_report();
        self.view = self.current_page().view_for_display(&self.state, report);
    }

    /// Pick up a finished worker job, if any.
    fn poll_job(&mut self) {
        let Some(rx) = &self.job else { return };
        match rx.try_recv() {
            Ok(Ok((data, msg))) => {
                let keep_selection = self.league_count() == data.league_schedules.len();
                self.data = Some(data);
                if !keep_selection {
                    self.select_all_leagues();
                }
                self.rebuild_view();
                self.status(msg);
                self.running = false;
                self.job = None;
            }
            Ok(Err(msg)) => {
                // An aborted update may have checkpointed games before failing.
                self.data = resync(&self.state.options.store.path, self.data.take());
                self.rebuild_view();
                self.status(msg);
                self.running = false;
                self.job = None;
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                loge!("Job: Worker exited without a result");
                self.status("Job aborted");
                self.running = false;
                self.job = None;
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_job();
        if self.running {
            ctx.request_repaint_after(Duration::from_millis(200));
        }

        egui::SidePanel::left("leagues")
            .resizable(false)
            .show(ctx, |ui| {
                super::components::league_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::tabs::draw(ui, self);

            ui.separator();

            super::components::action_buttons::draw(ui, self);

            ui.separator();

            super::components::data_table::draw(ui, self);
        });
    }
}

/// The store on disk when it can be read, otherwise what the UI already holds.
fn resync(path: &Path, current: Option<LeaguesData>) -> Option<LeaguesData> {
    match store::load_if_exists(path) {
        Ok(Some(saved)) => Some(saved),
        Ok(None) => current,
        Err(e) => {
            loge!("Store: Reload failed: {}", e);
            current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resync_prefers_checkpointed_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leagues.json");
        let held = LeaguesData::new(Vec::new());

        assert_eq!(resync(&path, Some(held.clone())), Some(held.clone()));

        let mut saved = held.clone();
        saved.build_date = saved.build_date + chrono::TimeDelta::minutes(5);
        store::save(&path, &saved).unwrap();
        assert_eq!(resync(&path, Some(held)), Some(saved));
    }
}
