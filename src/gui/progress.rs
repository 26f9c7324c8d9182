// src/gui/progress.rs
use std::{ path::PathBuf, sync::{ Arc, Mutex } };

use eframe::egui;

use crate::{ model::LeaguesData, progress::Progress, store };

/// Runs on the worker thread; writes the status line the UI thread draws.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    repaint: egui::Context,
    /// Save the store here after every changed game (update jobs).
    checkpoint: Option<PathBuf>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, repaint: egui::Context) -> Self {
        Self { status, repaint, checkpoint: None, done: 0, total: 0 }
    }

    pub fn with_checkpoint(mut self, path: PathBuf) -> Self {
        self.checkpoint = Some(path);
        self
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.repaint.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, _index: usize) {
        self.done += 1;
        self.set_status(format!("Working… ({}/{})", self.done, self.total));
    }
    fn game_updated(&mut self, data: &LeaguesData) {
        if let Some(path) = &self.checkpoint {
            if let Err(e) = store::save(path, data) {
                loge!("Store: Checkpoint failed: {}", e);
            }
        }
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Done"));
        } else {
            self.set_status(format!("Done ({}/{})", self.done, self.total));
        }
    }
}
