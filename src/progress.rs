// src/progress.rs
use crate::model::LeaguesData;

/// Lightweight progress reporting used by long-running operations (build/update/export).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (a league built, a game examined).
    fn item_done(&mut self, _index: usize) {}

    /// Checkpoint after a game was changed during an update pass. The store is
    /// consistent at this point, so it is safe to persist it.
    fn game_updated(&mut self, _store: &LeaguesData) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
