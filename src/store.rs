// src/store.rs
//! Whole-document JSON persistence of [`LeaguesData`].
//!
//! Read-modify-write: load the full document, mutate in memory, save the full
//! document. Saves go through a sibling `*.json.tmp` and a rename so a crash
//! mid-write never leaves a truncated store behind.
use std::{fs, io, path::Path};

use crate::error::{Result, ScrapeError};
use crate::model::LeaguesData;

pub fn load(path: &Path) -> Result<LeaguesData> {
    let raw = fs::read_to_string(path).map_err(|source| store_err(path, source))?;
    let data: LeaguesData = serde_json::from_str(&raw)?;
    logd!("Store: Loaded {} ({} leagues, {} games)", path.display(), data.league_schedules.len(), data.game_count());
    Ok(data)
}

/// `None` when there is no store yet; any other read failure is an error.
pub fn load_if_exists(path: &Path) -> Result<Option<LeaguesData>> {
    match fs::metadata(path) {
        Ok(_) => load(path).map(Some),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(store_err(path, source)),
    }
}

pub fn save(path: &Path, data: &LeaguesData) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| store_err(parent, source))?;
        }
    }

    let json = serde_json::to_string_pretty(data)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(|source| store_err(&tmp, source))?;
    fs::rename(&tmp, path).map_err(|source| store_err(path, source))?;

    logd!("Store: Saved {} ({} games)", path.display(), data.game_count());
    Ok(())
}

fn store_err(path: &Path, source: io::Error) -> ScrapeError {
    ScrapeError::Store { path: path.to_path_buf(), source }
}
