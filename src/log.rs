// src/log.rs
//! Session log: one JSON object per line, grouped by a per-run session id,
//! plus a small index file listing sessions for display.
//!
//! Inert until a front-end calls [`init`]; library code can log freely and
//! tests write nothing.
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::config::options::LogOptions;

static SESSION: Mutex<Option<Session>> = Mutex::new(None);

struct Session {
    id: Uuid,
    started: DateTime<Local>,
    file: PathBuf,
    index: PathBuf,
    entries: usize,
    echo: bool,
}

#[derive(Serialize)]
struct Record<'a> {
    session: Uuid,
    timestamp: DateTime<Local>,
    level: &'a str,
    category: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SessionIndex {
    pub sessions: Vec<SessionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEntry {
    pub id: Uuid,
    pub started: DateTime<Local>,
    pub finished: Option<DateTime<Local>>,
    pub entries: usize,
}

/// Open a new session. Returns its id.
pub fn init(opts: &LogOptions) -> std::io::Result<Uuid> {
    fs::create_dir_all(&opts.dir)?;
    let session = Session {
        id: Uuid::new_v4(),
        started: Local::now(),
        file: opts.file(),
        index: opts.index_file(),
        entries: 0,
        echo: opts.echo,
    };
    let id = session.id;
    upsert_index(&session, None)?;
    if let Ok(mut guard) = SESSION.lock() {
        *guard = Some(session);
    }
    Ok(id)
}

/// Close the current session and stamp the index.
pub fn finish() {
    if let Ok(mut guard) = SESSION.lock() {
        if let Some(session) = guard.take() {
            let _ = upsert_index(&session, Some(Local::now()));
        }
    }
}

/// Read the index (for display in front-ends).
pub fn read_index(opts: &LogOptions) -> SessionIndex {
    fs::read_to_string(opts.index_file())
        .ok()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

fn upsert_index(session: &Session, finished: Option<DateTime<Local>>) -> std::io::Result<()> {
    let mut index: SessionIndex = fs::read_to_string(&session.index)
        .ok()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default();

    let entry = SessionEntry {
        id: session.id,
        started: session.started,
        finished,
        entries: session.entries,
    };
    match index.sessions.iter_mut().find(|e| e.id == session.id) {
        Some(existing) => *existing = entry,
        None => index.sessions.push(entry),
    }

    let json = serde_json::to_string_pretty(&index).map_err(std::io::Error::other)?;
    fs::write(&session.index, json)
}

/// "Scrape: Begin …" → ("Scrape", "Begin …"); anything else is "General".
fn split_category(msg: &str) -> (&str, &str) {
    if let Some((head, rest)) = msg.split_once(": ") {
        if !head.is_empty() && head.len() <= 16 && head.chars().all(|c| c.is_ascii_alphabetic()) {
            return (head, rest);
        }
    }
    ("General", msg)
}

/// Internal logging function
pub fn write_log(level: &str, msg: &str, data: Option<Value>) {
    let Ok(mut guard) = SESSION.lock() else { return };
    let Some(session) = guard.as_mut() else { return };

    let (category, message) = split_category(msg);
    let record = Record {
        session: session.id,
        timestamp: Local::now(),
        level,
        category,
        message,
        data,
    };
    let Ok(line) = serde_json::to_string(&record) else { return };

    if session.echo {
        eprintln!("[{level}] {msg}");
    }
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&session.file) {
        if writeln!(file, "{line}").is_ok() {
            session.entries += 1;
        }
    }
}

/// Log a message with a structured payload attached.
pub fn attach<T: Serialize>(level: &str, msg: &str, payload: &T) {
    write_log(level, msg, serde_json::to_value(payload).ok());
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log("INFO", &format!($($arg)*), None)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log("DEBUG", &format!($($arg)*), None)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log("ERROR", &format!($($arg)*), None)
    };
}
