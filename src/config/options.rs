// src/config/options.rs
//! Explicit configuration values. Front-ends build one `AppOptions` and pass
//! the relevant part into each component; nothing reads settings globally.

use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub store: StoreOptions,
    pub log: LogOptions,
    pub export: ExportOptions,
}

/// What the update pass does when one game fails to extract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failure and return it.
    #[default]
    Abort,
    /// Record the failure in the report and move on to the next game.
    Continue,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    pub check_hours: u32,
    pub failure_policy: FailurePolicy,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub request_pause_ms: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            check_hours: CHECK_HOURS,
            failure_policy: FailurePolicy::Abort,
            user_agent: s!(USER_AGENT),
            timeout_secs: TIMEOUT_SECS,
            request_pause_ms: REQUEST_PAUSE_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub path: PathBuf,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self { path: PathBuf::from(STORE_DIR).join(STORE_FILE) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogOptions {
    pub dir: PathBuf,
    /// Mirror records to stderr (CLI --verbose).
    pub echo: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self { dir: PathBuf::from(STORE_DIR).join(LOG_SUBDIR), echo: false }
    }
}

impl LogOptions {
    pub fn file(&self) -> PathBuf { self.dir.join(LOG_FILE) }
    pub fn index_file(&self) -> PathBuf { self.dir.join(LOG_INDEX_FILE) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Schedule,
    Standings,
    Batting,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [ReportKind::Schedule, ReportKind::Standings, ReportKind::Batting];

    pub fn slug(&self) -> &'static str {
        match self {
            ReportKind::Schedule => "schedule",
            ReportKind::Standings => "standings",
            ReportKind::Batting => "batting",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug().eq_ignore_ascii_case(s.trim()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    /// Explicit file, or a directory hint ending in a separator. `None` → `out/`.
    pub out_path: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { format: ExportFormat::Csv, include_headers: true, out_path: None }
    }
}

impl ExportOptions {
    /// Resolve where a report lands. A user path with its own extension wins;
    /// otherwise `<dir>/<stem>.<ext>` with the format's extension.
    pub fn out_path_for(&self, kind: ReportKind, stem: &str) -> PathBuf {
        let file_name = join!(kind.slug(), "_", stem, ".", self.format.ext());
        match &self.out_path {
            None => PathBuf::from(DEFAULT_OUT_DIR).join(file_name),
            Some(p) if looks_like_dir(p) => p.join(file_name),
            Some(p) if p.extension().is_some() => p.clone(),
            Some(p) => p.with_extension(self.format.ext()),
        }
    }
}

fn looks_like_dir(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\') || p.is_dir()
}
