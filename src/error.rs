// src/error.rs
//! Error taxonomy for fetching, extraction and persistence.
//!
//! Callers that want to retry later (maintenance window, flaky network) can
//! ask [`ScrapeError::is_retryable`]; everything else is a data or markup
//! anomaly that a retry will not fix.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("site is under maintenance ({url})")]
    Maintenance { url: String },

    #[error("{what} not found in {url}")]
    Parse { what: String, url: String },

    #[error("{field}: '{value}' is not a whole number")]
    NumericFormat { field: String, value: String },

    #[error("performance heading '{heading}' matches neither '{visitor}' nor '{home}'")]
    NameMismatch {
        heading: String,
        visitor: String,
        home: String,
    },

    #[error("building league '{league}' failed: {source}")]
    Build {
        league: String,
        #[source]
        source: Box<ScrapeError>,
    },

    #[error("store {}: {source}", path.display())]
    Store {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    pub fn parse(what: impl Into<String>, url: impl Into<String>) -> Self {
        ScrapeError::Parse { what: what.into(), url: url.into() }
    }

    pub fn numeric(field: impl Into<String>, value: impl Into<String>) -> Self {
        ScrapeError::NumericFormat { field: field.into(), value: value.into() }
    }

    /// Network trouble or a maintenance window: worth another try on the next run.
    pub fn is_retryable(&self) -> bool {
        match self {
            ScrapeError::Fetch { .. } | ScrapeError::Status { .. } | ScrapeError::Maintenance { .. } => true,
            ScrapeError::Build { source, .. } => source.is_retryable(),
            _ => false,
        }
    }
}
