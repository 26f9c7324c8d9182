// src/core/net.rs
//! Page fetching. Everything here is blocking; one pooled client is reused
//! for every request of a build or update pass.

use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use scraper::Html;

use crate::config::consts::MAINTENANCE_CLASS;
use crate::config::options::ScrapeOptions;
use crate::error::{Result, ScrapeError};

use super::html::sel;

/// Source of raw page bodies. Extractors only see this seam, so tests and
/// benches can feed captured pages without a network.
pub trait Fetch {
    fn get_text(&self, url: &str) -> Result<String>;
}

/// Live site over HTTP(S).
pub struct HttpFetcher {
    client: Client,
    pause: Duration,
}

impl HttpFetcher {
    pub fn new(opts: &ScrapeOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(Duration::from_secs(opts.timeout_secs))
            .build()
            .map_err(ScrapeError::Client)?;
        Ok(Self { client, pause: Duration::from_millis(opts.request_pause_ms) })
    }
}

impl Fetch for HttpFetcher {
    fn get_text(&self, url: &str) -> Result<String> {
        if !self.pause.is_zero() {
            thread::sleep(self.pause);
        }
        let t = std::time::Instant::now();
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| ScrapeError::Fetch { url: s!(url), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url: s!(url), status: status.as_u16() });
        }
        let body = resp
            .text()
            .map_err(|source| ScrapeError::Fetch { url: s!(url), source })?;
        logd!("Net: GET {} ({} bytes) in {:?}", url, body.len(), t.elapsed());
        Ok(body)
    }
}

/// Captured pages keyed by URL. Unknown URLs answer 404.
#[derive(Default, Clone)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, body: impl Into<String>) -> Self {
        self.insert(url, body);
        self
    }

    pub fn insert(&mut self, url: &str, body: impl Into<String>) {
        self.pages.insert(s!(url), body.into());
    }
}

impl Fetch for StaticFetcher {
    fn get_text(&self, url: &str) -> Result<String> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::Status { url: s!(url), status: 404 })
    }
}

/// Fetch and parse one page, refusing to hand a maintenance page to an extractor.
pub fn fetch_document(fetcher: &dyn Fetch, url: &str) -> Result<Html> {
    let body = fetcher.get_text(url)?;
    let doc = Html::parse_document(&body);
    check_maintenance(&doc, url)?;
    Ok(doc)
}

pub fn check_maintenance(doc: &Html, url: &str) -> Result<()> {
    let in_maintenance = doc
        .select(&sel("body"))
        .next()
        .is_some_and(|body| body.value().classes().any(|c| c == MAINTENANCE_CLASS));
    if in_maintenance {
        logf!("Net: {} is in maintenance mode", url);
        return Err(ScrapeError::Maintenance { url: s!(url) });
    }
    Ok(())
}
