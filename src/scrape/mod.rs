// src/scrape/mod.rs
//! Orchestration over the page specs: when to fetch, and how results merge
//! into the store.
pub mod classify;
mod build;
mod update;

pub use build::build_store;
pub use classify::{is_recorded, is_recorded_at};
pub use update::{UpdateFailure, UpdateReport, update_store};
