// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod specs;

pub mod csv;
pub mod file;
pub mod gui;
pub mod progress;
pub mod reports;
pub mod scrape;
pub mod store;

pub use error::{Result, ScrapeError};
