// src/specs/mod.rs
//! # Page specs
//!
//! One module per page kind of the league site. Each spec encodes *where the
//! data lives in the markup* and *how to lift it into the store model*.
//!
//! ## What lives here
//! - **Pure parsing** (`parse_doc`) over an already-fetched `scraper::Html`,
//!   testable offline against captured fixtures.
//! - A thin **`fetch`** wrapper per page that goes through [`crate::core::Fetch`]
//!   (maintenance check included) and then calls `parse_doc`.
//! - Strict numeric parsing with the documented exceptions (see `game_results`).
//!
//! ## What does **not** live here
//! - Deciding *when* to fetch (`scrape::classify`) or merging into an existing
//!   store (`scrape::update`).
//! - Persistence (`store`) and presentation (`reports`, `gui`).
//!
//! ## Typical call chain
//! ```text
//! scrape::build_store → specs::leagues::locate
//!                     → specs::schedule::fetch ─→ specs::game_results::construct (complete rows)
//! scrape::update_store → specs::game_results::update
//! ```
//!
//! ## Current specs
//! - `leagues` – the "Schedules" submenu of the site navigation.
//! - `schedule` – one league's event list plus the league identity classes.
//! - `game_results` – one event page: details, team summary, box scores.
pub mod game_results;
pub mod leagues;
pub mod schedule;
