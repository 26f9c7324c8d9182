// src/scrape/update.rs
use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use crate::{
    config::options::{FailurePolicy, ScrapeOptions},
    core::Fetch,
    error::Result,
    model::LeaguesData,
    progress::Progress,
    specs::game_results,
};

use super::classify::is_recorded_at;

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateReport {
    /// Games that changed (recorded or canceled). 0 → the store was current.
    pub updated: usize,
    /// Incomplete games whose results are not due yet.
    pub not_due: usize,
    /// Only filled under [`FailurePolicy::Continue`].
    pub failures: Vec<UpdateFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateFailure {
    pub game: String,
    pub error: String,
}

impl UpdateReport {
    pub fn is_current(&self) -> bool {
        self.updated == 0 && self.failures.is_empty()
    }
}

/// Re-examine every incomplete game and merge in results that are due.
///
/// - not yet due → left alone
/// - two teams on the page → scores and box score recorded
/// - any other team count → canceled (0–0, no teams)
///
/// `progress.game_updated` fires after each changed game so the caller can
/// checkpoint. Under [`FailurePolicy::Abort`] the first failure is returned and
/// games changed before it stay changed in `store`.
pub fn update_store(
    store: &mut LeaguesData,
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    now: NaiveDateTime,
    mut progress: Option<&mut dyn Progress>,
) -> Result<UpdateReport> {
    let mut report = UpdateReport::default();
    let pending = store.incomplete_count();
    logf!("Update: {} incomplete of {} games", pending, store.game_count());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(pending);
    }

    let mut examined = 0usize;
    for li in 0..store.league_schedules.len() {
        for gi in 0..store.league_schedules[li].scheduled_games.len() {
            let game = &mut store.league_schedules[li].scheduled_games[gi];
            if game.is_complete() {
                continue;
            }
            examined += 1;

            if !is_recorded_at(game, Some(opts.check_hours), now) {
                report.not_due += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(examined);
                }
                continue;
            }

            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Updating {}…", game.label()));
            }

            match game_results::update(fetcher, game) {
                Ok(result) => {
                    let teams = result.teams.len();
                    if game.settle(result) {
                        logf!("Update: {} recorded {:?}", game.label(), game.outcome());
                    } else {
                        logf!("Update: {} canceled ({} teams on page)", game.label(), teams);
                    }
                    report.updated += 1;
                }
                Err(e) => {
                    loge!("Update: {} failed: {}", game.label(), e);
                    match opts.failure_policy {
                        FailurePolicy::Abort => {
                            if let Some(p) = progress.as_deref_mut() {
                                p.finish();
                            }
                            return Err(e);
                        }
                        FailurePolicy::Continue => {
                            report.failures.push(UpdateFailure { game: game.label(), error: e.to_string() });
                            if let Some(p) = progress.as_deref_mut() {
                                p.item_done(examined);
                            }
                            continue;
                        }
                    }
                }
            }

            if let Some(p) = progress.as_deref_mut() {
                p.item_done(examined);
                p.game_updated(store);
            }
        }
    }

    if report.updated > 0 {
        store.build_date = Local::now();
    }
    crate::log::attach("INFO", "Update: Pass finished", &report);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(report)
}
