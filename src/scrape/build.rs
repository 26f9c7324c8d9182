// src/scrape/build.rs
use chrono::Local;

use crate::{
    config::options::ScrapeOptions,
    core::Fetch,
    error::{Result, ScrapeError},
    model::LeaguesData,
    progress::Progress,
    specs::{leagues, schedule},
};

/// Build the whole store from scratch.
///
/// Fail-fast: the first league that cannot be read ends the build, and the
/// cause comes back wrapped in [`ScrapeError::Build`] with the league's label.
/// Nothing partial is returned.
pub fn build_store(
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<LeaguesData> {
    let index = leagues::locate(fetcher, &opts.base_url).map_err(|e| {
        loge!("Build: League discovery failed: {}", e);
        ScrapeError::Build { league: s!("(navigation)"), source: Box::new(e) }
    })?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(index.leagues.len());
    }

    let mut league_schedules = Vec::with_capacity(index.leagues.len());
    for (i, link) in index.leagues.iter().enumerate() {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Building {} ({}/{})…", link.label, i + 1, index.leagues.len()));
        }

        let league = schedule::fetch(fetcher, &link.url).map_err(|e| {
            loge!("Build: {} failed: {}", link.label, e);
            ScrapeError::Build { league: link.label.clone(), source: Box::new(e) }
        });
        let league = match league {
            Ok(league) => league,
            Err(e) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.finish();
                }
                return Err(e);
            }
        };

        logf!(
            "Build: {} → {} games ({} complete)",
            link.label,
            league.scheduled_games.len(),
            league.scheduled_games.iter().filter(|g| g.is_complete()).count()
        );
        league_schedules.push(league);

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i);
        }
    }

    let mut store = LeaguesData::new(league_schedules);
    store.build_date = Local::now();
    logf!(
        "Build: Done, {} leagues, {} games (leagues discovered {})",
        store.league_schedules.len(),
        store.game_count(),
        index.discovered_at.format("%Y-%m-%d %H:%M")
    );

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(store)
}
