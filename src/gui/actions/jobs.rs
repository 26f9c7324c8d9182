// src/gui/actions/jobs.rs
//
// Build and Update run on one worker thread each; the UI keeps drawing and
// picks the finished store up from the channel in `App::poll_job`.

use std::{sync::mpsc, thread};

use chrono::Local;
use eframe::egui;

use crate::{
    core::HttpFetcher,
    gui::{app::{App, JobOutcome}, progress::GuiProgress},
    scrape, store,
};

pub fn build(app: &mut App, ctx: &egui::Context) {
    let opts = app.state.options.clone();
    let mut prog = GuiProgress::new(app.status.clone(), ctx.clone());

    logf!("Build: Begin base={}", opts.scrape.base_url);
    spawn(app, "Building…", move || {
        let fetcher = HttpFetcher::new(&opts.scrape)?;
        let data = scrape::build_store(&fetcher, &opts.scrape, Some(&mut prog))?;
        store::save(&opts.store.path, &data)?;
        let msg = format!("Built {} leagues, {} games", data.league_schedules.len(), data.game_count());
        Ok((data, msg))
    });
}

pub fn update(app: &mut App, ctx: &egui::Context) {
    let Some(mut data) = app.data.clone() else {
        app.status("Nothing to update. Build first");
        return;
    };
    let opts = app.state.options.clone();
    let mut prog = GuiProgress::new(app.status.clone(), ctx.clone())
        .with_checkpoint(opts.store.path.clone());

    logf!("Update: Begin ({} incomplete)", data.incomplete_count());
    spawn(app, "Updating…", move || {
        let fetcher = HttpFetcher::new(&opts.scrape)?;
        let now = Local::now().naive_local();
        let report = scrape::update_store(&mut data, &fetcher, &opts.scrape, now, Some(&mut prog))?;
        if report.updated > 0 {
            store::save(&opts.store.path, &data)?;
        }
        let msg = if report.is_current() {
            s!("Store is current")
        } else {
            format!("Updated {} games ({} failed, {} not due)", report.updated, report.failures.len(), report.not_due)
        };
        Ok((data, msg))
    });
}

fn spawn<F>(app: &mut App, label: &str, job: F)
where
    F: FnOnce() -> crate::Result<(crate::model::LeaguesData, String)> + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<JobOutcome>();
    app.running = true;
    app.job = Some(rx);
    app.status(label);

    thread::spawn(move || {
        let outcome = job().map_err(|e| {
            loge!("Job: {}", e);
            format!("Error: {e}")
        });
        let _ = tx.send(outcome);
    });
}
