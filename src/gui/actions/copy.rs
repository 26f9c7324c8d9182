// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv::to_export_string, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let ds = super::export_view(app);
    if ds.rows.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    let txt = to_export_string(&ds.headers, &ds.rows, export.include_headers, export.format.delim());
    logf!("Copy: page={:?}, rows={}", app.current_kind(), ds.rows.len());

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
