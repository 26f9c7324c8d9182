// src/gui/actions/export.rs
use crate::{core::sanitize::sanitize_filename, file, gui::app::App};

pub fn export(app: &mut App) {
    let ds = super::export_view(app);
    if ds.rows.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let kind = app.current_kind();
    let stem = selection_stem(app);
    logf!("Export: Begin page={:?}, rows={}", kind, ds.rows.len());

    let msg = match file::write_export(&app.state.options.export, kind, &stem, &ds) {
        Ok(path) => format!("Exported {} rows → {}", ds.rows.len(), path.display()),
        Err(e) => {
            loge!("Export: Failed: {}", e);
            format!("Export failed: {e}")
        }
    };
    app.status(msg);
}

/// "all" for a full selection, else the selected league labels.
fn selection_stem(app: &App) -> String {
    let sel = &app.state.gui.selected_leagues;
    let Some(data) = &app.data else { return s!("all") };
    if sel.len() == data.league_schedules.len() {
        return s!("all");
    }
    let labels: Vec<String> = sel
        .iter()
        .filter_map(|&i| data.league_schedules.get(i))
        .map(|l| l.league_description.label())
        .collect();
    sanitize_filename(&labels.join(" "))
}
