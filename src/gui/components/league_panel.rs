// src/gui/components/league_panel.rs
//
// Renders the left league list and applies selection changes directly to `app`.
// Handles ctrl/shift range behavior and rebuilds the current view.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Leagues");

    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            app.select_all_leagues();
            app.rebuild_view();
        }
        if ui.button("None").clicked() {
            app.state.gui.selected_leagues.clear();
            app.rebuild_view();
        }
    });

    ui.separator();

    let labels: Vec<String> = app
        .data
        .as_ref()
        .map(|d| d.league_schedules.iter().map(|l| l.league_description.label()).collect())
        .unwrap_or_default();

    if labels.is_empty() {
        ui.label("(no store)");
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("leagues_panel_scroll")
        .show(ui, |ui| {
            let mut changed = false;

            for (idx, label) in labels.iter().enumerate() {
                let is_selected = app.state.gui.selected_leagues.contains(&idx);
                let resp = ui.selectable_label(is_selected, label);

                if resp.clicked() && !app.running {
                    let (ctrl, shift) = ui.input(|i| (i.modifiers.ctrl, i.modifiers.shift));
                    let sel = &mut app.state.gui.selected_leagues;

                    match (ctrl, shift, app.last_clicked) {
                        (_, true, Some(last)) => {
                            let (lo, hi) = if last <= idx { (last, idx) } else { (idx, last) };
                            if !ctrl { sel.clear(); }
                            for j in lo..=hi {
                                if !sel.contains(&j) { sel.push(j); }
                            }
                        }
                        (true, _, _) => {
                            if is_selected { sel.retain(|&x| x != idx); } else { sel.push(idx); }
                        }
                        _ => {
                            sel.clear();
                            sel.push(idx);
                        }
                    }
                    sel.sort_unstable();
                    app.last_clicked = Some(idx);
                    changed = true;
                }
            }

            if changed {
                app.rebuild_view();
                logf!("UI: Selection changed ({} leagues)", app.state.gui.selected_leagues.len());
            }
        });
}
