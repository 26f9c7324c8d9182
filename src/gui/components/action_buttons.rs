// src/gui/components/action_buttons.rs

use eframe::egui::{self, widgets::Spinner};
use std::path::PathBuf;

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();

    // --- Format + Include headers ---
    {
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
            if ui.checkbox(&mut export.include_headers, "Include headers").changed() {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
        });

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            if export.out_path.is_none() {
                app.refresh_out_path_text();
            }
        }
    }

    // Page-specific controls
    if page.draw_controls(ui, &mut app.state) {
        app.rebuild_view();
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            let text = app.out_path_text.trim();
            app.state.options.export.out_path = if text.is_empty() { None } else { Some(PathBuf::from(text)) };
            logd!("UI: out_path_text changed → {}", app.out_path_text);
        }
    });

    // Actions: Build / Update / Export / Copy
    ui.horizontal(|ui| {
        let has_store = app.data.is_some();

        if ui.add_enabled(!app.running, egui::Button::new("Build")).on_hover_text("Fetch every league from scratch").clicked() {
            actions::build(app, ui.ctx());
        }
        if ui.add_enabled(!app.running && has_store, egui::Button::new("Update")).on_hover_text("Fetch results for games that are due").clicked() {
            actions::update(app, ui.ctx());
        }
        if ui.add_enabled(has_store, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
        if ui.add_enabled(has_store, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        let status = app.status.lock().map(|s| s.clone()).unwrap_or_default();
        ui.label(status);
    });
}
