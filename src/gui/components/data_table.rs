// src/gui/components/data_table.rs
//
// Draws the live table from `app.view`. Purely a view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    let numeric = page.numeric_columns();
    let headers = app.view.headers.clone().unwrap_or_default();
    let cols = headers.len().max(app.view.rows.first().map(|r| r.len()).unwrap_or(0));
    if cols == 0 {
        return;
    }

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt(("table_state", page.kind().slug(), cols));
    for ci in 0..cols {
        let w = if numeric.contains(&ci) { 40.0 } else { 150.0 };
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    let rows = &app.view.rows;
    table
        .header(24.0, |mut header| {
            for ci in 0..cols {
                header.col(|ui| {
                    let text = headers.get(ci).cloned().unwrap_or_else(|| format!("Col {}", ci + 1));
                    ui.add(egui::Label::new(RichText::new(text).strong()).selectable(false));
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let Some(data) = rows.get(row.index()) else { return };
                for ci in 0..cols {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        let cell = data.get(ci).map(String::as_str).unwrap_or("");
                        if numeric.contains(&ci) {
                            ui.centered_and_justified(|ui| { ui.label(cell); });
                        } else {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                        }
                    });
                }
            });
        });
}
