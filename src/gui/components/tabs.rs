// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself.
// On switch the view is rebuilt from the store for the new report, and the
// output path follows the new report unless the user typed their own.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.state.gui.current_page_index;

        for (idx, page) in router::all_pages().iter().enumerate() {
            let selected = idx == cur;

            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                let prev = app.current_kind();
                let was_default = app.state.options.export.out_path.is_none();
                app.state.gui.current_page_index = idx;
                logf!("UI: Tab switch {:?} → {:?}", prev, page.kind());

                if was_default {
                    app.refresh_out_path_text();
                }
                app.rebuild_view();
            }
        }
    });
}
