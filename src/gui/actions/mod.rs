// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{build,update,export,copy}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod jobs;    // src/gui/actions/jobs.rs

pub use copy::copy;
pub use export::export;
pub use jobs::{build, update};

use crate::{gui::app::App, reports::DataSet};

/// Current page's report as exported (full columns, current selection).
pub(super) fn export_view(app: &App) -> DataSet {
    app.current_page().view_for_export(&app.state, app.current_report())
}
