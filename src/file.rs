// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportOptions, ReportKind};
use crate::csv::to_export_string;
use crate::error::{Result, ScrapeError};
use crate::reports::DataSet;

/// Write one report file based on ExportOptions (path, headers policy, delimiter).
/// Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    kind: ReportKind,
    stem: &str,
    data: &DataSet,
) -> Result<PathBuf> {
    let path = export.out_path_for(kind, stem);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(&data.headers, &data.rows, export.include_headers, export.format.delim());
    fs::write(&path, contents).map_err(|source| ScrapeError::Store { path: path.clone(), source })?;
    logf!("Export: {} rows → {}", data.rows.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Store {
            path: dir.to_path_buf(),
            source: std::io::Error::other("path exists but is not a directory"),
        });
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ScrapeError::Store { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}
