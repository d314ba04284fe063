// src/export/logic.rs

use crate::chart::ChartLayout;
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_parent, ensure_writable};
use crate::export::{ExportFormat, default_file_name, notify_export_success, render};
use crate::models::Semester;
use crate::ui::messages::info;
use std::fs;
use std::path::{Path, PathBuf};

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Resolve the output path.
    ///
    /// - `None` → default name in the current directory
    /// - existing directory → default name inside it
    /// - anything else → used as given
    pub fn output_path(
        output: Option<&Path>,
        semester: Semester,
        year: u16,
        format: ExportFormat,
    ) -> PathBuf {
        let name = default_file_name(semester, year, format);
        match output {
            None => PathBuf::from(name),
            Some(p) if p.is_dir() => p.join(name),
            Some(p) => p.to_path_buf(),
        }
    }

    /// Render the chart and write it to `path`.
    ///
    /// The document is built completely before the file is touched, so a
    /// failure never leaves a partial artifact behind.
    pub fn export(
        layout: &ChartLayout,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        info(format!("Exporting to {}: {}", format.label(), path.display()));
        let bytes = render(layout, format)?;

        ensure_parent(path)?;
        fs::write(path, bytes)?;

        notify_export_success(format.label(), path);
        Ok(())
    }
}
