// src/export/mod.rs

mod docx;
mod fs_utils;
pub mod logic;
mod pdf;
mod xlsx;

pub use logic::ExportLogic;
pub use pdf::ChartPdf;

use crate::chart::ChartLayout;
use crate::errors::AppResult;
use crate::models::Semester;
use crate::ui::messages::success;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Shared completion message for every export backend.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Docx,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Docx => "docx",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Docx => "DOCX",
            ExportFormat::Xlsx => "XLSX",
            ExportFormat::Pdf => "PDF",
        }
    }
}

/// Deterministic document name: `{Semester}_{year}_room_use_chart.{ext}`.
pub fn default_file_name(semester: Semester, year: u16, format: ExportFormat) -> String {
    format!("{semester}_{year}_room_use_chart.{}", format.as_str())
}

/// Render the chart in the requested format, fully in memory.
pub fn render(layout: &ChartLayout, format: ExportFormat) -> AppResult<Vec<u8>> {
    match format {
        ExportFormat::Docx => docx::render_docx(layout),
        ExportFormat::Xlsx => xlsx::render_xlsx(layout),
        ExportFormat::Pdf => Ok(pdf::render_pdf(layout)),
    }
}
