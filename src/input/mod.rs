//! Schedule export readers.
//!
//! Both readers produce a grid of `CellValue`s; this module turns the first
//! two physical rows into flattened column labels and the rest into `RawRow`s.

mod csv_reader;
mod workbook;

use crate::errors::{AppError, AppResult};
use crate::models::{CellValue, RawRow, ScheduleTable};
use crate::utils::path::extension_of;
use std::path::Path;

pub use csv_reader::read_csv_grid;
pub use workbook::read_workbook_grid;

/// Number of stacked header rows in the registrar export.
pub const HEADER_ROWS: usize = 2;

/// Load a schedule file, choosing the reader from the file extension.
pub fn load_table(path: &Path) -> AppResult<ScheduleTable> {
    let grid = match extension_of(path).as_str() {
        "csv" | "txt" => read_csv_grid(path)?,
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => read_workbook_grid(path)?,
        other => {
            let shown = if other.is_empty() { "<none>" } else { other };
            return Err(AppError::UnsupportedInput(format!(
                "{} (extension '{shown}', expected csv, xlsx, xls or ods)",
                path.display()
            )));
        }
    };

    if grid.is_empty() {
        return Err(AppError::EmptyInput(path.display().to_string()));
    }

    table_from_grid(grid)
}

/// Split a raw grid into flattened labels and data rows.
/// Each grid entry is `(physical line, cells)`.
pub fn table_from_grid(grid: Vec<(usize, Vec<CellValue>)>) -> AppResult<ScheduleTable> {
    if grid.len() < HEADER_ROWS {
        return Err(AppError::MissingHeader(grid.len()));
    }

    let mut iter = grid.into_iter();
    // checked above
    let (_, top) = iter.next().unwrap_or_default();
    let (_, bottom) = iter.next().unwrap_or_default();
    let labels = flatten_header(&top, &bottom);

    let rows = iter
        .map(|(line, cells)| RawRow::new(line, cells))
        .filter(|r| !r.is_blank())
        .collect();

    Ok(ScheduleTable { labels, rows })
}

/// Join the two header levels column by column ("Instructors:" + "Name").
pub fn flatten_header(top: &[CellValue], bottom: &[CellValue]) -> Vec<String> {
    let width = top.len().max(bottom.len());

    (0..width)
        .map(|i| {
            let parts: Vec<String> = [top.get(i), bottom.get(i)]
                .into_iter()
                .flatten()
                .map(|c| c.as_text().trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();

            if parts.is_empty() {
                format!("Unnamed {i}")
            } else {
                parts.join(" ")
            }
        })
        .collect()
}
