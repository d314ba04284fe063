use crate::errors::{AppError, AppResult};
use crate::models::CellValue;
use crate::models::cell::time_from_day_fraction;
use calamine::{Data, Reader, open_workbook_auto};
use chrono::{NaiveDateTime, NaiveTime};
use std::path::Path;

/// Read the first worksheet of a workbook (xlsx, xls, ods).
pub fn read_workbook_grid(path: &Path) -> AppResult<Vec<(usize, Vec<CellValue>)>> {
    let mut workbook = open_workbook_auto(path)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::EmptyInput(format!("{} has no worksheets", path.display())))??;

    // Ranges start at the first used cell; keep line numbers aligned with the sheet.
    let first_row = range.start().map(|(r, _)| r as usize).unwrap_or(0);

    let grid = range
        .rows()
        .enumerate()
        .map(|(i, row)| {
            let cells = row.iter().map(cell_from_data).collect();
            (first_row + i + 1, cells)
        })
        .collect();

    Ok(grid)
}

fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::from_text(s),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::DateTime(dt) => time_from_day_fraction(dt.as_f64())
            .map(CellValue::Time)
            .unwrap_or(CellValue::Empty),
        Data::DateTimeIso(s) => parse_iso_time(s)
            .map(CellValue::Time)
            .unwrap_or_else(|| CellValue::from_text(s)),
        Data::Error(_) => CellValue::Empty,
        other => CellValue::from_text(&other.to_string()),
    }
}

fn parse_iso_time(s: &str) -> Option<NaiveTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.time());
    }
    ["%H:%M:%S", "%H:%M"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
}
