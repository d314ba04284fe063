use crate::errors::AppResult;
use crate::models::CellValue;
use csv::ReaderBuilder;
use std::path::Path;

/// Read every record of a CSV export as text cells.
///
/// Header handling is left to the caller: the export has two header rows
/// and ragged record lengths, so the reader runs headerless and flexible.
pub fn read_csv_grid(path: &Path) -> AppResult<Vec<(usize, Vec<CellValue>)>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut grid = Vec::new();

    for (i, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let line = rec.position().map(|p| p.line() as usize).unwrap_or(i + 1);
        let cells = rec.iter().map(CellValue::from_text).collect();
        grid.push((line, cells));
    }

    Ok(grid)
}
