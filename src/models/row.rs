use super::cell::CellValue;

static EMPTY_CELL: CellValue = CellValue::Empty;

/// A data row of the schedule export, positioned against `ScheduleTable::labels`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// 1-based physical line (header rows included), for diagnostics.
    pub line: usize,
    pub cells: Vec<CellValue>,
}

impl RawRow {
    pub fn new(line: usize, cells: Vec<CellValue>) -> Self {
        Self { line, cells }
    }

    /// Cell at `idx`; short rows read as empty.
    pub fn get(&self, idx: usize) -> &CellValue {
        self.cells.get(idx).unwrap_or(&EMPTY_CELL)
    }

    pub fn set(&mut self, idx: usize, value: CellValue) {
        if idx >= self.cells.len() {
            self.cells.resize(idx + 1, CellValue::Empty);
        }
        self.cells[idx] = value;
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(CellValue::is_blank)
    }
}

/// Flattened schedule: one label per column plus the data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleTable {
    pub labels: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl ScheduleTable {
    /// First column whose label starts with `prefix` (case-insensitive).
    pub fn column_index(&self, prefix: &str) -> Option<usize> {
        let wanted = prefix.trim().to_lowercase();
        self.labels
            .iter()
            .position(|l| l.to_lowercase().starts_with(&wanted))
    }

    /// "label = value" dump of one row, one pair per line.
    pub fn describe_row(&self, row: &RawRow) -> String {
        let width = self.labels.len().max(row.cells.len());
        (0..width)
            .map(|i| {
                let label = self
                    .labels
                    .get(i)
                    .map(String::as_str)
                    .unwrap_or("<extra>");
                format!("  {label} = {}", row.get(i))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
