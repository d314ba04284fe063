//! Row filtering and per-weekday expansion.

use super::normalize::{
    FieldNormalizer, expand_days, extract_room_number, format_time, parse_time,
};
use crate::config::ColumnLabels;
use crate::errors::{AppError, AppResult};
use crate::models::{CellValue, MeetingRecord, RawRow, ScheduleTable};
use std::collections::BTreeSet;

/// Resolved positions of the logical columns in a flattened table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub course: usize,
    pub title: usize,
    pub days: usize,
    pub begin_time: usize,
    pub end_time: usize,
    pub instructor: usize,
    pub seats: usize,
    pub location: usize,
}

impl ColumnMap {
    /// Find every required column or fail naming the first missing label.
    pub fn resolve(table: &ScheduleTable, labels: &ColumnLabels) -> AppResult<Self> {
        let find = |label: &str| {
            table
                .column_index(label)
                .ok_or_else(|| AppError::MissingColumn(label.to_string()))
        };

        Ok(Self {
            course: find(&labels.course)?,
            title: find(&labels.title)?,
            days: find(&labels.days)?,
            begin_time: find(&labels.begin_time)?,
            end_time: find(&labels.end_time)?,
            instructor: find(&labels.instructor)?,
            seats: find(&labels.seats)?,
            location: find(&labels.location)?,
        })
    }

    /// Columns whose blanks inherit the value of the previous row.
    pub fn forward_filled(&self) -> [usize; 3] {
        [self.course, self.title, self.instructor]
    }
}

/// Counters reported after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandStats {
    pub rows_read: usize,
    pub closed: usize,
    pub outside_rooms: usize,
    pub records: usize,
}

/// Copy the last non-blank value down into blank cells of `columns`.
pub fn forward_fill(rows: &mut [RawRow], columns: &[usize]) {
    for &col in columns {
        let mut last: Option<CellValue> = None;
        for row in rows.iter_mut() {
            if row.get(col).is_blank() {
                if let Some(v) = &last {
                    row.set(col, v.clone());
                }
            } else {
                last = Some(row.get(col).clone());
            }
        }
    }
}

/// True when the seats column holds exactly the closed marker.
pub fn is_closed(row: &RawRow, seats: usize, marker: &str) -> bool {
    row.get(seats).as_text().trim() == marker
}

/// Expand one row into a record per meeting weekday.
///
/// Rows outside `target_rooms` and rows without meeting days yield nothing.
/// A row that would yield records but has no course number is reported as
/// a row-level failure.
pub fn expand_row(
    table: &ScheduleTable,
    row: &RawRow,
    cols: &ColumnMap,
    normalizer: &FieldNormalizer,
    target_rooms: &BTreeSet<u32>,
) -> AppResult<Vec<MeetingRecord>> {
    let Some(room) = extract_room_number(&row.get(cols.location).as_text()) else {
        return Ok(Vec::new());
    };
    if !target_rooms.contains(&room) {
        return Ok(Vec::new());
    }

    let days = expand_days(&row.get(cols.days).as_text());
    if days.is_empty() {
        return Ok(Vec::new());
    }

    let course = normalizer.course(row.get(cols.course));
    if course.is_empty() {
        return Err(AppError::Row {
            line: row.line,
            reason: "missing course number".to_string(),
            fields: table.describe_row(row),
        });
    }

    let begin = row.get(cols.begin_time);
    let title = normalizer.title(row.get(cols.title));
    let instructor = normalizer.instructor(row.get(cols.instructor));
    let start_display = format_time(begin);
    let end_display = format_time(row.get(cols.end_time));
    let start_minutes = parse_time(begin);

    Ok(days
        .into_iter()
        .map(|weekday| MeetingRecord {
            weekday,
            room,
            course: course.clone(),
            title: title.clone(),
            start_display: start_display.clone(),
            end_display: end_display.clone(),
            start_minutes,
            start_raw: begin.clone(),
            instructor: instructor.clone(),
        })
        .collect())
}

/// Forward fill, drop CLOSED rows, filter by room and expand by weekday.
/// Records come back in input order.
pub fn expand_table(
    table: &mut ScheduleTable,
    cols: &ColumnMap,
    normalizer: &FieldNormalizer,
    target_rooms: &BTreeSet<u32>,
    closed_marker: &str,
) -> AppResult<(Vec<MeetingRecord>, ExpandStats)> {
    forward_fill(&mut table.rows, &cols.forward_filled());

    let mut stats = ExpandStats {
        rows_read: table.rows.len(),
        ..Default::default()
    };
    let mut records = Vec::new();

    for row in &table.rows {
        if is_closed(row, cols.seats, closed_marker) {
            stats.closed += 1;
            continue;
        }

        let expanded = expand_row(table, row, cols, normalizer, target_rooms)?;
        if expanded.is_empty() {
            let in_target = extract_room_number(&row.get(cols.location).as_text())
                .is_some_and(|r| target_rooms.contains(&r));
            if !in_target {
                stats.outside_rooms += 1;
            }
        }
        records.extend(expanded);
    }

    stats.records = records.len();
    Ok((records, stats))
}
