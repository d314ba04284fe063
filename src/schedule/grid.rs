//! Day × room matrix of meeting records.

use crate::models::{MeetingRecord, Weekday};
use std::collections::BTreeSet;

/// One chart row: a weekday and one record list per room column.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRow {
    pub weekday: Weekday,
    /// Parallel to `Grid::rooms`.
    pub cells: Vec<Vec<MeetingRecord>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Target rooms, ascending.
    pub rooms: Vec<u32>,
    /// Weekdays that have at least one record, in canonical order.
    pub days: Vec<DayRow>,
}

impl Grid {
    /// Group already sorted records into cells.
    ///
    /// Every (present weekday, target room) pair gets exactly one cell,
    /// empty when nothing meets there. Records outside the target rooms
    /// are ignored; cells keep the incoming order.
    pub fn build(records: &[MeetingRecord], target_rooms: &BTreeSet<u32>) -> Self {
        let rooms: Vec<u32> = target_rooms.iter().copied().collect();

        let present: BTreeSet<Weekday> = records
            .iter()
            .filter(|r| target_rooms.contains(&r.room))
            .map(|r| r.weekday)
            .collect();

        let mut days: Vec<DayRow> = Weekday::ALL
            .iter()
            .filter(|d| present.contains(d))
            .map(|&weekday| DayRow {
                weekday,
                cells: vec![Vec::new(); rooms.len()],
            })
            .collect();

        for rec in records {
            let Ok(col) = rooms.binary_search(&rec.room) else {
                continue;
            };
            if let Some(day) = days.iter_mut().find(|d| d.weekday == rec.weekday) {
                day.cells[col].push(rec.clone());
            }
        }

        Self { rooms, days }
    }

    pub fn cell(&self, weekday: Weekday, room: u32) -> Option<&[MeetingRecord]> {
        let col = self.rooms.binary_search(&room).ok()?;
        self.days
            .iter()
            .find(|d| d.weekday == weekday)
            .map(|d| d.cells[col].as_slice())
    }

    pub fn weekdays(&self) -> Vec<Weekday> {
        self.days.iter().map(|d| d.weekday).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
