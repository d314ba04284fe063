use super::{cell::CellValue, weekday::Weekday};
use serde::Serialize;

/// One room/day/time occurrence derived from a single schedule row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingRecord {
    pub weekday: Weekday,
    pub room: u32,
    pub course: String,
    pub title: String,
    pub start_display: String,
    pub end_display: String,
    /// Minutes since midnight; `None` when the begin time is missing or unreadable.
    pub start_minutes: Option<u32>,
    /// Untouched begin-time cell, used for the morning/afternoon split.
    pub start_raw: CellValue,
    pub instructor: String,
}

impl MeetingRecord {
    /// Sort position of the start time. Unknown times sort first.
    pub fn sort_minutes(&self) -> u32 {
        self.start_minutes.unwrap_or(0)
    }

    /// "start-end" line of the rendered entry block.
    pub fn time_span(&self) -> String {
        format!("{}-{}", self.start_display, self.end_display)
    }
}
