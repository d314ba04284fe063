//! Format-independent chart layout.
//!
//! The backends in `export` only draw what this module decides: which text
//! goes in which cell, in which color, with which vertical alignment.

use crate::models::{MeetingRecord, Semester};
use crate::schedule::grid::Grid;
use crate::schedule::normalize::is_before_noon;
use serde::Serialize;

/// Which half of the day an entry belongs to. Drives color and alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Shift {
    Morning,
    Afternoon,
}

impl Shift {
    /// Classify on the raw begin-time cell, not the display string.
    pub fn of(record: &MeetingRecord) -> Self {
        if is_before_noon(&record.start_raw) {
            Shift::Morning
        } else {
            Shift::Afternoon
        }
    }

    pub fn legend(&self) -> &'static str {
        match self {
            Shift::Morning => "B = Morning",
            Shift::Afternoon => "G = Afternoon",
        }
    }

    /// 0xRRGGBB text color.
    pub fn rgb(&self) -> u32 {
        match self {
            Shift::Morning => 0x0000FF,
            Shift::Afternoon => 0x008000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerticalAlign {
    Top,
    Bottom,
}

/// One text line of a cell. `shift == None` marks a blank separator line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellLine {
    pub text: String,
    pub shift: Option<Shift>,
}

impl CellLine {
    fn entry(text: String, shift: Shift) -> Self {
        Self {
            text,
            shift: Some(shift),
        }
    }

    fn blank() -> Self {
        Self {
            text: String::new(),
            shift: None,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.shift.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartCell {
    pub valign: VerticalAlign,
    pub lines: Vec<CellLine>,
}

impl ChartCell {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines grouped into consecutive runs of the same shift (separators
    /// included), the way the rich-text backends emit them.
    pub fn runs(&self) -> Vec<(Option<Shift>, Vec<&str>)> {
        let mut out: Vec<(Option<Shift>, Vec<&str>)> = Vec::new();
        for line in &self.lines {
            match out.last_mut() {
                Some((shift, texts)) if *shift == line.shift => texts.push(&line.text),
                _ => out.push((line.shift, vec![line.text.as_str()])),
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartRow {
    pub day_label: String,
    /// Parallel to `ChartLayout::room_headers`.
    pub cells: Vec<ChartCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartLayout {
    pub title: String,
    pub legend: [Shift; 2],
    pub room_headers: Vec<String>,
    pub rows: Vec<ChartRow>,
}

/// Text settings shared by every backend.
pub mod style {
    pub const FONT: &str = "Times New Roman";
    pub const TITLE_PT: f32 = 20.0;
    pub const LEGEND_PT: f32 = 12.0;
    pub const ROOM_PT: f32 = 18.0;
    pub const DAY_PT: f32 = 20.0;
    pub const ENTRY_PT: f32 = 9.0;
}

/// "start-end", course, title, instructor.
fn entry_lines(record: &MeetingRecord, shift: Shift) -> [CellLine; 4] {
    [
        CellLine::entry(record.time_span(), shift),
        CellLine::entry(record.course.clone(), shift),
        CellLine::entry(record.title.clone(), shift),
        CellLine::entry(record.instructor.clone(), shift),
    ]
}

fn push_group(lines: &mut Vec<CellLine>, group: &[&MeetingRecord], shift: Shift) {
    for (idx, record) in group.iter().enumerate() {
        if idx > 0 {
            lines.push(CellLine::blank());
        }
        lines.extend(entry_lines(record, shift));
    }
}

/// Lay out one grid cell: morning entries first, then afternoon entries,
/// one blank line between groups only when both exist. A cell with only
/// afternoon entries sits at the bottom.
pub fn layout_cell(records: &[MeetingRecord]) -> ChartCell {
    let (morning, afternoon): (Vec<&MeetingRecord>, Vec<&MeetingRecord>) = records
        .iter()
        .partition(|r| Shift::of(r) == Shift::Morning);

    let valign = if morning.is_empty() && !afternoon.is_empty() {
        VerticalAlign::Bottom
    } else {
        VerticalAlign::Top
    };

    let mut lines = Vec::new();
    push_group(&mut lines, &morning, Shift::Morning);
    if !morning.is_empty() && !afternoon.is_empty() {
        lines.push(CellLine::blank());
    }
    push_group(&mut lines, &afternoon, Shift::Afternoon);

    ChartCell { valign, lines }
}

/// "{Semester} {year} {chart title}".
pub fn chart_title(semester: Semester, year: u16, title: &str) -> String {
    format!("{semester} {year} {title}").trim().to_string()
}

/// Build the full chart from the grid.
pub fn build_layout(
    grid: &Grid,
    semester: Semester,
    year: u16,
    title: &str,
    room_label_prefix: &str,
) -> ChartLayout {
    let room_headers = grid
        .rooms
        .iter()
        .map(|room| format!("{room_label_prefix}{room}"))
        .collect();

    let rows = grid
        .days
        .iter()
        .map(|day| ChartRow {
            day_label: day.weekday.label().to_string(),
            cells: day.cells.iter().map(|c| layout_cell(c)).collect(),
        })
        .collect();

    ChartLayout {
        title: chart_title(semester, year, title),
        legend: [Shift::Morning, Shift::Afternoon],
        room_headers,
        rows,
    }
}
