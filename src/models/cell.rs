use chrono::{NaiveTime, Timelike};
use serde::Serialize;
use std::fmt;

/// One raw spreadsheet cell, as delivered by the CSV or workbook reader.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    /// Time-of-day coming from a date/time formatted workbook cell.
    Time(NaiveTime),
}

impl CellValue {
    /// Build a cell from reader text; blank strings become `Empty`.
    pub fn from_text(s: &str) -> Self {
        if s.trim().is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s.to_string())
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Text rendering used by the text-oriented normalizers.
    /// Whole numbers print without a decimal part ("225", not "225.0").
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            CellValue::Number(n) => n.to_string(),
            CellValue::Time(t) => t.format("%H:%M").to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => f.write_str("<empty>"),
            other => f.write_str(&other.as_text()),
        }
    }
}

/// Interpret a spreadsheet serial as a time of day (fractional part of a day).
pub fn time_from_day_fraction(serial: f64) -> Option<NaiveTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let secs = (serial.fract() * 86_400.0).round() as u32 % 86_400;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0)
}

/// Minutes since midnight for a structured time.
pub fn minutes_of(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}
