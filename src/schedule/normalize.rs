//! Field normalizers: raw cell → canonical meeting-record field.
//!
//! None of these functions fail. Malformed input degrades to `None`, an
//! empty string or an empty list, and the row simply contributes less.

use crate::config::{AbbreviationRule, PrefixRewrite};
use crate::errors::{AppError, AppResult};
use crate::models::cell::{minutes_of, time_from_day_fraction};
use crate::models::{CellValue, Weekday};
use chrono::NaiveTime;
use regex::{Regex, RegexBuilder};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));
static MERIDIEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*(AM|PM)").expect("valid regex"));

const NOON: u32 = 12 * 60;

/// Time-of-day carried by a cell, if any.
fn structured_time(value: &CellValue) -> Option<NaiveTime> {
    match value {
        CellValue::Time(t) => Some(*t),
        CellValue::Number(n) if (0.0..1.0).contains(n) => time_from_day_fraction(*n),
        _ => None,
    }
}

/// Parse "H:MM AM/PM" into minutes since midnight (24h).
fn parse_clock_text(text: &str) -> Option<u32> {
    let mut parts = text.split_whitespace();
    let clock = parts.next()?;
    let period = parts.next()?.to_ascii_uppercase();
    if parts.next().is_some() {
        return None;
    }

    let (h, m) = clock.split_once(':')?;
    let mut hours: u32 = h.parse().ok()?;
    let minutes: u32 = m.parse().ok()?;
    if minutes > 59 || hours > 23 {
        return None;
    }

    match period.as_str() {
        "PM" if hours != 12 => hours += 12,
        "AM" if hours == 12 => hours = 0,
        "AM" | "PM" => {}
        _ => return None,
    }

    if hours > 23 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Minutes since midnight, or `None` for empty/unreadable input.
pub fn parse_time(value: &CellValue) -> Option<u32> {
    match value {
        CellValue::Text(s) => parse_clock_text(s),
        other => structured_time(other).map(minutes_of),
    }
}

/// Last run of digits anywhere in the text ("Life Sciences 227" → 227).
pub fn extract_room_number(text: &str) -> Option<u32> {
    DIGITS
        .find_iter(text)
        .last()
        .and_then(|m| m.as_str().parse().ok())
}

/// Upper-cased last whitespace token of the instructor field.
///
/// A full name listed in `overrides` (compared case-insensitively) maps to
/// its configured surname instead.
pub fn extract_last_name(text: &str, overrides: &BTreeMap<String, String>) -> String {
    let name = text.trim();
    if name.is_empty() {
        return String::new();
    }

    if let Some(surname) = overrides
        .iter()
        .find(|(full, _)| full.trim().eq_ignore_ascii_case(name))
        .map(|(_, surname)| surname)
    {
        return surname.to_uppercase();
    }

    name.split_whitespace()
        .last()
        .map(str::to_uppercase)
        .unwrap_or_default()
}

/// Display form of a begin/end time: the export text without its AM/PM
/// suffix, or "H:MM" on a 12-hour clock for structured times.
pub fn format_time(value: &CellValue) -> String {
    match value {
        CellValue::Empty => String::new(),
        CellValue::Text(s) => MERIDIEM.replace_all(s, "").trim().to_string(),
        other => match structured_time(other) {
            Some(t) => t.format("%-I:%M").to_string(),
            None => other.as_text(),
        },
    }
}

/// Letters of the days field mapped to weekdays, in input order.
pub fn expand_days(code: &str) -> Vec<Weekday> {
    code.chars().filter_map(Weekday::from_code).collect()
}

/// Morning means a readable start strictly before 12:00.
pub fn is_before_noon(value: &CellValue) -> bool {
    parse_time(value).is_some_and(|m| m < NOON)
}

/// Apply the course-code rewrite to every occurrence.
pub fn rewrite_course(code: &str, rewrite: Option<&PrefixRewrite>) -> String {
    let code = code.trim();
    match rewrite {
        Some(r) if !r.from.is_empty() => code.replace(&r.from, &r.to),
        _ => code.to_string(),
    }
}

/// Compiled form of the ordered title table.
#[derive(Debug, Clone)]
pub struct TitleAbbreviator {
    rules: Vec<(Regex, String)>,
}

impl TitleAbbreviator {
    pub fn new(rules: &[AbbreviationRule]) -> AppResult<Self> {
        let rules = rules
            .iter()
            .filter(|r| !r.pattern.is_empty())
            .map(|r| {
                RegexBuilder::new(&regex::escape(&r.pattern))
                    .case_insensitive(true)
                    .build()
                    .map(|re| (re, r.replacement.clone()))
                    .map_err(|source| AppError::Abbreviation {
                        pattern: r.pattern.clone(),
                        source,
                    })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// Run every rule once over the whole title, in table order.
    pub fn abbreviate(&self, title: &str) -> String {
        let mut out = title.to_string();
        for (re, replacement) in &self.rules {
            out = re
                .replace_all(&out, regex::NoExpand(replacement.as_str()))
                .into_owned();
        }
        out.trim().to_string()
    }
}

/// Everything needed to normalize one row, built once per invocation.
#[derive(Debug, Clone)]
pub struct FieldNormalizer {
    pub abbreviator: TitleAbbreviator,
    pub instructor_overrides: BTreeMap<String, String>,
    pub course_rewrite: Option<PrefixRewrite>,
}

impl FieldNormalizer {
    pub fn new(
        abbreviations: &[AbbreviationRule],
        instructor_overrides: BTreeMap<String, String>,
        course_rewrite: Option<PrefixRewrite>,
    ) -> AppResult<Self> {
        Ok(Self {
            abbreviator: TitleAbbreviator::new(abbreviations)?,
            instructor_overrides,
            course_rewrite,
        })
    }

    pub fn course(&self, value: &CellValue) -> String {
        rewrite_course(&value.as_text(), self.course_rewrite.as_ref())
    }

    pub fn title(&self, value: &CellValue) -> String {
        self.abbreviator.abbreviate(&value.as_text())
    }

    pub fn instructor(&self, value: &CellValue) -> String {
        extract_last_name(&value.as_text(), &self.instructor_overrides)
    }
}
