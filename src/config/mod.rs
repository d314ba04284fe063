use crate::errors::AppResult;
use crate::models::Semester;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

pub use defaults::{MAX_YEAR, MIN_YEAR};

/// Label prefixes used to find the logical columns of the export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLabels {
    pub course: String,
    pub title: String,
    pub days: String,
    pub begin_time: String,
    pub end_time: String,
    pub instructor: String,
    pub seats: String,
    pub location: String,
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            course: "Course Number:".into(),
            title: "Title:".into(),
            days: "Days:".into(),
            begin_time: "Begin Time:".into(),
            end_time: "End Time:".into(),
            instructor: "Instructors:".into(),
            seats: "Seats Remaining:".into(),
            location: "Location:".into(),
        }
    }
}

/// One case-insensitive literal find/replace step of the title table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbbreviationRule {
    pub pattern: String,
    pub replacement: String,
}

impl AbbreviationRule {
    pub fn new(pattern: &str, replacement: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
        }
    }
}

/// Literal rewrite applied to every course code (e.g. BIOL → BIO).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefixRewrite {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::target_rooms")]
    pub target_rooms: Vec<u32>,
    #[serde(default)]
    pub semester: Semester,
    #[serde(default = "defaults::year")]
    pub year: u16,
    #[serde(default = "defaults::chart_title")]
    pub chart_title: String,
    #[serde(default = "defaults::room_label_prefix")]
    pub room_label_prefix: String,
    #[serde(default = "defaults::closed_marker")]
    pub closed_marker: String,
    #[serde(default)]
    pub columns: ColumnLabels,
    #[serde(default = "defaults::course_prefix_rewrite")]
    pub course_prefix_rewrite: Option<PrefixRewrite>,
    #[serde(default = "defaults::abbreviations")]
    pub abbreviations: Vec<AbbreviationRule>,
    #[serde(default)]
    pub instructor_overrides: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_rooms: defaults::target_rooms(),
            semester: Semester::default(),
            year: defaults::year(),
            chart_title: defaults::chart_title(),
            room_label_prefix: defaults::room_label_prefix(),
            closed_marker: defaults::closed_marker(),
            columns: ColumnLabels::default(),
            course_prefix_rewrite: defaults::course_prefix_rewrite(),
            abbreviations: defaults::abbreviations(),
            instructor_overrides: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".roomchart")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("roomchart.conf")
    }

    /// Resolve the config path: explicit override or the default location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => crate::utils::path::expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Write the configuration as YAML, creating the parent directory.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// List every problem that would make `generate` fail.
    pub fn problems(&self) -> Vec<String> {
        let mut out = Vec::new();

        if self.target_rooms.is_empty() {
            out.push("target_rooms is empty".to_string());
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            out.push(format!(
                "year {} is outside {MIN_YEAR}..={MAX_YEAR}",
                self.year
            ));
        }
        if self.closed_marker.trim().is_empty() {
            out.push("closed_marker is empty".to_string());
        }
        for rule in &self.abbreviations {
            if rule.pattern.is_empty() {
                out.push("abbreviation with empty pattern".to_string());
            }
        }
        let cols = &self.columns;
        for (name, label) in [
            ("course", &cols.course),
            ("title", &cols.title),
            ("days", &cols.days),
            ("begin_time", &cols.begin_time),
            ("end_time", &cols.end_time),
            ("instructor", &cols.instructor),
            ("seats", &cols.seats),
            ("location", &cols.location),
        ] {
            if label.trim().is_empty() {
                out.push(format!("columns.{name} is empty"));
            }
        }

        out
    }
}
