use crate::config::{Config, MAX_YEAR, MIN_YEAR};
use crate::errors::{AppError, AppResult};
use crate::models::Semester;
use crate::schedule::ScheduleOptions;

/// Everything one chart run needs, after command-line overrides.
#[derive(Debug, Clone)]
pub struct ChartSettings {
    pub semester: Semester,
    pub year: u16,
    pub chart_title: String,
    pub room_label_prefix: String,
    pub schedule: ScheduleOptions,
}

impl ChartSettings {
    /// Merge per-invocation overrides over the configuration and validate.
    pub fn resolve(
        cfg: &Config,
        rooms: Option<&[u32]>,
        semester: Option<Semester>,
        year: Option<u16>,
    ) -> AppResult<Self> {
        let year = year.unwrap_or(cfg.year);
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(AppError::InvalidYear {
                year,
                min: MIN_YEAR,
                max: MAX_YEAR,
            });
        }

        Ok(Self {
            semester: semester.unwrap_or(cfg.semester),
            year,
            chart_title: cfg.chart_title.clone(),
            room_label_prefix: cfg.room_label_prefix.clone(),
            schedule: ScheduleOptions::from_config(cfg, rooms)?,
        })
    }
}
