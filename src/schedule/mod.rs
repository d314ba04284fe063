//! Schedule pipeline: normalize → filter/expand → sort → grid.

pub mod expand;
pub mod grid;
pub mod normalize;
pub mod sort;

use crate::config::{ColumnLabels, Config};
use crate::errors::{AppError, AppResult};
use crate::models::{MeetingRecord, ScheduleTable};
use expand::{ColumnMap, ExpandStats, expand_table};
use grid::Grid;
use normalize::FieldNormalizer;
use sort::sort_records;
use std::collections::BTreeSet;

/// Per-invocation pipeline settings.
#[derive(Debug, Clone)]
pub struct ScheduleOptions {
    pub target_rooms: BTreeSet<u32>,
    pub columns: ColumnLabels,
    pub closed_marker: String,
    pub normalizer: FieldNormalizer,
}

impl ScheduleOptions {
    /// Build settings from the configuration, with an optional room override.
    pub fn from_config(cfg: &Config, rooms: Option<&[u32]>) -> AppResult<Self> {
        let target_rooms: BTreeSet<u32> = rooms
            .unwrap_or(&cfg.target_rooms)
            .iter()
            .copied()
            .collect();

        if target_rooms.is_empty() {
            return Err(AppError::NoRooms);
        }

        Ok(Self {
            target_rooms,
            columns: cfg.columns.clone(),
            closed_marker: cfg.closed_marker.clone(),
            normalizer: FieldNormalizer::new(
                &cfg.abbreviations,
                cfg.instructor_overrides.clone(),
                cfg.course_prefix_rewrite.clone(),
            )?,
        })
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone)]
pub struct Schedule {
    /// Sorted by (weekday, room, start time).
    pub records: Vec<MeetingRecord>,
    pub grid: Grid,
    pub stats: ExpandStats,
}

/// Run the whole pipeline over a loaded table.
pub fn build_schedule(mut table: ScheduleTable, opts: &ScheduleOptions) -> AppResult<Schedule> {
    let cols = ColumnMap::resolve(&table, &opts.columns)?;

    let (mut records, stats) = expand_table(
        &mut table,
        &cols,
        &opts.normalizer,
        &opts.target_rooms,
        &opts.closed_marker,
    )?;

    sort_records(&mut records);
    let grid = Grid::build(&records, &opts.target_rooms);

    Ok(Schedule {
        records,
        grid,
        stats,
    })
}
