use crate::chart::{ChartLayout, build_layout};
use crate::core::settings::ChartSettings;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::input::load_table;
use crate::models::ScheduleTable;
use crate::schedule::{Schedule, build_schedule};
use crate::ui::messages::{detail, info, success, warning};
use std::path::{Path, PathBuf};

/// Outcome of a successful `generate` run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub records: usize,
    pub path: PathBuf,
}

pub struct GenerateLogic;

impl GenerateLogic {
    /// Table → schedule → layout, without touching the filesystem.
    pub fn build(
        table: ScheduleTable,
        settings: &ChartSettings,
    ) -> AppResult<(Schedule, ChartLayout)> {
        let schedule = build_schedule(table, &settings.schedule)?;
        let layout = build_layout(
            &schedule.grid,
            settings.semester,
            settings.year,
            &settings.chart_title,
            &settings.room_label_prefix,
        );
        Ok((schedule, layout))
    }

    /// Load the export, build the chart and write the document.
    pub fn run(
        input: &Path,
        settings: &ChartSettings,
        format: ExportFormat,
        output: Option<&Path>,
        force: bool,
    ) -> AppResult<GenerateReport> {
        info(format!("Reading schedule: {}", input.display()));
        let table = load_table(input)?;
        detail(format!(
            "{} data rows, {} columns",
            table.rows.len(),
            table.labels.len()
        ));

        let (schedule, layout) = Self::build(table, settings)?;
        let stats = schedule.stats;
        detail(format!(
            "{} closed rows skipped, {} rows outside the selected rooms",
            stats.closed, stats.outside_rooms
        ));

        if schedule.records.is_empty() {
            warning("No class meetings found for the selected rooms.");
        }

        let path = ExportLogic::output_path(output, settings.semester, settings.year, format);
        ExportLogic::export(&layout, format, &path, force)?;

        success(format!(
            "Document generated successfully! Found {} class entries.",
            schedule.records.len()
        ));

        Ok(GenerateReport {
            records: schedule.records.len(),
            path,
        })
    }
}
