use crate::chart::Shift;
use crate::errors::AppResult;
use crate::models::MeetingRecord;
use crate::schedule::Schedule;
use crate::ui::messages::header;
use crate::utils::table::Table;
use ansi_term::Colour;

pub struct PreviewLogic;

impl PreviewLogic {
    /// Sorted meeting records as pretty JSON.
    pub fn to_json(schedule: &Schedule) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(&schedule.records)?)
    }

    /// Meetings-per-cell summary, one row per present weekday.
    pub fn count_table(schedule: &Schedule, room_label_prefix: &str) -> Table {
        let grid = &schedule.grid;
        let mut headers = vec!["Day".to_string()];
        headers.extend(grid.rooms.iter().map(|r| format!("{room_label_prefix}{r}")));

        let mut table = Table::new(headers);
        for day in &grid.days {
            let mut row = vec![day.weekday.label().to_string()];
            row.extend(day.cells.iter().map(|c| match c.len() {
                0 => "-".to_string(),
                n => n.to_string(),
            }));
            table.add_row(row);
        }
        table
    }

    fn entry_line(rec: &MeetingRecord, room_label_prefix: &str) -> String {
        let text = format!(
            "{room_label_prefix}{:<5} {:<12} {:<10} {:<18} {}",
            rec.room,
            rec.time_span(),
            rec.course,
            rec.title,
            rec.instructor
        );
        let colour = match Shift::of(rec) {
            Shift::Morning => Colour::Blue,
            Shift::Afternoon => Colour::Green,
        };
        if std::env::var_os("NO_COLOR").is_some() {
            text
        } else {
            colour.paint(text).to_string()
        }
    }

    /// Print the grid day by day, then the count table.
    pub fn print(schedule: &Schedule, room_label_prefix: &str) {
        for day in &schedule.grid.days {
            header(day.weekday.label());
            for rec in day.cells.iter().flatten() {
                println!("  {}", Self::entry_line(rec, room_label_prefix));
            }
            println!();
        }

        print!("{}", Self::count_table(schedule, room_label_prefix).render());
        println!(
            "\n{} meeting records ({} rows read, {} closed)",
            schedule.records.len(),
            schedule.stats.rows_read,
            schedule.stats.closed
        );
    }
}
