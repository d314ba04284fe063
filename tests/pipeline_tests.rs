mod common;
use common::{SAMPLE_CSV, default_settings, load_fixture, record, settings_for_rooms};
use roomchart::config::Config;
use roomchart::core::GenerateLogic;
use roomchart::errors::AppError;
use roomchart::input::{flatten_header, load_table, table_from_grid};
use roomchart::models::{CellValue, Weekday};
use roomchart::schedule::grid::Grid;
use roomchart::schedule::sort::sort_records;
use roomchart::schedule::{ScheduleOptions, build_schedule};
use std::collections::BTreeSet;

const HEADER: &str = "\
Course Number:,Title:,Days:,Begin Time:,End Time:,Seats Remaining:,Instructors:,Location:
,,,,,,Name,Building Room
";

#[test]
fn test_sample_round_trip() {
    let table = load_fixture("round_trip", SAMPLE_CSV);
    assert_eq!(table.rows.len(), 3);

    let settings = default_settings();
    let schedule = build_schedule(table, &settings.schedule).unwrap();

    assert_eq!(schedule.records.len(), 3);
    assert_eq!(schedule.stats.closed, 1);
    assert_eq!(schedule.stats.rows_read, 3);

    let first = &schedule.records[0];
    assert_eq!(first.weekday, Weekday::Mon);
    assert_eq!(first.room, 225);
    assert_eq!(first.course, "BIO 225");
    assert_eq!(first.title, "Med Micro");
    assert_eq!(first.time_span(), "9:00-9:50");
    assert_eq!(first.instructor, "SMITH");
    assert_eq!(first.start_minutes, Some(540));

    let second = &schedule.records[1];
    assert_eq!((second.weekday, second.room), (Weekday::Mon, 227));
    assert_eq!(second.title, "Genome Evol");
    assert_eq!(second.instructor, "DOE");

    let third = &schedule.records[2];
    assert_eq!((third.weekday, third.room), (Weekday::Wed, 225));

    // CLOSED section never reaches the chart
    assert!(schedule.records.iter().all(|r| r.course != "BIO 190"));
}

#[test]
fn test_records_stay_inside_target_rooms() {
    let table = load_fixture("room_filter", SAMPLE_CSV);
    let settings = settings_for_rooms(&[227, 330]);
    let schedule = build_schedule(table, &settings.schedule).unwrap();

    assert_eq!(schedule.records.len(), 1);
    assert!(schedule.records.iter().all(|r| [227, 330].contains(&r.room)));
    assert_eq!(schedule.grid.rooms, vec![227, 330]);
    assert_eq!(schedule.grid.weekdays(), vec![Weekday::Mon]);
    assert_eq!(schedule.stats.outside_rooms, 1);
}

#[test]
fn test_grid_has_one_cell_per_day_and_room() {
    let table = load_fixture("grid_cells", SAMPLE_CSV);
    let settings = default_settings();
    let schedule = build_schedule(table, &settings.schedule).unwrap();
    let grid = &schedule.grid;

    assert_eq!(grid.rooms, vec![225, 227, 229, 242, 325, 327, 330, 429]);
    assert_eq!(grid.weekdays(), vec![Weekday::Mon, Weekday::Wed]);
    for day in &grid.days {
        assert_eq!(day.cells.len(), grid.rooms.len());
    }

    let total: usize = grid.days.iter().flat_map(|d| &d.cells).map(Vec::len).sum();
    assert_eq!(total, schedule.records.len());

    assert_eq!(grid.cell(Weekday::Mon, 225).map(<[_]>::len), Some(1));
    assert_eq!(grid.cell(Weekday::Mon, 229).map(<[_]>::len), Some(0));
    assert_eq!(grid.cell(Weekday::Tue, 225), None);
    assert_eq!(grid.cell(Weekday::Mon, 101), None);
}

#[test]
fn test_grid_ignores_records_outside_rooms() {
    let records = vec![
        record(Weekday::Fri, 225, "8:00 AM"),
        record(Weekday::Sat, 999, "8:00 AM"),
    ];
    let rooms: BTreeSet<u32> = [225].into_iter().collect();
    let grid = Grid::build(&records, &rooms);

    assert_eq!(grid.weekdays(), vec![Weekday::Fri]);
    assert!(Grid::build(&[], &rooms).is_empty());
}

#[test]
fn test_sort_order() {
    let mut records = vec![
        record(Weekday::Wed, 225, "8:00 AM"),
        record(Weekday::Mon, 327, "8:00 AM"),
        record(Weekday::Mon, 225, "2:00 PM"),
        record(Weekday::Mon, 225, "9:00 AM"),
        record(Weekday::Mon, 225, "TBA"),
    ];
    sort_records(&mut records);

    let keys: Vec<(Weekday, u32, Option<u32>)> = records
        .iter()
        .map(|r| (r.weekday, r.room, r.start_minutes))
        .collect();
    assert_eq!(
        keys,
        vec![
            (Weekday::Mon, 225, None),
            (Weekday::Mon, 225, Some(540)),
            (Weekday::Mon, 225, Some(840)),
            (Weekday::Mon, 327, Some(480)),
            (Weekday::Wed, 225, Some(480)),
        ]
    );
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let mut a = record(Weekday::Tue, 242, "10:00 AM");
    a.course = "BIO 1".into();
    let mut b = record(Weekday::Tue, 242, "10:00 AM");
    b.course = "BIO 2".into();

    let mut records = vec![a, b];
    sort_records(&mut records);
    assert_eq!(records[0].course, "BIO 1");
    assert_eq!(records[1].course, "BIO 2");
}

#[test]
fn test_forward_fill_before_expansion() {
    let csv = format!(
        "{HEADER}\
BIOL 225,Medical Microbiology Laboratory,M,9:00 AM,9:50 AM,5,Jane Smith,ST 225
,,W,1:00 PM,2:50 PM,4,,ST 229
"
    );
    let table = load_fixture("forward_fill", &csv);
    let schedule = build_schedule(table, &default_settings().schedule).unwrap();

    assert_eq!(schedule.records.len(), 2);
    let lab = &schedule.records[1];
    assert_eq!(lab.weekday, Weekday::Wed);
    assert_eq!(lab.room, 229);
    assert_eq!(lab.course, "BIO 225");
    assert_eq!(lab.title, "Med Micro");
    assert_eq!(lab.instructor, "SMITH");
}

#[test]
fn test_closed_rows_still_feed_forward_fill() {
    let csv = format!(
        "{HEADER}\
BIOL 350,Ecology,T,9:00 AM,9:50 AM,CLOSED,Ann Lee,ST 325
,,R,9:00 AM,9:50 AM,2,,ST 325
"
    );
    let table = load_fixture("closed_fill", &csv);
    let schedule = build_schedule(table, &default_settings().schedule).unwrap();

    assert_eq!(schedule.records.len(), 1);
    assert_eq!(schedule.records[0].weekday, Weekday::Thu);
    assert_eq!(schedule.records[0].course, "BIO 350");
    assert_eq!(schedule.records[0].instructor, "LEE");
}

#[test]
fn test_rows_without_days_or_room_are_skipped() {
    let csv = format!(
        "{HEADER}\
BIOL 400,Thesis,,,,5,Ann Lee,ST 225
BIOL 401,Seminar,F,3:00 PM,3:50 PM,5,Ann Lee,TBA
BIOL 402,Botany,F,3:00 PM,3:50 PM,5,Ann Lee,ST 225
"
    );
    let table = load_fixture("skipped", &csv);
    let schedule = build_schedule(table, &default_settings().schedule).unwrap();

    assert_eq!(schedule.records.len(), 1);
    assert_eq!(schedule.records[0].course, "BIO 402");
}

#[test]
fn test_row_error_names_line_and_fields() {
    let csv = format!(
        "{HEADER}\
,Mystery Lab,M,9:00 AM,9:50 AM,5,Jane Smith,ST 225
"
    );
    let table = load_fixture("row_error", &csv);
    let err = build_schedule(table, &default_settings().schedule).unwrap_err();

    match &err {
        AppError::Row { line, fields, .. } => {
            assert_eq!(*line, 3);
            assert!(fields.contains("Title: = Mystery Lab"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().starts_with("Error processing row 3"));
}

#[test]
fn test_missing_column() {
    let csv = "\
Course Number:,Title:,Days:,Begin Time:,End Time:,Seats Remaining:,Instructors:
,,,,,,Name
BIOL 225,Micro,M,9:00 AM,9:50 AM,5,Jane Smith
";
    let table = load_fixture("missing_column", csv);
    let err = build_schedule(table, &default_settings().schedule).unwrap_err();
    assert!(matches!(err, AppError::MissingColumn(ref c) if c == "Location:"));
}

#[test]
fn test_default_config_has_no_instructor_overrides() {
    let cfg = Config::default();
    assert!(cfg.instructor_overrides.is_empty());

    let table = load_fixture("no_overrides", SAMPLE_CSV);
    let schedule = build_schedule(table, &default_settings().schedule).unwrap();
    assert_eq!(schedule.records[0].instructor, "SMITH");
}

#[test]
fn test_no_rooms_is_rejected() {
    let err = ScheduleOptions::from_config(&Config::default(), Some(&[][..])).unwrap_err();
    assert!(matches!(err, AppError::NoRooms));
}

#[test]
fn test_flatten_header() {
    let top = vec![
        CellValue::from_text("Course Number:"),
        CellValue::from_text("Instructors:"),
        CellValue::Empty,
    ];
    let bottom = vec![
        CellValue::Empty,
        CellValue::from_text("Name"),
        CellValue::Empty,
        CellValue::from_text("Building Room"),
    ];
    assert_eq!(
        flatten_header(&top, &bottom),
        vec!["Course Number:", "Instructors: Name", "Unnamed 2", "Building Room"]
    );
}

#[test]
fn test_table_needs_two_header_rows() {
    let grid = vec![(1, vec![CellValue::from_text("Course Number:")])];
    assert!(matches!(table_from_grid(grid), Err(AppError::MissingHeader(1))));
}

#[test]
fn test_unsupported_extension() {
    let path = common::write_fixture("unsupported", "json", "{}");
    let err = load_table(path.as_ref()).unwrap_err();
    assert!(matches!(err, AppError::UnsupportedInput(_)));
}

#[test]
fn test_empty_csv() {
    let path = common::write_fixture("empty", "csv", "");
    let err = load_table(path.as_ref()).unwrap_err();
    assert!(matches!(err, AppError::EmptyInput(_)));
}

#[test]
fn test_xlsx_input_with_time_cells() {
    use rust_xlsxwriter::{Format, Workbook};

    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    let labels = [
        "Course Number:",
        "Title:",
        "Days:",
        "Begin Time:",
        "End Time:",
        "Seats Remaining:",
        "Instructors:",
        "Location:",
    ];
    for (c, label) in labels.iter().enumerate() {
        ws.write(0, c as u16, *label).unwrap();
    }
    ws.write(1, 6, "Name").unwrap();
    ws.write(1, 7, "Building Room").unwrap();

    let time_fmt = Format::new().set_num_format("h:mm AM/PM");
    ws.write(2, 0, "BIOL 310").unwrap();
    ws.write(2, 1, "Microbiology Lab").unwrap();
    ws.write(2, 2, "TR").unwrap();
    ws.write_number_with_format(2, 3, 13.0 / 24.0, &time_fmt).unwrap();
    ws.write_number_with_format(2, 4, 14.5 / 24.0, &time_fmt).unwrap();
    ws.write(2, 5, 12).unwrap();
    ws.write(2, 6, "Ann Lee").unwrap();
    ws.write(2, 7, "Life Sciences 330").unwrap();

    let mut path = std::env::temp_dir();
    path.push("roomchart_workbook_in.xlsx");
    workbook.save(&path).unwrap();

    let table = load_table(&path).unwrap();
    assert_eq!(table.labels[6], "Instructors: Name");

    let schedule = build_schedule(table, &default_settings().schedule).unwrap();
    assert_eq!(schedule.records.len(), 2);

    let rec = &schedule.records[0];
    assert_eq!(rec.weekday, Weekday::Tue);
    assert_eq!(rec.room, 330);
    assert_eq!(rec.start_minutes, Some(780));
    assert_eq!(rec.time_span(), "1:00-2:30");
    assert_eq!(rec.title, "Micro");
}

#[test]
fn test_generate_logic_build_layout() {
    let table = load_fixture("build_layout", SAMPLE_CSV);
    let settings = default_settings();
    let (schedule, layout) = GenerateLogic::build(table, &settings).unwrap();

    assert_eq!(layout.rows.len(), schedule.grid.days.len());
    assert_eq!(layout.room_headers.len(), 8);
    assert_eq!(layout.room_headers[0], "ST225");
    assert_eq!(layout.title, "Spring 2025 Room Use Chart for the Biology Laboratories");
}
