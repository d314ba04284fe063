#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use roomchart::config::Config;
use roomchart::core::ChartSettings;
use roomchart::input::load_table;
use roomchart::models::{CellValue, MeetingRecord, ScheduleTable, Weekday};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Registrar-style export: two header rows, one CLOSED section.
pub const SAMPLE_CSV: &str = "\
CRN:,Course Number:,Title:,Days:,Begin Time:,End Time:,Seats Remaining:,Instructors:,Location:
,,,,,,,Name,Building Room
1001,BIOL 225,Medical Microbiology Laboratory,MW,9:00 AM,9:50 AM,5,Jane Smith,Shiley Center ST 225
1002,BIOL 300,Genomes and Evolution Lab,M,1:00 PM,2:15 PM,3,Alan Doe,Shiley Center ST 227
1003,BIOL 190,Insect Biology,T,10:00 AM,11:15 AM,CLOSED,Jo Ray,Shiley Center ST 225
";

pub fn rch() -> Command {
    let mut cmd = cargo_bin_cmd!("roomchart");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Temp file path for an output, removed if it already exists
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("roomchart_{name}_out.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a temp input file and return its path
pub fn write_fixture(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("roomchart_{name}_in.{ext}"));
    fs::write(&path, content).expect("write fixture");
    path.to_string_lossy().to_string()
}

/// Config path that does not exist, so built-in defaults apply
pub fn no_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("roomchart_{name}_missing.conf"));
    fs::remove_file(&path).ok();
    path.to_string_lossy().to_string()
}

pub fn load_fixture(name: &str, content: &str) -> ScheduleTable {
    let path = write_fixture(name, "csv", content);
    load_table(path.as_ref()).expect("load fixture")
}

pub fn default_settings() -> ChartSettings {
    ChartSettings::resolve(&Config::default(), None, None, None).expect("default settings")
}

pub fn settings_for_rooms(rooms: &[u32]) -> ChartSettings {
    ChartSettings::resolve(&Config::default(), Some(rooms), None, None).expect("settings")
}

/// Hand-made record; `start` is the raw begin-time text.
pub fn record(weekday: Weekday, room: u32, start: &str) -> MeetingRecord {
    let raw = CellValue::from_text(start);
    MeetingRecord {
        weekday,
        room,
        course: format!("BIO {room}"),
        title: "Micro".to_string(),
        start_display: roomchart::schedule::normalize::format_time(&raw),
        end_display: "10:00".to_string(),
        start_minutes: roomchart::schedule::normalize::parse_time(&raw),
        start_raw: raw,
        instructor: "SMITH".to_string(),
    }
}
