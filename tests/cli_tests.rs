mod common;
use common::{SAMPLE_CSV, no_config, rch, temp_out, write_fixture};
use predicates::prelude::*;
use std::fs;
use std::io::{Cursor, Read};

fn document_xml(path: &str) -> String {
    let bytes = fs::read(path).expect("read docx");
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("open docx");
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .expect("document part")
        .read_to_string(&mut xml)
        .expect("read document part");
    xml
}

#[test]
fn test_generate_docx() {
    let cfg = no_config("generate_docx");
    let input = write_fixture("generate_docx", "csv", SAMPLE_CSV);
    let out = temp_out("generate_docx", "docx");

    rch()
        .args([
            "--config", &cfg, "generate", &input, "--semester", "fall", "--year", "2026", "-o",
            &out,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Document generated successfully! Found 3 class entries.",
        ));

    let xml = document_xml(&out);
    assert!(xml.contains("Fall 2026 Room Use Chart for the Biology Laboratories"));
    assert!(xml.contains("ST225"));
    assert!(xml.contains("ST429"));
    assert!(xml.contains("9:00-9:50"));
    assert!(xml.contains("BIO 225"));
    assert!(xml.contains("Med Micro"));
    assert!(xml.contains("SMITH"));
    assert!(!xml.contains("BIO 190"));
    assert!(!xml.contains(">Tue<"));
}

#[test]
fn test_generate_xlsx_and_pdf() {
    let cfg = no_config("generate_formats");
    let input = write_fixture("generate_formats", "csv", SAMPLE_CSV);

    for (format, magic) in [("xlsx", &b"PK"[..]), ("pdf", &b"%PDF"[..])] {
        let out = temp_out(&format!("generate_{format}"), format);
        rch()
            .args(["--config", &cfg, "generate", &input, "--format", format, "-o", &out])
            .assert()
            .success();

        let bytes = fs::read(&out).expect("read output");
        assert!(bytes.starts_with(magic), "{format} output has wrong header");
    }
}

#[test]
fn test_generate_into_directory_uses_default_name() {
    let cfg = no_config("generate_dir");
    let input = write_fixture("generate_dir", "csv", SAMPLE_CSV);
    let dir = std::env::temp_dir().join("roomchart_generate_dir");
    fs::create_dir_all(&dir).expect("create dir");
    let expected = dir.join("Spring_2025_room_use_chart.docx");
    fs::remove_file(&expected).ok();

    rch()
        .args(["--config", &cfg, "generate", &input, "-o"])
        .arg(&dir)
        .assert()
        .success();

    assert!(expected.exists());
}

#[test]
fn test_generate_room_override() {
    let cfg = no_config("generate_rooms");
    let input = write_fixture("generate_rooms", "csv", SAMPLE_CSV);
    let out = temp_out("generate_rooms", "docx");

    rch()
        .args([
            "--config", &cfg, "generate", &input, "--rooms", "227,330", "-o", &out,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 class entries."));

    let xml = document_xml(&out);
    assert!(xml.contains("ST330"));
    assert!(!xml.contains("ST225"));
}

#[test]
fn test_existing_output_is_kept_without_confirmation() {
    let cfg = no_config("generate_keep");
    let input = write_fixture("generate_keep", "csv", SAMPLE_CSV);
    let out = temp_out("generate_keep", "docx");
    fs::write(&out, "old chart").expect("seed output");

    rch()
        .args(["--config", &cfg, "generate", &input, "-o", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "old chart");

    rch()
        .args(["--config", &cfg, "generate", &input, "-o", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read(&out).unwrap().starts_with(b"PK"));
}

#[test]
fn test_invalid_year_is_rejected() {
    let cfg = no_config("bad_year");
    let input = write_fixture("bad_year", "csv", SAMPLE_CSV);

    rch()
        .args(["--config", &cfg, "generate", &input, "--year", "2019"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2020"));
}

#[test]
fn test_year_from_config_is_validated() {
    let cfg = write_fixture("config_year", "conf", "year: 1999\n");
    let input = write_fixture("config_year", "csv", SAMPLE_CSV);
    let out = temp_out("config_year", "docx");

    rch()
        .args(["--config", &cfg, "generate", &input, "-o", &out])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid year between 2020 and 2100"));
    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_empty_room_selection_is_rejected() {
    let cfg = write_fixture("no_rooms", "conf", "target_rooms: []\n");
    let input = write_fixture("no_rooms", "csv", SAMPLE_CSV);

    rch()
        .args(["--config", &cfg, "generate", &input])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please select at least one room"));
}

#[test]
fn test_unsupported_input_type() {
    let cfg = no_config("unsupported_cli");
    let input = write_fixture("unsupported_cli", "json", "[]");

    rch()
        .args(["--config", &cfg, "generate", &input])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported input file type"));
}

#[test]
fn test_missing_input_file() {
    let cfg = no_config("missing_input");
    let mut input = std::env::temp_dir();
    input.push("roomchart_does_not_exist.csv");

    rch()
        .args(["--config", &cfg, "generate"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_row_error_is_reported() {
    let cfg = no_config("row_error_cli");
    let csv = "\
Course Number:,Title:,Days:,Begin Time:,End Time:,Seats Remaining:,Instructors:,Location:
,,,,,,Name,Building Room
,Mystery Lab,M,9:00 AM,9:50 AM,5,Jane Smith,ST 225
";
    let input = write_fixture("row_error_cli", "csv", csv);
    let out = temp_out("row_error_cli", "docx");

    rch()
        .args(["--config", &cfg, "generate", &input, "-o", &out])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error processing row 3"))
        .stderr(predicate::str::contains("Title: = Mystery Lab"));
    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_preview_json() {
    let cfg = no_config("preview_json");
    let input = write_fixture("preview_json", "csv", SAMPLE_CSV);

    let output = rch()
        .args(["--config", &cfg, "preview", &input, "--json"])
        .output()
        .expect("run preview");
    assert!(output.status.success());

    let records: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("preview emits JSON");
    let records = records.as_array().expect("JSON array");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["weekday"], "Mon");
    assert_eq!(records[0]["course"], "BIO 225");
    assert_eq!(records[1]["room"], 227);
    assert_eq!(records[2]["weekday"], "Wed");
}

#[test]
fn test_instructor_override_from_config() {
    let cfg = write_fixture(
        "overrides",
        "conf",
        "instructor_overrides:\n  Jane Smith: Smith-Jones\n",
    );
    let input = write_fixture("overrides", "csv", SAMPLE_CSV);

    let output = rch()
        .args(["--config", &cfg, "preview", &input, "--json"])
        .output()
        .expect("run preview");
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON");
    assert_eq!(records[0]["instructor"], "SMITH-JONES");
    assert_eq!(records[1]["instructor"], "DOE");
}

#[test]
fn test_preview_table() {
    let cfg = no_config("preview_table");
    let input = write_fixture("preview_table", "csv", SAMPLE_CSV);

    rch()
        .args(["--config", &cfg, "preview", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mon"))
        .stdout(predicate::str::contains("Med Micro"))
        .stdout(predicate::str::contains("3 meeting records (3 rows read, 1 closed)"));
}

#[test]
fn test_init_and_check_config() {
    let cfg = no_config("init");

    rch()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file:"));

    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("target_rooms"));
    assert!(content.contains("Room Use Chart for the Biology Laboratories"));

    rch()
        .args(["--config", &cfg, "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    rch()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid."));

    rch()
        .args(["--config", &cfg, "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_check_reports_problems() {
    let cfg = write_fixture("check_problems", "conf", "target_rooms: []\nclosed_marker: ''\n");

    rch()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("target_rooms is empty"))
        .stderr(predicate::str::contains("2 problem(s) found"));
}

#[test]
fn test_config_print() {
    let cfg = write_fixture("print", "conf", "semester: Fall\nyear: 2031\n");

    rch()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("semester: Fall"))
        .stdout(predicate::str::contains("year: 2031"))
        .stdout(predicate::str::contains("room_label_prefix: ST"));
}
