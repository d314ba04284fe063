//! Unified application error type.
//! Every stage of the chart pipeline (input, schedule, chart, export, cli)
//! returns AppError so a failed invocation always ends with one message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input readers
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Unsupported input file type: {0}")]
    UnsupportedInput(String),

    #[error("Input file has no data: {0}")]
    EmptyInput(String),

    #[error("Input file must start with two header rows, found {0}")]
    MissingHeader(usize),

    #[error("Required column not found: '{0}'")]
    MissingColumn(String),

    /// A single schedule row could not be turned into meeting records.
    /// The message carries the physical line and a dump of the raw fields.
    #[error("Error processing row {line}: {reason}\n{fields}")]
    Row {
        line: usize,
        reason: String,
        fields: String,
    },

    // ---------------------------
    // Settings
    // ---------------------------
    #[error("Please enter a valid year between {min} and {max} (got {year})")]
    InvalidYear { year: u16, min: u16, max: u16 },

    #[error("Please select at least one room")]
    NoRooms,

    #[error("Invalid abbreviation pattern '{pattern}': {source}")]
    Abbreviation {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("XLSX export error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("DOCX packaging error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export cancelled: existing file not overwritten")]
    ExportCancelled,
}

pub type AppResult<T> = Result<T, AppError>;
