use crate::config::{MAX_YEAR, MIN_YEAR};
use crate::export::ExportFormat;
use crate::models::Semester;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for roomchart
/// CLI application that turns a course schedule export into a room use chart
#[derive(Parser)]
#[command(
    name = "roomchart",
    version = env!("CARGO_PKG_VERSION"),
    about = "Build a rooms × weekdays use chart (DOCX, XLSX or PDF) from a course schedule export",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for problems")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Generate the room use chart document
    Generate {
        /// Schedule export (.csv, .xlsx, .xls, .ods) with a two-row header
        input: PathBuf,

        #[arg(
            long,
            value_delimiter = ',',
            value_name = "ROOMS",
            help = "Target rooms, comma separated (e.g. 225,227,229)"
        )]
        rooms: Option<Vec<u32>>,

        #[arg(long, value_enum, help = "Semester shown in the title")]
        semester: Option<Semester>,

        #[arg(
            long,
            value_parser = clap::value_parser!(u16).range(MIN_YEAR as i64..=MAX_YEAR as i64),
            help = "Year shown in the title"
        )]
        year: Option<u16>,

        #[arg(long, value_enum, default_value = "docx")]
        format: ExportFormat,

        #[arg(
            long,
            short = 'o',
            value_name = "PATH",
            help = "Output file or directory (default: {Semester}_{year}_room_use_chart.<ext>)"
        )]
        output: Option<PathBuf>,

        #[arg(long, short = 'f', help = "Overwrite an existing output file")]
        force: bool,
    },

    /// Show the chart contents in the terminal without writing a document
    Preview {
        /// Schedule export (.csv, .xlsx, .xls, .ods) with a two-row header
        input: PathBuf,

        #[arg(long, value_delimiter = ',', value_name = "ROOMS")]
        rooms: Option<Vec<u32>>,

        #[arg(long, help = "Print sorted meeting records as JSON")]
        json: bool,
    },
}
