//! roomchart library root.
//! Exposes the CLI parser, the run() entry point and the pipeline modules:
//! input → schedule → chart → export.

pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod input;
pub mod models;
pub mod schedule;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Generate { .. } => cli::commands::generate::handle(&cli.command, cfg),
        Commands::Preview { .. } => cli::commands::preview::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `init` must work even when the existing file is unreadable
    if let Commands::Init { .. } = cli.command {
        return dispatch(&cli, &Config::default());
    }

    let path = Config::resolve_path(cli.config.as_deref());
    let cfg = Config::load(&path)?;

    dispatch(&cli, &cfg)
}
