use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{ChartSettings, GenerateLogic};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        input,
        rooms,
        semester,
        year,
        format,
        output,
        force,
    } = cmd
    {
        let settings = ChartSettings::resolve(cfg, rooms.as_deref(), *semester, *year)?;
        GenerateLogic::run(input, &settings, *format, output.as_deref(), *force)?;
    }
    Ok(())
}
