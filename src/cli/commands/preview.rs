use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{ChartSettings, GenerateLogic, PreviewLogic};
use crate::errors::AppResult;
use crate::input::load_table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Preview { input, rooms, json } = cmd {
        let settings = ChartSettings::resolve(cfg, rooms.as_deref(), None, None)?;
        let table = load_table(input)?;
        let (schedule, _layout) = GenerateLogic::build(table, &settings)?;

        if *json {
            println!("{}", PreviewLogic::to_json(&schedule)?);
        } else {
            PreviewLogic::print(&schedule, &settings.room_label_prefix);
        }
    }
    Ok(())
}
