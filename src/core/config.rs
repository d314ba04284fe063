use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::schedule::normalize::TitleAbbreviator;
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Effective configuration as YAML.
    pub fn render(cfg: &Config) -> AppResult<String> {
        Ok(serde_yaml::to_string(cfg)?)
    }

    /// Validate the configuration, abbreviation table included.
    pub fn check(cfg: &Config) -> AppResult<()> {
        let mut problems = cfg.problems();
        if let Err(e) = TitleAbbreviator::new(&cfg.abbreviations) {
            problems.push(e.to_string());
        }

        if problems.is_empty() {
            success("Configuration is valid.");
            return Ok(());
        }

        for p in &problems {
            warning(p);
        }
        Err(AppError::Config(format!(
            "{} problem(s) found in configuration",
            problems.len()
        )))
    }

    /// Write the default configuration to `path`.
    pub fn init(path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
        Config::default().save(path)?;
        success(format!("Config file: {}", path.display()));
        Ok(())
    }

    /// Open the config file in the requested editor, falling back to the
    /// platform default when it cannot be started.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        if !path.exists() {
            Config::default().save(path)?;
        }

        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{editor_to_use}'"
                ));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using fallback '{default_editor}'"
                ));
                Ok(())
            }
            _ => {
                error(format!(
                    "Failed to edit configuration file using fallback '{default_editor}'"
                ));
                Err(AppError::Config(format!(
                    "no usable editor for {}",
                    path.display()
                )))
            }
        }
    }
}
