use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// The effective configuration, overrides included.
    pub fn render(cfg: &Config) -> AppResult<String> {
        Ok(serde_yaml::to_string(cfg)?)
    }

    fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Open the config file in `editor`, falling back to $EDITOR / the
    /// platform default when the requested one fails.
    pub fn edit(cfg: &Config, editor: Option<&str>) -> AppResult<()> {
        let path = Config::config_file();
        if !path.exists() {
            cfg.save()?;
        }

        let fallback = Self::default_editor();
        let requested = editor.map(str::to_string).unwrap_or_else(|| fallback.clone());

        match Command::new(&requested).arg(&path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{requested}'"));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{requested}' not available, falling back to '{fallback}'"
            )),
        }

        match Command::new(&fallback).arg(&path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{fallback}'"));
                Ok(())
            }
            Ok(s) => Err(AppError::Config(format!("editor '{fallback}' exited with {s}"))),
            Err(e) => Err(AppError::Config(format!("cannot run '{fallback}': {e}"))),
        }
    }
}
