use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Per-user punch files and the audit log live here.
    pub data_dir: String,
    pub users_file: String,
    pub separator_char: String,
    /// Default tracing filter when PUNCHCLOCK_LOG is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        let dir = Self::config_dir();
        Self {
            data_dir: dir.join("data").to_string_lossy().to_string(),
            users_file: dir.join("users.json").to_string_lossy().to_string(),
            separator_char: "-".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("punchclock")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".punchclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchclock.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Keys missing from the file take their default.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        fs::write(Self::config_file(), serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn users_path(&self) -> PathBuf {
        expand_tilde(&self.users_file)
    }

    pub fn separator_line(&self, width: usize) -> String {
        let c = self.separator_char.chars().next().unwrap_or('-');
        std::iter::repeat_n(c, width).collect()
    }
}
