use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::users::UserDirectory;
use crate::errors::{AppError, AppResult};
use crate::models::user::{User, stored_hash};
use crate::ui::messages::{info, success, warning};
use std::fs;

pub struct InitLogic;

impl InitLogic {
    /// Create the config file (unless `is_test`), the data directory and
    /// the user directory. An existing users file is left alone.
    pub fn apply(cfg: &Config, admin: Option<(&str, &str)>, is_test: bool) -> AppResult<()> {
        let dir = Config::config_dir();
        fs::create_dir_all(&dir)?;

        if !is_test {
            cfg.save()?;
            success(format!("Config file: {}", Config::config_file().display()));
        }

        let data_dir = cfg.data_path();
        fs::create_dir_all(&data_dir)?;
        success(format!("Data dir:    {}", data_dir.display()));

        let users_path = cfg.users_path();
        if users_path.exists() {
            info(format!("Users file already present: {}", users_path.display()));
            if admin.is_some() {
                warning("--admin ignored: edit the users file to add accounts.");
            }
        } else {
            let users = match admin {
                Some((name, password)) => {
                    if name.trim().is_empty() {
                        return Err(AppError::Config("admin username cannot be empty".into()));
                    }
                    vec![User {
                        username: name.trim().to_string(),
                        password: stored_hash(password),
                        preferred_first_name: name.trim().to_string(),
                        is_admin: true,
                    }]
                }
                None => Vec::new(),
            };
            UserDirectory::new(users).save(&users_path)?;
            success(format!("Users file:  {}", users_path.display()));
        }

        if let Err(e) = ttlog(&data_dir, "init", "", "punchclock initialized") {
            warning(format!("Failed to write internal log: {e}"));
        }
        Ok(())
    }
}
