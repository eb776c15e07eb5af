//! The user directory. Read once per command; only `init` writes it.

use crate::errors::{AppError, AppResult};
use crate::models::user::User;
use std::fs;
use std::path::Path;
use tracing::debug;

pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read users file {}: {e}", path.display()))
        })?;
        let users: Vec<User> = serde_json::from_str(&content)?;
        debug!(path = %path.display(), users = users.len(), "user directory loaded");
        Ok(Self { users })
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&self.users)?)?;
        Ok(())
    }

    pub fn find(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.matches_username(username))
    }

    /// The matching user, or `AuthenticationFailed` without saying which
    /// half was wrong.
    pub fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        self.find(username)
            .filter(|u| u.check_password(password))
            .cloned()
            .ok_or(AppError::AuthenticationFailed)
    }
}
