use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::db::lock::{DEFAULT_TIMEOUT, UserLock};
use crate::db::log::ttlog;
use crate::db::store::PunchStore;
use crate::errors::AppResult;
use crate::models::punch::{Punch, PunchKind};
use crate::models::user::User;
use crate::ui::messages::warning;
use chrono::Local;

/// High-level business logic for the `punch` command.
pub struct PunchLogic;

impl PunchLogic {
    /// Record `kind` for `user` at `at` (epoch ms, default now).
    ///
    /// Load, gate, append and save all happen while holding the user's lock,
    /// so the gate is checked against what is actually on disk.
    pub fn apply(
        cfg: &Config,
        user: User,
        kind: PunchKind,
        at: Option<i64>,
        force: bool,
    ) -> AppResult<Punch> {
        let data_dir = cfg.data_path();
        let _lock = UserLock::acquire(&data_dir, &user.username, DEFAULT_TIMEOUT)?;

        let mut session = AuthLogic::open_session(cfg, user)?;
        let ts = at.unwrap_or_else(|| Local::now().timestamp_millis());
        let punch = session.record(Punch::new(ts, kind), force)?;

        let username = session.user().username.clone();
        PunchStore::new(&data_dir).save(&username, session.punches())?;

        if let Err(e) = ttlog(
            &data_dir,
            "punch",
            &username,
            &format!("{} at {}{}", kind, punch.local_str(), if force { " (forced)" } else { "" }),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }

        Ok(punch)
    }
}
