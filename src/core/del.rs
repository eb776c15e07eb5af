use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::db::lock::{DEFAULT_TIMEOUT, UserLock};
use crate::db::log::ttlog;
use crate::db::store::PunchStore;
use crate::errors::AppResult;
use crate::models::pay_period::PayPeriod;
use crate::models::punch::Punch;
use crate::models::user::User;
use crate::ui::messages::warning;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the `index`-th punch of `period` (1-based, hours listing order).
    pub fn apply(cfg: &Config, user: User, period: &PayPeriod, index: usize) -> AppResult<Punch> {
        let data_dir = cfg.data_path();
        let _lock = UserLock::acquire(&data_dir, &user.username, DEFAULT_TIMEOUT)?;

        let mut session = AuthLogic::open_session(cfg, user)?;
        let removed = session.delete_in_period(period, index)?;

        let username = session.user().username.clone();
        PunchStore::new(&data_dir).save(&username, session.punches())?;

        if let Err(e) = ttlog(
            &data_dir,
            "del",
            &username,
            &format!("{} at {}", removed.label, removed.local_str()),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }

        Ok(removed)
    }
}
