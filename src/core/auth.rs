use crate::config::Config;
use crate::core::session::Session;
use crate::db::store::PunchStore;
use crate::db::users::UserDirectory;
use crate::errors::AppResult;
use crate::models::user::User;
use crate::ui::messages::warning;
use tracing::info;

pub struct AuthLogic;

impl AuthLogic {
    pub fn login(cfg: &Config, username: &str, password: &str) -> AppResult<User> {
        let users = UserDirectory::load(&cfg.users_path())?;
        let user = users.authenticate(username, password)?;
        info!(user = %user.username, admin = user.is_admin, "logged in");
        Ok(user)
    }

    /// Session over the user's current punch file. Records that fail to
    /// decode are reported and left out.
    pub fn open_session(cfg: &Config, user: User) -> AppResult<Session> {
        let store = PunchStore::new(cfg.data_path());
        let loaded = store.load(&user.username)?;
        for rejected in &loaded.rejected {
            warning(format!("Skipping stored punch: {rejected}"));
        }
        Ok(Session::new(user, loaded.punches))
    }
}
