use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::errors::AppResult;
use crate::models::pay_period::PayPeriod;
use crate::models::period_summary::PeriodSummary;
use crate::models::user::User;

pub struct HoursLogic;

impl HoursLogic {
    /// Read-only: no lock, the snapshot is whatever the file holds now.
    pub fn summary(cfg: &Config, user: User, period: &PayPeriod) -> AppResult<PeriodSummary> {
        let session = AuthLogic::open_session(cfg, user)?;
        Ok(session.summary(period))
    }
}
