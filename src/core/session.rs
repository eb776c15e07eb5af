//! Explicit context for one logged-in user: who they are and the snapshot of
//! their punch log the current command works on. The calculators only ever
//! see borrowed slices of it.

use crate::core::calculator::gating::{self, PunchPanel};
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::pay_period::PayPeriod;
use crate::models::period_summary::PeriodSummary;
use crate::models::punch::{Punch, PunchKind, last_punch};
use crate::models::user::User;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Session {
    user: User,
    punches: Vec<Punch>,
}

impl Session {
    pub fn new(user: User, punches: Vec<Punch>) -> Self {
        Self { user, punches }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn punches(&self) -> &[Punch] {
        &self.punches
    }

    /// Label of the chronologically last punch.
    pub fn last_kind(&self) -> Option<PunchKind> {
        last_punch(&self.punches).map(|p| p.label)
    }

    pub fn panel(&self) -> PunchPanel {
        PunchPanel::for_last(self.last_kind())
    }

    /// Append `punch` if the current state allows it.
    ///
    /// With `force`, an admin may record an action the table does not
    /// permit; the punch then simply shows up as invalid in the hours view.
    pub fn record(&mut self, punch: Punch, force: bool) -> AppResult<Punch> {
        let last = self.last_kind();
        if !gating::permits(last, punch.label) {
            if !force {
                return Err(AppError::PunchNotAllowed {
                    last,
                    requested: punch.label,
                });
            }
            if !self.user.is_admin {
                return Err(AppError::PermissionDenied(
                    "only administrators can force a punch".into(),
                ));
            }
            warn!(user = %self.user.username, action = %punch.label, "forced punch");
        }

        self.punches.push(punch);
        info!(user = %self.user.username, action = %punch.label, ts = punch.timestamp, "punch recorded");
        Ok(punch)
    }

    pub fn summary(&self, period: &PayPeriod) -> PeriodSummary {
        Core::build_period_summary(&self.punches, period)
    }

    /// Remove the `index`-th (1-based) punch of `period` as listed by
    /// `summary`. Admins only.
    pub fn delete_in_period(&mut self, period: &PayPeriod, index: usize) -> AppResult<Punch> {
        if !self.user.is_admin {
            return Err(AppError::PermissionDenied(
                "only administrators can delete punches".into(),
            ));
        }

        let target = index
            .checked_sub(1)
            .and_then(|i| self.summary(period).punches.get(i).copied())
            .ok_or(AppError::InvalidPunchIndex(index))?;

        let pos = self
            .punches
            .iter()
            .position(|p| *p == target)
            .ok_or(AppError::InvalidPunchIndex(index))?;
        let removed = self.punches.remove(pos);

        info!(user = %self.user.username, action = %removed.label, ts = removed.timestamp, "punch deleted");
        Ok(removed)
    }
}
