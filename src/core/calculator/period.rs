//! Pay-period anchoring.

use chrono::{Days, NaiveDate};

/// Length of every pay period, in days.
pub const PERIOD_DAYS: u64 = 14;

/// A known period boundary: Sunday 2025-01-05, local midnight.
pub fn anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 5).unwrap_or(NaiveDate::MIN)
}

/// First day of the 14-day period containing `date`.
///
/// Equivalent to stepping the anchor back by 14 days while `date` lies
/// before it, then subtracting `days_since_anchor mod 14`.
pub fn start_of_pay_period(date: NaiveDate) -> NaiveDate {
    let days = (date - anchor_date()).num_days();
    let offset = days.rem_euclid(PERIOD_DAYS as i64) as u64;
    date - Days::new(offset)
}
