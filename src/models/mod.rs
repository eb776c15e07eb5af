pub mod pay_period;
pub mod period_summary;
pub mod punch;
pub mod user;
