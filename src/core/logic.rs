use crate::core::calculator::{hours, validation};
use crate::models::{pay_period::PayPeriod, period_summary::PeriodSummary, punch::Punch};

pub struct Core;

impl Core {
    /// Punches of the period, their invalid flags and the worked total.
    /// Validation sees only the period's punches, like the hours view.
    pub fn build_period_summary(punches: &[Punch], period: &PayPeriod) -> PeriodSummary {
        let mut in_period: Vec<Punch> = punches
            .iter()
            .filter(|p| period.contains(p.timestamp))
            .copied()
            .collect();
        in_period.sort_by_key(|p| p.timestamp);

        let invalid = validation::find_invalid(&in_period);
        let total_millis = hours::worked_millis_unbounded(&in_period);

        PeriodSummary {
            period: *period,
            punches: in_period,
            invalid,
            total_millis,
        }
    }
}
