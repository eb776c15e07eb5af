use crate::core::calculator::validation::InvalidSet;
use crate::models::pay_period::PayPeriod;
use crate::models::punch::Punch;

#[derive(Debug, Clone)]
pub struct PeriodSummary {
    pub period: PayPeriod,
    /// Punches inside the period, oldest first.
    pub punches: Vec<Punch>,
    pub invalid: InvalidSet,
    pub total_millis: i64,
}

impl PeriodSummary {
    pub fn is_invalid(&self, punch: &Punch) -> bool {
        self.invalid.contains(punch)
    }

    pub fn total_hours(&self) -> String {
        crate::core::calculator::hours::format_hours(self.total_millis)
    }
}
