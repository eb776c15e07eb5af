use crate::core::calculator::period::{PERIOD_DAYS, start_of_pay_period};
use crate::utils::time::local_midnight_millis;
use chrono::{Days, NaiveDate, TimeZone};

/// A fixed 14-day pay period, half-open: `[start, end)` in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayPeriod {
    pub first_day: NaiveDate,
    pub start: i64,
    pub end: i64,
}

impl PayPeriod {
    /// Period beginning at midnight of `first_day` in `tz`.
    /// `first_day` is trusted to be a period boundary. `None` when the
    /// period would run past the last representable date.
    pub fn starting_on<Tz: TimeZone>(first_day: NaiveDate, tz: &Tz) -> Option<Self> {
        let next = first_day.checked_add_days(Days::new(PERIOD_DAYS))?;
        Some(Self {
            first_day,
            start: local_midnight_millis(first_day, tz),
            end: local_midnight_millis(next, tz),
        })
    }

    /// Period covering `date`.
    pub fn containing<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<Self> {
        Self::starting_on(start_of_pay_period(date), tz)
    }

    pub fn previous<Tz: TimeZone>(&self, tz: &Tz) -> Option<Self> {
        Self::starting_on(self.first_day.checked_sub_days(Days::new(PERIOD_DAYS))?, tz)
    }

    pub fn next<Tz: TimeZone>(&self, tz: &Tz) -> Option<Self> {
        Self::starting_on(self.first_day.checked_add_days(Days::new(PERIOD_DAYS))?, tz)
    }

    /// Last calendar day inside the period.
    pub fn last_day(&self) -> NaiveDate {
        self.first_day + Days::new(PERIOD_DAYS - 1)
    }

    pub fn contains(&self, timestamp: i64) -> bool {
        timestamp >= self.start && timestamp < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn anchor_period_spans_fourteen_days() {
        let p = PayPeriod::containing(d(2025, 1, 5), &Utc).unwrap();
        assert_eq!(p.first_day, d(2025, 1, 5));
        assert_eq!(p.last_day(), d(2025, 1, 18));
        assert_eq!(p.end - p.start, 14 * 86_400_000);
    }

    #[test]
    fn end_is_exclusive() {
        let p = PayPeriod::containing(d(2025, 3, 1), &Utc).unwrap();
        assert!(p.contains(p.start));
        assert!(p.contains(p.end - 1));
        assert!(!p.contains(p.end));
        assert!(p.next(&Utc).unwrap().contains(p.end));
    }

    #[test]
    fn previous_and_next_are_adjacent() {
        let p = PayPeriod::containing(d(2025, 6, 10), &Utc).unwrap();
        assert_eq!(p.previous(&Utc).unwrap().end, p.start);
        assert_eq!(p.next(&Utc).unwrap().start, p.end);
    }

    #[test]
    fn calendar_edges_yield_no_period() {
        let far = crate::utils::date::parse_date("+262142-12-31").unwrap();
        assert_eq!(PayPeriod::containing(far, &Utc), None);
        assert_eq!(PayPeriod::containing(NaiveDate::MAX, &Utc), None);

        let first = PayPeriod::containing(d(2025, 1, 5), &Utc).unwrap();
        let mut p = first;
        for _ in 0..3 {
            p = p.previous(&Utc).unwrap();
        }
        assert_eq!(p.first_day, d(2024, 11, 24));
    }
}
