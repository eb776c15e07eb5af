//! Worked time for a pay period.

use crate::models::pay_period::PayPeriod;
use crate::models::punch::{Punch, PunchKind, sorted};
use tracing::{debug, trace};

pub const MILLIS_PER_HOUR: i64 = 3_600_000;

#[derive(Debug, Default)]
struct Replay {
    open_clock_in: Option<i64>,
    lunch_start: Option<i64>,
    break_start: Option<i64>,
    lunch_accum: i64,
    break_accum: i64,
    total: i64,
}

/// Total worked milliseconds of the punches falling in `period`.
///
/// Each ClockIn starts a fresh session with its own lunch and break
/// accumulators. At ClockOut the session adds
/// `out - in - lunch + break`: lunch is deducted, break time is added back.
/// Intervals that never close contribute nothing.
pub fn worked_millis(punches: &[Punch], period: &PayPeriod) -> i64 {
    let in_window: Vec<Punch> = punches
        .iter()
        .filter(|p| period.contains(p.timestamp))
        .copied()
        .collect();
    let total = worked_millis_unbounded(&in_window);
    debug!(
        punches = in_window.len(),
        total_ms = total,
        start = period.start,
        "computed pay period total"
    );
    total
}

/// Same replay without the window filter.
pub fn worked_millis_unbounded(punches: &[Punch]) -> i64 {
    let mut r = Replay::default();

    for p in sorted(punches) {
        let ts = p.timestamp;
        match p.label {
            PunchKind::ClockIn => {
                r.open_clock_in = Some(ts);
                r.lunch_start = None;
                r.break_start = None;
                r.lunch_accum = 0;
                r.break_accum = 0;
            }
            PunchKind::ClockOut => {
                if let Some(start) = r.open_clock_in.take() {
                    let session = ts - start - r.lunch_accum + r.break_accum;
                    trace!(start, end = ts, session, "session closed");
                    r.total += session;
                }
            }
            PunchKind::StartLunch => r.lunch_start = Some(ts),
            PunchKind::EndLunch => {
                if let Some(start) = r.lunch_start.take() {
                    r.lunch_accum += ts - start;
                }
            }
            PunchKind::StartBreak => r.break_start = Some(ts),
            PunchKind::EndBreak => {
                if let Some(start) = r.break_start.take() {
                    r.break_accum += ts - start;
                }
            }
        }
    }

    r.total
}

/// Milliseconds as hours with two decimals, e.g. `7.50`.
pub fn format_hours(millis: i64) -> String {
    format!("{:.2}", millis as f64 / MILLIS_PER_HOUR as f64)
}
