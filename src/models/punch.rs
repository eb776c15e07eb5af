use chrono::{DateTime, Local, TimeZone};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six actions a user can record on the time clock.
///
/// Serialized with the human labels used in the punch files
/// (`"Clock In"`, `"Start Lunch"`, ...). On the command line the
/// kebab-case names are used instead (`clock-in`, `start-lunch`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum PunchKind {
    #[serde(rename = "Clock In")]
    ClockIn,
    #[serde(rename = "Clock Out")]
    ClockOut,
    #[serde(rename = "Start Lunch")]
    StartLunch,
    #[serde(rename = "End Lunch")]
    EndLunch,
    #[serde(rename = "Start Break")]
    StartBreak,
    #[serde(rename = "End Break")]
    EndBreak,
}

impl PunchKind {
    pub const ALL: [PunchKind; 6] = [
        PunchKind::ClockIn,
        PunchKind::ClockOut,
        PunchKind::StartLunch,
        PunchKind::EndLunch,
        PunchKind::StartBreak,
        PunchKind::EndBreak,
    ];

    /// Label as stored on disk and shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            PunchKind::ClockIn => "Clock In",
            PunchKind::ClockOut => "Clock Out",
            PunchKind::StartLunch => "Start Lunch",
            PunchKind::EndLunch => "End Lunch",
            PunchKind::StartBreak => "Start Break",
            PunchKind::EndBreak => "End Break",
        }
    }
}

impl fmt::Display for PunchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One recorded action. Immutable once written.
///
/// Ordering is by timestamp first, which is the order every replay uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Punch {
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub label: PunchKind,
}

impl Punch {
    pub fn new(timestamp: i64, label: PunchKind) -> Self {
        Self { timestamp, label }
    }

    pub fn datetime<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        DateTime::from_timestamp_millis(self.timestamp).map(|dt| dt.with_timezone(tz))
    }

    /// "Mon 2025-01-06 09:00 AM" in local time.
    pub fn local_str(&self) -> String {
        self.datetime(&Local)
            .map(|dt| dt.format("%a %Y-%m-%d %I:%M %p").to_string())
            .unwrap_or_else(|| format!("@{}", self.timestamp))
    }
}

/// Chronologically last punch of an unordered log. On equal timestamps the
/// one appended later wins.
pub fn last_punch(punches: &[Punch]) -> Option<&Punch> {
    punches.iter().max_by_key(|p| p.timestamp)
}

/// A copy of the punches in ascending timestamp order. Stable, so punches
/// sharing a timestamp keep their insertion order.
pub fn sorted(punches: &[Punch]) -> Vec<Punch> {
    let mut out = punches.to_vec();
    out.sort_by_key(|p| p.timestamp);
    out
}
