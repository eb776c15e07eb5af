//! Replays a punch sequence and flags the punches that break the
//! open/close pairing rules. Flags are for display only, nothing is
//! corrected.

use crate::models::punch::{Punch, PunchKind, sorted};
use std::collections::BTreeSet;
use tracing::trace;

pub type InvalidSet = BTreeSet<Punch>;

#[derive(Debug, Default)]
struct ReplayState {
    in_session: bool,
    lunch_open: bool,
    break_open: bool,
}

/// Punches in `punches` that violate the pairing rules.
///
/// Input order does not matter. The chronologically last punch is never
/// reported: a trailing open action just means the day is not over.
pub fn find_invalid(punches: &[Punch]) -> InvalidSet {
    let seq = sorted(punches);
    let mut bad = InvalidSet::new();
    let mut st = ReplayState::default();

    for (i, p) in seq.iter().enumerate() {
        let next = seq.get(i + 1);

        match p.label {
            PunchKind::ClockIn => {
                if st.in_session {
                    trace!(ts = p.timestamp, "double clock-in");
                    bad.insert(*p);
                }
                st = ReplayState {
                    in_session: true,
                    ..ReplayState::default()
                };
                if let Some(n) = next
                    && matches!(n.label, PunchKind::EndLunch | PunchKind::EndBreak)
                {
                    trace!(ts = n.timestamp, "close right after clock-in");
                    bad.insert(*p);
                    bad.insert(*n);
                }
            }
            PunchKind::ClockOut => {
                if st.in_session {
                    st.in_session = false;
                } else {
                    bad.insert(*p);
                }
            }
            PunchKind::StartLunch => {
                open_interval(&mut bad, p, next, st.in_session, &mut st.lunch_open);
            }
            PunchKind::EndLunch => close_interval(&mut bad, p, &mut st.lunch_open),
            PunchKind::StartBreak => {
                open_interval(&mut bad, p, next, st.in_session, &mut st.break_open);
            }
            PunchKind::EndBreak => close_interval(&mut bad, p, &mut st.break_open),
        }
    }

    if let Some(last) = seq.last() {
        bad.remove(last);
    }
    bad
}

/// Start Lunch / Start Break: needs an open session and no open interval of
/// the same kind, and must be followed directly by its own End.
fn open_interval(
    bad: &mut InvalidSet,
    p: &Punch,
    next: Option<&Punch>,
    in_session: bool,
    open: &mut bool,
) {
    if !in_session || *open {
        bad.insert(*p);
    } else {
        *open = true;
    }

    let closer = match p.label {
        PunchKind::StartLunch => PunchKind::EndLunch,
        _ => PunchKind::EndBreak,
    };
    if next.map(|n| n.label) != Some(closer) {
        bad.insert(*p);
        if let Some(n) = next {
            bad.insert(*n);
        }
    }
}

fn close_interval(bad: &mut InvalidSet, p: &Punch, open: &mut bool) {
    if *open {
        *open = false;
    } else {
        bad.insert(*p);
    }
}
