//! Which punch actions are available right now, derived from the
//! chronologically last punch only.

use crate::models::punch::PunchKind;

/// Flags derived from the last punch label (`None` for an empty log).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurrentFlags {
    pub can_clock_in: bool,
    pub can_clock_out: bool,
    pub can_start_lunch: bool,
    pub can_start_break: bool,
    pub on_lunch: bool,
    pub on_break: bool,
}

impl CurrentFlags {
    pub fn from_last(last: Option<PunchKind>) -> Self {
        match last {
            None | Some(PunchKind::ClockOut) => Self {
                can_clock_in: true,
                ..Self::default()
            },
            Some(PunchKind::ClockIn | PunchKind::EndLunch | PunchKind::EndBreak) => Self {
                can_clock_out: true,
                can_start_lunch: true,
                can_start_break: true,
                ..Self::default()
            },
            Some(PunchKind::StartLunch) => Self {
                on_lunch: true,
                ..Self::default()
            },
            Some(PunchKind::StartBreak) => Self {
                on_break: true,
                ..Self::default()
            },
        }
    }
}

/// Whether recording `requested` right after `last` follows the table.
/// This is the "would be invalid if taken" test; the panel below is the
/// "disabled now" view of the same rules.
pub fn permits(last: Option<PunchKind>, requested: PunchKind) -> bool {
    let f = CurrentFlags::from_last(last);
    match requested {
        PunchKind::ClockIn => f.can_clock_in,
        PunchKind::ClockOut => f.can_clock_out,
        PunchKind::StartLunch => f.can_start_lunch,
        PunchKind::EndLunch => f.on_lunch,
        PunchKind::StartBreak => f.can_start_break,
        PunchKind::EndBreak => f.on_break,
    }
}

/// All actions `permits` accepts after `last`.
pub fn allowed_actions(last: Option<PunchKind>) -> Vec<PunchKind> {
    PunchKind::ALL
        .into_iter()
        .filter(|k| permits(last, *k))
        .collect()
}

/// A button as the shell should render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub action: PunchKind,
    pub enabled: bool,
}

impl Button {
    fn new(action: PunchKind, enabled: bool) -> Self {
        Self { action, enabled }
    }
}

/// The four-button punch panel. The lunch and break slots show the
/// matching End action while that interval is open, otherwise the Start
/// action, enabled or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PunchPanel {
    pub clock_in: Button,
    pub clock_out: Button,
    pub lunch: Button,
    pub rest: Button,
}

impl PunchPanel {
    pub fn for_last(last: Option<PunchKind>) -> Self {
        let f = CurrentFlags::from_last(last);

        let lunch = if f.on_lunch {
            Button::new(PunchKind::EndLunch, true)
        } else {
            Button::new(PunchKind::StartLunch, f.can_start_lunch)
        };
        let rest = if f.on_break {
            Button::new(PunchKind::EndBreak, true)
        } else {
            Button::new(PunchKind::StartBreak, f.can_start_break)
        };

        Self {
            clock_in: Button::new(PunchKind::ClockIn, f.can_clock_in),
            clock_out: Button::new(PunchKind::ClockOut, f.can_clock_out),
            lunch,
            rest,
        }
    }

    pub fn buttons(&self) -> [Button; 4] {
        [self.clock_in, self.clock_out, self.lunch, self.rest]
    }

    pub fn enabled(&self, action: PunchKind) -> bool {
        self.buttons()
            .iter()
            .any(|b| b.action == action && b.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PunchKind::*;

    #[test]
    fn empty_log_only_allows_clock_in() {
        assert_eq!(allowed_actions(None), vec![ClockIn]);
        assert_eq!(allowed_actions(Some(ClockOut)), vec![ClockIn]);
    }

    #[test]
    fn working_allows_out_lunch_and_break() {
        for last in [ClockIn, EndLunch, EndBreak] {
            assert_eq!(
                allowed_actions(Some(last)),
                vec![ClockOut, StartLunch, StartBreak]
            );
        }
    }

    #[test]
    fn on_lunch_only_end_lunch_is_enabled() {
        let panel = PunchPanel::for_last(Some(StartLunch));
        assert!(!panel.clock_in.enabled);
        assert!(!panel.clock_out.enabled);
        assert_eq!(panel.lunch, Button::new(EndLunch, true));
        assert_eq!(panel.rest, Button::new(StartBreak, false));
        assert_eq!(allowed_actions(Some(StartLunch)), vec![EndLunch]);
    }

    #[test]
    fn on_break_mirrors_lunch() {
        let panel = PunchPanel::for_last(Some(StartBreak));
        assert_eq!(panel.rest, Button::new(EndBreak, true));
        assert_eq!(panel.lunch, Button::new(StartLunch, false));
        assert!(panel.enabled(EndBreak));
        assert!(!panel.enabled(ClockOut));
    }

    #[test]
    fn clocked_out_shows_disabled_start_buttons() {
        let panel = PunchPanel::for_last(Some(ClockOut));
        assert_eq!(panel.lunch, Button::new(StartLunch, false));
        assert_eq!(panel.rest, Button::new(StartBreak, false));
        assert!(panel.enabled(ClockIn));
    }
}
