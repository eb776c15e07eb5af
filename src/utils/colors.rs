//! Terminal colors for punch output.

use crate::models::punch::PunchKind;
use ansi_term::{Colour, Style};

pub fn style_for_kind(kind: PunchKind) -> Style {
    match kind {
        PunchKind::ClockIn => Colour::Green.normal(),
        PunchKind::ClockOut => Colour::Red.normal(),
        PunchKind::StartLunch | PunchKind::EndLunch => Colour::Yellow.normal(),
        PunchKind::StartBreak | PunchKind::EndBreak => Colour::Cyan.normal(),
    }
}

pub fn paint_kind(kind: PunchKind) -> String {
    style_for_kind(kind).paint(kind.label()).to_string()
}

/// Enabled buttons are bold, disabled ones grey.
pub fn paint_button(label: &str, enabled: bool) -> String {
    if enabled {
        Colour::Purple.bold().paint(format!("[ {label} ]")).to_string()
    } else {
        Colour::Fixed(245).dimmed().paint(format!("[ {label} ]")).to_string()
    }
}

pub fn invalid_marker() -> String {
    Colour::Red.bold().paint("⚠").to_string()
}
