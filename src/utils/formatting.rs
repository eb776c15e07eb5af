//! Formatting utilities used for CLI outputs.

/// 27_000_000 → "07h 30m". Seconds are truncated.
pub fn millis2readable(millis: i64) -> String {
    let sign = if millis < 0 { "-" } else { "" };
    let mins = millis.abs() / 60_000;
    format!("{}{:02}h {:02}m", sign, mins / 60, mins % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_durations() {
        assert_eq!(millis2readable(27_000_000), "07h 30m");
        assert_eq!(millis2readable(59_999), "00h 00m");
        assert_eq!(millis2readable(-3_600_000), "-01h 00m");
    }
}
