use chrono::{Local, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// "YYYY-MM-DD HH:MM", optionally with seconds.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_seconds() {
        assert!(parse_datetime("2025-01-06 09:00").is_some());
        assert!(parse_datetime("2025-01-06 09:00:30").is_some());
        assert!(parse_datetime("2025-01-06").is_none());
        assert_eq!(parse_date(" 2025-01-06 "), NaiveDate::from_ymd_opt(2025, 1, 6));
    }
}
