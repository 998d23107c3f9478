//! Utilities for date and time formatting

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Day `days` away from `date`; saturates at the calendar bounds
pub fn shift_date(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

/// "Thursday, November 14, 2024"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "Nov 14, 2024"
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "Nov 14, 08:30" (UTC)
pub fn format_reading_time(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %H:%M").to_string()
}

/// Parse "YYYY-MM-DD"
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Query-string form of a date
pub fn to_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_shift_date_crosses_month_and_year() {
        assert_eq!(shift_date(d(2024, 11, 30), 1), d(2024, 12, 1));
        assert_eq!(shift_date(d(2025, 1, 1), -1), d(2024, 12, 31));
        assert_eq!(shift_date(d(2024, 2, 28), 1), d(2024, 2, 29));
        assert_eq!(shift_date(NaiveDate::MAX, 1), NaiveDate::MAX);
    }

    #[test]
    fn test_formats() {
        assert_eq!(format_long_date(d(2024, 11, 14)), "Thursday, November 14, 2024");
        assert_eq!(format_short_date(d(2024, 11, 4)), "Nov 4, 2024");
        let ts = Utc.with_ymd_and_hms(2024, 11, 14, 8, 30, 0).unwrap();
        assert_eq!(format_reading_time(&ts), "Nov 14, 08:30");
    }

    #[test]
    fn test_iso_round_trip() {
        assert_eq!(parse_iso_date(" 2024-11-14 "), Some(d(2024, 11, 14)));
        assert_eq!(parse_iso_date("14.11.2024"), None);
        assert_eq!(to_iso_date(d(2024, 1, 5)), "2024-01-05");
    }
}
