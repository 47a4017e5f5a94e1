//! Reservation-date cell matching.
//!
//! The sheet mixes two conventions for the reservation date: the clinic's
//! hand-written `{월}월 {일}일` label (no zero padding) and machine-written
//! dates in a handful of common formats, sometimes with a time attached.
//! A cell matches a day when either convention resolves to it; the
//! time-of-day component is ignored.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// The hand-written label for a day, e.g. `6월 5일`.
pub fn korean_day_label(day: NaiveDate) -> String {
    format!("{}월 {}일", day.month(), day.day())
}

/// Lenient parse of a machine-written date cell.
///
/// Accepts plain dates with `-`, `/` or `.` separators, datetimes with a
/// space or `T` separator, and RFC 3339 timestamps. Returns `None` for
/// anything else.
pub fn parse_loose_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|datetime| datetime.date_naive())
}

/// Whether a reservation-date cell refers to `day`.
///
/// Empty and unparseable cells never match; the caller drops those rows.
pub fn matches_day(cell: &str, day: NaiveDate) -> bool {
    let trimmed = cell.trim();
    if trimmed == korean_day_label(day) {
        return true;
    }
    parse_loose_date(trimmed) == Some(day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_5() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 5).unwrap()
    }

    #[test]
    fn korean_label_has_no_zero_padding() {
        assert_eq!(korean_day_label(june_5()), "6월 5일");
        let nov = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
        assert_eq!(korean_day_label(nov), "11월 30일");
    }

    #[test]
    fn exact_korean_label_matches() {
        assert!(matches_day("6월 5일", june_5()));
        assert!(!matches_day("6월 6일", june_5()));
    }

    #[test]
    fn padded_korean_label_does_not_match() {
        // The sheet never zero-pads, so neither do we.
        assert!(!matches_day("06월 05일", june_5()));
    }

    #[test]
    fn iso_timestamp_matches_regardless_of_time() {
        assert!(matches_day("2025-06-05T14:30:00+09:00", june_5()));
        assert!(matches_day("2025-06-05 09:00:00", june_5()));
        assert!(matches_day("2025-06-05", june_5()));
        assert!(!matches_day("2025-06-04T23:59:59+09:00", june_5()));
    }

    #[test]
    fn separator_variants_parse() {
        assert_eq!(parse_loose_date("2025/06/05"), Some(june_5()));
        assert_eq!(parse_loose_date("2025.6.5"), Some(june_5()));
    }

    #[test]
    fn garbage_and_empty_never_match() {
        assert!(!matches_day("", june_5()));
        assert!(!matches_day("내일", june_5()));
        assert!(parse_loose_date("6월 5일").is_none());
    }
}
