//! Parsing for the free-form date strings carried by events, tasks and
//! budget items.
//!
//! Accepted shapes, in order: RFC 3339 (`2025-07-15T18:00:00Z`), a naive
//! date-time without offset (taken as UTC), and a bare calendar date
//! (`2025-09-01`, taken as midnight UTC).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_bare_date_as_midnight_utc() {
        let dt = parse_date("2025-09-01").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let dt = parse_date("2025-07-15T20:00:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 7, 15, 18, 0, 0).unwrap());
    }

    #[test]
    fn parses_naive_datetime() {
        let dt = parse_date("2025-03-20T09:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 3, 20, 9, 0, 0).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_date("").is_none());
        assert!(parse_date("next tuesday").is_none());
        assert!(parse_date("2025-13-40").is_none());
    }
}
