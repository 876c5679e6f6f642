//! Calendar-date helpers
//!
//! Stored dates are zero-padded ISO `YYYY-MM-DD` strings and every
//! ordering comparison on them is lexical, which agrees with calendar
//! order for that format. `chrono` is used only where real calendar
//! arithmetic is needed: rendering today's date, whole-day spans, and
//! day iteration.

use chrono::{NaiveDate, Utc};

/// Today's date as a zero-padded ISO string (UTC)
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Parse an ISO `YYYY-MM-DD` string
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Whole-day span between two ISO dates, direction-insensitive.
/// `None` if either date fails to parse.
pub fn day_span(start: &str, end: &str) -> Option<i64> {
    let start = parse_day(start)?;
    let end = parse_day(end)?;
    Some((end - start).num_days().abs())
}

/// Inclusive calendar-day interval membership, by lexical comparison
pub fn interval_contains(day: &str, start: &str, end: &str) -> bool {
    start <= day && day <= end
}

/// Every day of the inclusive interval, rendered back to ISO strings.
/// Empty if either bound fails to parse or the interval is inverted.
pub fn days_in_interval(start: &str, end: &str) -> Vec<String> {
    let (Some(start), Some(end)) = (parse_day(start), parse_day(end)) else {
        return Vec::new();
    };
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current.format("%Y-%m-%d").to_string());
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_span() {
        assert_eq!(day_span("2025-05-28", "2025-06-05"), Some(8));
        assert_eq!(day_span("2025-06-05", "2025-05-28"), Some(8));
        assert_eq!(day_span("2025-06-05", "2025-06-05"), Some(0));
        assert_eq!(day_span("not-a-date", "2025-06-05"), None);
    }

    #[test]
    fn test_interval_contains_boundaries() {
        assert!(interval_contains("2025-06-01", "2025-06-01", "2025-06-03"));
        assert!(interval_contains("2025-06-02", "2025-06-01", "2025-06-03"));
        assert!(interval_contains("2025-06-03", "2025-06-01", "2025-06-03"));
        assert!(!interval_contains("2025-05-31", "2025-06-01", "2025-06-03"));
        assert!(!interval_contains("2025-06-04", "2025-06-01", "2025-06-03"));
    }

    #[test]
    fn test_lexical_order_across_month_boundary() {
        assert!("2025-09-30" < "2025-10-01");
        assert!(interval_contains("2025-10-01", "2025-09-30", "2025-10-02"));
    }

    #[test]
    fn test_days_in_interval() {
        assert_eq!(
            days_in_interval("2025-06-29", "2025-07-01"),
            vec!["2025-06-29", "2025-06-30", "2025-07-01"]
        );
        assert!(days_in_interval("2025-07-01", "2025-06-29").is_empty());
        assert!(days_in_interval("garbage", "2025-06-29").is_empty());
    }
}
