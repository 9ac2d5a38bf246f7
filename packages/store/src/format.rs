//! Display helpers for listing pages and header badges.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Largest unread count rendered verbatim in the header badge.
pub const BADGE_CAP: u32 = 99;

fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_utc().date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// `2025-06-01T00:00:00Z` → `June 1, 2025`. Unparseable input is returned as is.
pub fn long_date(input: &str) -> String {
    parse_date(input)
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| input.to_string())
}

/// `2023-01-15` → `January 2023`. Unparseable input is returned as is.
pub fn month_year(input: &str) -> String {
    parse_date(input)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| input.to_string())
}

/// Monthly price without trailing zeros: `950.0` → `$950`, `950.5` → `$950.5`.
pub fn price(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${amount:.0}")
    } else {
        format!("${amount}")
    }
}

/// Header badge text, or `None` when there is nothing unread.
pub fn unread_badge(count: u32) -> Option<String> {
    match count {
        0 => None,
        n if n > BADGE_CAP => Some(format!("{BADGE_CAP}+")),
        n => Some(n.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_date() {
        assert_eq!(long_date("2025-06-01T00:00:00.000Z"), "June 1, 2025");
        assert_eq!(long_date("2025-12-25"), "December 25, 2025");
        assert_eq!(long_date("2025-08-31T10:00:00"), "August 31, 2025");
    }

    #[test]
    fn test_month_year() {
        assert_eq!(month_year("2023-01-15T00:00:00.000Z"), "January 2023");
    }

    #[test]
    fn test_unparseable_dates_pass_through() {
        assert_eq!(long_date("soon"), "soon");
        assert_eq!(month_year(""), "");
    }

    #[test]
    fn test_price() {
        assert_eq!(price(950.0), "$950");
        assert_eq!(price(950.5), "$950.5");
    }

    #[test]
    fn test_unread_badge() {
        assert_eq!(unread_badge(0), None);
        assert_eq!(unread_badge(1).as_deref(), Some("1"));
        assert_eq!(unread_badge(99).as_deref(), Some("99"));
        assert_eq!(unread_badge(100).as_deref(), Some("99+"));
    }
}
