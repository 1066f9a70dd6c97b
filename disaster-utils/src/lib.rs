//! Shared utility functions for the disasters timeline crates.

/// Date utility functions
pub mod dates {
    use anyhow::Context;
    use chrono::{Datelike, NaiveDate};

    /// Leap year every record date is projected onto so that Feb 29 has a slot
    /// on the shared x-axis.
    pub const REFERENCE_YEAR: i32 = 2000;

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", s))
    }

    /// First and last day of the reference year (Jan 1 and Dec 31).
    pub fn reference_year_bounds() -> (NaiveDate, NaiveDate) {
        (
            reference_date(1, 1).unwrap_or_default(),
            reference_date(12, 31).unwrap_or_default(),
        )
    }

    /// Build a date inside the reference year.
    pub fn reference_date(month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day)
    }

    /// Move a date onto the reference year, keeping month and day.
    ///
    /// Always succeeds because the reference year is a leap year.
    pub fn to_reference_year(date: &NaiveDate) -> NaiveDate {
        date.with_year(REFERENCE_YEAR).unwrap_or(*date)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2017, 8, 27).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2017-08-27");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_rejects_other_formats() {
            assert!(parse_date("08/27/2017").is_err());
            assert!(parse_date("2017-13-01").is_err());
            assert!(parse_date("").is_err());
        }

        #[test]
        fn test_to_reference_year() {
            let harvey = NaiveDate::from_ymd_opt(2017, 8, 27).unwrap();
            assert_eq!(
                to_reference_year(&harvey),
                NaiveDate::from_ymd_opt(2000, 8, 27).unwrap()
            );

            let leap_day = NaiveDate::from_ymd_opt(2016, 2, 29).unwrap();
            assert_eq!(
                to_reference_year(&leap_day),
                NaiveDate::from_ymd_opt(2000, 2, 29).unwrap()
            );
        }

        #[test]
        fn test_reference_year_bounds() {
            let (start, end) = reference_year_bounds();
            assert_eq!(start, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
            assert_eq!(end, NaiveDate::from_ymd_opt(2000, 12, 31).unwrap());
        }
    }
}

/// Number formatting for SVG attributes.
pub mod svg {
    /// Format a coordinate with at most three decimals and no trailing zeros.
    ///
    /// Values that round to zero print as `0` (never `-0`), so path strings stay
    /// stable across renders.
    pub fn fmt_num(value: f64) -> String {
        let rounded = (value * 1000.0).round() / 1000.0;
        if rounded == 0.0 {
            return "0".to_string();
        }
        let text = format!("{:.3}", rounded);
        let text = text.trim_end_matches('0').trim_end_matches('.');
        text.to_string()
    }

    /// `translate(x,y)` transform attribute value.
    pub fn translate(x: f64, y: f64) -> String {
        format!("translate({},{})", fmt_num(x), fmt_num(y))
    }

}
