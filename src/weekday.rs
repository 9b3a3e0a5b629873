//! English weekday and long-date names, independent of the process locale.

use chrono::{Datelike, NaiveDate, Weekday};

pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// `Sunday, June 15, 2025`
pub fn long_date(date: NaiveDate) -> String {
    format!("{}, {}", weekday_name(date), date.format("%B %-d, %Y"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()), "Saturday");
        assert_eq!(weekday_name(NaiveDate::from_ymd_opt(1992, 6, 14).unwrap()), "Sunday");
        assert_eq!(weekday_name(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()), "Wednesday");
    }

    #[test]
    fn test_long_date() {
        assert_eq!(
            long_date(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()),
            "Sunday, June 15, 2025"
        );
        assert_eq!(
            long_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            "Friday, March 1, 2024"
        );
    }
}
