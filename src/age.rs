//! age.rs
//!
//! This module provides the calendar-accurate age ("X years, Y months, Z days")
//! together with the cumulative totals (seconds, minutes, ... weeks, months).
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so we implement the calendar-aware borrowing rules manually.
//!
//! This logic handles:
//!   • month underflow (borrowing from years)
//!   • day underflow (borrowing from the month before `now`'s month)
//!   • leap years
//!   • varying month lengths
//!
//! Time-of-day never takes part in the years/months/days part; it only shows
//! up in the totals.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Elapsed age of a birth instant at some `now`.
///
/// `years`/`months`/`days` follow calendar borrowing; the `total_*` fields are
/// floors of real elapsed time, except `total_months` which is a plain
/// calendar-month delta with no day-of-month adjustment. The two "months"
/// can therefore disagree near month boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeStats {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub total_months: i32,
    pub total_weeks: i64,
    pub total_days: i64,
    pub total_hours: i64,
    pub total_minutes: i64,
    pub total_seconds: i64,
}

impl AgeStats {
    pub fn between(birth: NaiveDateTime, now: NaiveDateTime) -> Self {
        let (years, months, days) = calendar_age(birth.date(), now.date());
        let totals = UnitTotals::from_millis((now - birth).num_milliseconds());

        Self {
            years,
            months,
            days,
            total_months: total_months(birth.date(), now.date()),
            total_weeks: totals.days.div_euclid(7),
            total_days: totals.days,
            total_hours: totals.hours,
            total_minutes: totals.minutes,
            total_seconds: totals.seconds,
        }
    }
}

/// Floor-division chain over a millisecond difference.
///
/// Each unit is the floor of the previous one, so negative differences round
/// towards negative infinity rather than towards zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UnitTotals {
    pub seconds: i64,
    pub minutes: i64,
    pub hours: i64,
    pub days: i64,
}

impl UnitTotals {
    pub(crate) fn from_millis(millis: i64) -> Self {
        let seconds = millis.div_euclid(1000);
        let minutes = seconds.div_euclid(60);
        let hours = minutes.div_euclid(60);
        let days = hours.div_euclid(24);
        Self {
            seconds,
            minutes,
            hours,
            days,
        }
    }
}

/// Returns (years, months, days) between two calendar dates.
///
/// When the birth day is larger than the length of the month preceding
/// `today`'s month (e.g. born on the 31st, today is March 1st), the borrowed
/// days do not cover the gap and `days` comes out negative. That matches the
/// borrowing rule exactly and is left as is.
pub fn calendar_age(birthdate: NaiveDate, today: NaiveDate) -> (i32, i32, i32) {
    let mut years = today.year() - birthdate.year();
    let mut months = today.month() as i32 - birthdate.month() as i32;
    let mut days = today.day() as i32 - birthdate.day() as i32;

    // Fix day underflow
    if days < 0 {
        months -= 1;

        // Determine the previous month relative to `today`.
        let (prev_year, prev_month) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };

        // Add days from the previous month (28–31 depending on month & leap year)
        days += days_in_month(prev_year, prev_month) as i32;
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    (years, months, days)
}

/// Calendar-month delta, ignoring the day of month.
pub fn total_months(birthdate: NaiveDate, today: NaiveDate) -> i32 {
    (today.year() - birthdate.year()) * 12 + (today.month() as i32 - birthdate.month() as i32)
}

/// The line people copy to share their age.
pub fn summary(age: &AgeStats) -> String {
    format!(
        "I am exactly {} years, {} months, and {} days old.",
        age.years, age.months, age.days
    )
}

/// Returns number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_calendar_age_exact_anniversary() {
        assert_eq!(calendar_age(date(2000, 1, 1), date(2024, 1, 1)), (24, 0, 0));
    }

    #[test]
    fn test_calendar_age_borrows_from_month_before_today() {
        // December has 31 days, so Jan 10 - Mar 15 borrows 31 days.
        assert_eq!(calendar_age(date(2000, 3, 15), date(2024, 1, 10)), (23, 9, 26));
    }

    #[test]
    fn test_calendar_age_borrows_leap_february() {
        // The month before March 2024 is a 29-day February.
        assert_eq!(calendar_age(date(2000, 1, 30), date(2024, 3, 1)), (24, 1, 0));
        assert_eq!(calendar_age(date(2000, 1, 30), date(2023, 3, 1)), (23, 1, -1));
    }

    #[test]
    fn test_day_borrow_from_short_february_goes_negative() {
        assert_eq!(calendar_age(date(2000, 1, 31), date(2023, 3, 1)), (23, 1, -2));
    }

    #[test]
    fn test_total_months_ignores_day_of_month() {
        // Born on the 28th, today is the 1st of the next month: calendar age
        // says 0 months, the total says 1.
        let birth = date(2024, 1, 28);
        let today = date(2024, 2, 1);
        assert_eq!(total_months(birth, today), 1);
        assert_eq!(calendar_age(birth, today), (0, 0, 4));
    }

    #[test]
    fn test_totals_chain_from_seconds() {
        let stats = AgeStats::between(at(2024, 1, 1, 0, 0), at(2024, 1, 15, 12, 30));
        assert_eq!(stats.total_seconds, 14 * 86_400 + 12 * 3600 + 30 * 60);
        assert_eq!(stats.total_minutes, stats.total_seconds / 60);
        assert_eq!(stats.total_hours, stats.total_minutes / 60);
        assert_eq!(stats.total_days, 14);
        assert_eq!(stats.total_weeks, 2);
    }

    #[test]
    fn test_time_of_day_only_affects_totals() {
        // Same calendar day, earlier clock time: the calendar part still says
        // zero while the totals go negative.
        let stats = AgeStats::between(at(2024, 6, 15, 10, 30), at(2024, 6, 15, 9, 0));
        assert_eq!((stats.years, stats.months, stats.days), (0, 0, 0));
        assert_eq!(stats.total_seconds, -90 * 60);
        assert_eq!(stats.total_minutes, -90);
        assert_eq!(stats.total_hours, -2);
        assert_eq!(stats.total_days, -1);
        assert_eq!(stats.total_weeks, -1);
    }

    #[test]
    fn test_unit_totals_floor_negative_millis() {
        let totals = UnitTotals::from_millis(-1);
        assert_eq!(totals.seconds, -1);
        assert_eq!(totals.minutes, -1);
        assert_eq!(totals.days, -1);
    }

    #[test]
    fn test_summary_sentence() {
        let stats = AgeStats::between(at(2000, 3, 15, 0, 0), at(2024, 1, 10, 0, 0));
        assert_eq!(
            summary(&stats),
            "I am exactly 23 years, 9 months, and 26 days old."
        );
    }

    #[test]
    fn test_days_in_month_and_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
        assert!(!is_leap_year(2100));
    }
}
