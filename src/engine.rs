//! engine.rs
//!
//! The age engine: one pure function from (birth date, birth time, now) to
//! everything the display needs. It holds no state and reads no clock, so the
//! caller decides what "now" is and can call it from anywhere.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::age::{AgeStats, UnitTotals};
use crate::birth::BirthInstant;
use crate::weekday::weekday_name;
use crate::zodiac::{ZodiacInfo, zodiac_for};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextBirthdayCountdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub target_instant: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub age: AgeStats,
    pub next_birthday: NextBirthdayCountdown,
    pub zodiac: ZodiacInfo,
    pub day_of_birth: &'static str,
    /// Birth date with the birth time-of-day applied.
    pub date_of_birth: NaiveDateTime,
}

/// Computes age, countdown, zodiac sign and weekday for a birth date and a
/// free-form `HH:MM` birth time.
///
/// A malformed time counts as midnight. Nothing checks that the birth lies
/// before `now`: a future birth date gives negative totals rather than an
/// error.
pub fn calculate_age(
    date_of_birth: NaiveDate,
    time_of_birth: &str,
    now: NaiveDateTime,
) -> CalculationResult {
    calculate_for(&BirthInstant::new(date_of_birth, time_of_birth), now)
}

pub fn calculate_for(birth: &BirthInstant, now: NaiveDateTime) -> CalculationResult {
    let born = birth.instant();

    CalculationResult {
        age: AgeStats::between(born, now),
        next_birthday: next_birthday(birth, now),
        zodiac: zodiac_for(birth.date),
        day_of_birth: weekday_name(birth.date),
        date_of_birth: born,
    }
}

/// Countdown to the first anniversary at or after `now`.
pub fn next_birthday(birth: &BirthInstant, now: NaiveDateTime) -> NextBirthdayCountdown {
    let target = match birth.anniversary(now.year()) {
        Some(this_year) if now <= this_year => Some(this_year),
        _ => birth.anniversary(now.year() + 1),
    }
    // Only reachable at the very edge of chrono's year range.
    .unwrap_or(now);

    let left = UnitTotals::from_millis((target - now).num_milliseconds());

    NextBirthdayCountdown {
        days: left.days,
        hours: left.hours.rem_euclid(24),
        minutes: left.minutes.rem_euclid(60),
        seconds: left.seconds.rem_euclid(60),
        target_instant: target,
    }
}
