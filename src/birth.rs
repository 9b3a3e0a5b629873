//! Birth input: the date and time-of-day a person was born, combined into a
//! single local wall-clock instant.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::error::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInstant {
    pub date: NaiveDate,
    pub time_of_day: NaiveTime,
}

impl BirthInstant {
    /// Builds a birth instant from a date and a free-form `HH:MM` string.
    /// See [`parse_time_of_birth`] for how bad times degrade.
    pub fn new(date: NaiveDate, time_of_birth: &str) -> Self {
        Self {
            date,
            time_of_day: parse_time_of_birth(time_of_birth),
        }
    }

    pub fn instant(&self) -> NaiveDateTime {
        self.date.and_time(self.time_of_day)
    }

    /// The birthday falling in `year`, at the birth time-of-day.
    ///
    /// A Feb 29 birthday in a common year rolls over into Mar 1. Returns
    /// `None` only when `year` is outside chrono's representable range.
    pub fn anniversary(&self, year: i32) -> Option<NaiveDateTime> {
        let first = NaiveDate::from_ymd_opt(year, self.date.month(), 1)?;
        let day = first.checked_add_days(Days::new(u64::from(self.date.day() - 1)))?;
        Some(day.and_time(self.time_of_day))
    }
}

/// Lenient `HH:MM` parsing.
///
/// The string is split on `:` and each part parsed as an integer. Missing,
/// non-numeric or out-of-range parts count as 0, so `""`, `"abc"` and
/// `"25:10"` give 00:00, 00:00 and 00:10.
pub fn parse_time_of_birth(input: &str) -> NaiveTime {
    let mut parts = input.split(':');
    let hour = parse_part(parts.next()).filter(|h| *h < 24).unwrap_or(0);
    let minute = parse_part(parts.next()).filter(|m| *m < 60).unwrap_or(0);

    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

fn parse_part(part: Option<&str>) -> Option<u32> {
    part.and_then(|p| p.trim().parse::<u32>().ok())
}

/// Strict `YYYY-MM-DD` parsing for the input-collection layer.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| InputError::InvalidDate {
        input: input.to_string(),
    })
}
