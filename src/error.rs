//! Errors raised while collecting birth input.
//!
//! The age engine itself is total and never fails; these guard the values
//! handed to it.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Birth date is not a real `YYYY-MM-DD` calendar date
    #[error("invalid birth date '{input}' - expected YYYY-MM-DD")]
    InvalidDate { input: String },

    /// `--now` override could not be parsed
    #[error("invalid instant '{input}' - expected YYYY-MM-DDTHH:MM[:SS]")]
    InvalidInstant { input: String },

    /// Birth instant lies after the current instant
    #[error("birth instant {birth} is in the future (now is {now})")]
    FutureBirthDate {
        birth: NaiveDateTime,
        now: NaiveDateTime,
    },

    /// Refresh interval below the supported minimum
    #[error("refresh interval of {millis}ms is too short (minimum is 100ms)")]
    IntervalTooShort { millis: u64 },
}
