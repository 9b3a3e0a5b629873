//! Exact age calculator.
//!
//! [`engine::calculate_age`] is the pure core: birth date, birth time and the
//! current instant in, a fully materialised [`engine::CalculationResult`]
//! out. Everything else here feeds it input or shows its output.

pub mod age;
pub mod birth;
pub mod cli;
pub mod clipboard;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod render;
pub mod ticker;
pub mod weekday;
pub mod zodiac;

pub use age::AgeStats;
pub use birth::BirthInstant;
pub use engine::{CalculationResult, NextBirthdayCountdown, calculate_age, calculate_for};
pub use error::InputError;
pub use zodiac::ZodiacInfo;
