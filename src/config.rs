//! Validated run settings built from the command line.
//!
//! This is the input-collection layer: it rejects unparseable dates and birth
//! instants in the future before anything reaches the engine.

use std::time::Duration;

use chrono::NaiveDateTime;

use crate::birth::{BirthInstant, parse_birth_date};
use crate::cli::Cli;
use crate::clock::Clock;
use crate::error::InputError;
use crate::render::Theme;

pub const MIN_INTERVAL_MS: u64 = 100;

const INSTANT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Redraw the card every interval until interrupted
    Live,
    Once,
    Json,
    Summary,
    Copy,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub birth: BirthInstant,
    /// Fixed instant from `--now`; `None` means the system clock.
    pub now: Option<NaiveDateTime>,
    pub mode: Mode,
    pub theme: Option<Theme>,
    pub interval: Duration,
}

impl Settings {
    /// `clock` is only consulted for the future-birth check when `--now`
    /// was not given.
    pub fn from_cli(cli: &Cli, clock: &dyn Clock) -> Result<Self, InputError> {
        let date = parse_birth_date(&cli.date)?;
        let birth = BirthInstant::new(date, &cli.time);

        let now = cli.now.as_deref().map(parse_instant).transpose()?;
        let reference = now.unwrap_or_else(|| clock.now());
        if birth.instant() > reference {
            return Err(InputError::FutureBirthDate {
                birth: birth.instant(),
                now: reference,
            });
        }

        if cli.interval_ms < MIN_INTERVAL_MS {
            return Err(InputError::IntervalTooShort {
                millis: cli.interval_ms,
            });
        }

        let mode = if cli.json {
            Mode::Json
        } else if cli.summary {
            Mode::Summary
        } else if cli.copy {
            Mode::Copy
        } else if cli.once || now.is_some() {
            Mode::Once
        } else {
            Mode::Live
        };

        Ok(Self {
            birth,
            now,
            mode,
            theme: cli.theme,
            interval: Duration::from_millis(cli.interval_ms),
        })
    }
}

pub fn parse_instant(input: &str) -> Result<NaiveDateTime, InputError> {
    let trimmed = input.trim();
    INSTANT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| InputError::InvalidInstant {
            input: input.to_string(),
        })
}

/// Default `tracing` filter for a `-v` count; `RUST_LOG` overrides it.
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "agecalc=warn",
        1 => "agecalc=info",
        2 => "agecalc=debug",
        _ => "agecalc=trace",
    }
}
