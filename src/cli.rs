use clap::{ArgAction, Parser};

use crate::render::Theme;

/// agecalc - exact age, next-birthday countdown and zodiac sign
#[derive(Parser, Debug)]
#[command(name = "agecalc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Birth date (YYYY-MM-DD)
    #[arg(env = "AGECALC_BIRTH_DATE")]
    pub date: String,

    /// Birth time (HH:MM, 24-hour); malformed values count as midnight
    #[arg(env = "AGECALC_BIRTH_TIME", default_value = "00:00")]
    pub time: String,

    /// Compute for this instant instead of the system clock (YYYY-MM-DDTHH:MM[:SS]); implies --once
    #[arg(long)]
    pub now: Option<String>,

    /// Print the card once and exit
    #[arg(long)]
    pub once: bool,

    /// Print the result as JSON and exit
    #[arg(long, conflicts_with_all = ["summary", "copy"])]
    pub json: bool,

    /// Print only the one-line summary and exit
    #[arg(long, conflicts_with = "copy")]
    pub summary: bool,

    /// Copy the one-line summary to the clipboard and exit
    #[arg(long)]
    pub copy: bool,

    /// Colour theme (defaults to the terminal's background)
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Refresh interval for the live card, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub interval_ms: u64,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
