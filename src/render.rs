use crate::age::summary;
use crate::engine::CalculationResult;
use crate::weekday::long_date;

const MIN_ROW_CHARS: usize = 44;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Theme {
    Dark,
    Light,
    /// No colour escapes at all (pipes, files)
    Plain,
}

pub struct ThemeColors {
    pub text: &'static str,
    pub key: &'static str,
    pub value: &'static str,
    pub cc: &'static str,
    pub reset: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                text: "\x1b[38;5;252m",
                key: "\x1b[38;5;215m",
                value: "\x1b[38;5;153m",
                cc: "\x1b[38;5;243m",
                reset: "\x1b[0m",
            },
            Theme::Light => ThemeColors {
                text: "\x1b[38;5;235m",
                key: "\x1b[38;5;160m",
                value: "\x1b[38;5;26m",
                cc: "\x1b[38;5;244m",
                reset: "\x1b[0m",
            },
            Theme::Plain => ThemeColors {
                text: "",
                key: "",
                value: "",
                cc: "",
                reset: "",
            },
        }
    }

    /// Picks a theme from the terminal's `COLORFGBG` hint ("fg;bg", where a
    /// background of 7 or 15 means a light terminal). Non-terminals get
    /// [`Theme::Plain`].
    pub fn detect(colorfgbg: Option<&str>, is_terminal: bool) -> Theme {
        if !is_terminal {
            return Theme::Plain;
        }

        let background = colorfgbg
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());

        match background {
            Some(7) | Some(15) => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

// Utilities for building the card

/// `1234567` -> `1,234,567`
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = key_part.chars().count() + value.chars().count();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => ".".repeat(n),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.chars().count()) + 2;
    format!("{base}{}", "-".repeat(dash_count))
}

enum Line {
    Header(&'static str),
    Blank,
    Stat(&'static str, String),
}

/// Renders the result as a text card with dotted, aligned rows.
pub fn render_card(result: &CalculationResult, theme: Theme) -> String {
    let colors = theme.colors();
    let age = &result.age;
    let next = &result.next_birthday;

    let lines = vec![
        Line::Header("age"),
        Line::Stat(
            "Age",
            format!("{} years, {} months, {} days", age.years, age.months, age.days),
        ),
        Line::Stat("Months", group_thousands(i64::from(age.total_months))),
        Line::Stat("Weeks", group_thousands(age.total_weeks)),
        Line::Stat("Days", group_thousands(age.total_days)),
        Line::Stat("Hours", group_thousands(age.total_hours)),
        Line::Stat("Minutes", group_thousands(age.total_minutes)),
        Line::Stat("Seconds", group_thousands(age.total_seconds)),
        Line::Blank,
        Line::Header("- Next birthday"),
        Line::Stat("Date", long_date(next.target_instant.date())),
        Line::Stat(
            "Countdown",
            format!(
                "{}d {:02}h {:02}m {:02}s",
                next.days, next.hours, next.minutes, next.seconds
            ),
        ),
        Line::Blank,
        Line::Header("- Born"),
        Line::Stat("Weekday", result.day_of_birth.to_string()),
        Line::Stat(
            "At",
            result.date_of_birth.format("%Y-%m-%d %H:%M").to_string(),
        ),
        Line::Stat(
            "Zodiac",
            format!(
                "{} {} ({})",
                result.zodiac.symbol, result.zodiac.name, result.zodiac.date_range
            ),
        ),
    ];

    let align_width = lines
        .iter()
        .filter_map(|line| match line {
            Line::Stat(k, v) => Some(k.len() + 2 + v.chars().count()),
            _ => None,
        })
        .max()
        .unwrap_or(0)
        .max(MIN_ROW_CHARS);

    let mut out = String::new();
    for line in &lines {
        match line {
            Line::Blank => out.push('\n'),
            Line::Header(label) => {
                out.push_str(&format!(
                    "{}{}{}\n",
                    colors.text,
                    build_header_line(label, align_width),
                    colors.reset
                ));
            }
            Line::Stat(key, value) => {
                let (k, d, v) = build_stat_row(key, value, align_width);
                out.push_str(&format!(
                    "{cc}. {key}{k}{cc}{d}{value}{v}{reset}\n",
                    cc = colors.cc,
                    key = colors.key,
                    value = colors.value,
                    reset = colors.reset,
                ));
            }
        }
    }

    out.push('\n');
    out.push_str(&summary(age));
    out.push('\n');
    out
}
