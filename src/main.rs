use std::io::{IsTerminal, Write};
use std::sync::Arc;

use agecalc::age::summary;
use agecalc::cli::Cli;
use agecalc::clipboard::{CopyOutcome, copy_to_clipboard};
use agecalc::clock::{Clock, FixedClock, SystemClock};
use agecalc::config::{Mode, Settings, log_filter};
use agecalc::engine::calculate_for;
use agecalc::render::{Theme, render_card};
use agecalc::ticker::Ticker;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Validate input before anything reaches the engine
    let system: Arc<dyn Clock> = Arc::new(SystemClock);
    let settings = Settings::from_cli(&cli, system.as_ref()).context("Invalid birth input")?;
    let clock: Arc<dyn Clock> = match settings.now {
        Some(now) => Arc::new(FixedClock(now)),
        None => system,
    };

    let stdout = std::io::stdout();
    let theme = settings.theme.unwrap_or_else(|| {
        Theme::detect(
            std::env::var("COLORFGBG").ok().as_deref(),
            stdout.is_terminal(),
        )
    });

    match settings.mode {
        Mode::Json => {
            let result = calculate_for(&settings.birth, clock.now());
            let json = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
            println!("{json}");
        }
        Mode::Summary => {
            let result = calculate_for(&settings.birth, clock.now());
            println!("{}", summary(&result.age));
        }
        Mode::Copy => {
            let result = calculate_for(&settings.birth, clock.now());
            match copy_to_clipboard(&summary(&result.age)) {
                CopyOutcome::Clipboard(program) => {
                    eprintln!("Copied to clipboard via {program}.");
                }
                CopyOutcome::Printed => eprintln!("No clipboard available; printed instead."),
            }
        }
        Mode::Once => {
            let result = calculate_for(&settings.birth, clock.now());
            print!("{}", render_card(&result, theme));
        }
        Mode::Live => run_live(&settings, clock, theme, stdout.is_terminal()).await?,
    }

    Ok(())
}

/// Redraws the card on every tick until Ctrl-C.
async fn run_live(
    settings: &Settings,
    clock: Arc<dyn Clock>,
    theme: Theme,
    redraw_in_place: bool,
) -> Result<()> {
    let ticker = Ticker::start(settings.birth, clock, settings.interval);
    let mut results = ticker.subscribe();
    let mut stdout = std::io::stdout();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let first = *results.borrow_and_update();
    draw(&mut stdout, &render_card(&first, theme), redraw_in_place)?;

    loop {
        tokio::select! {
            signal = &mut ctrl_c => {
                signal.context("Failed to listen for Ctrl-C")?;
                break;
            }
            changed = results.changed() => {
                if changed.is_err() {
                    break;
                }
                let result = *results.borrow_and_update();
                draw(&mut stdout, &render_card(&result, theme), redraw_in_place)?;
            }
        }
    }

    let ticks = ticker.stop().await;
    info!(ticks, "Live display closed");
    Ok(())
}

fn draw(out: &mut impl Write, card: &str, redraw_in_place: bool) -> Result<()> {
    if redraw_in_place {
        // Cursor home + clear screen
        write!(out, "\x1b[H\x1b[2J")?;
    }
    write!(out, "{card}")?;
    out.flush().context("Failed to write to stdout")?;
    Ok(())
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
