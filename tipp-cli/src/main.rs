//! # Tipp CLI - Interactive Tip Calculator TUI
//!
//! A terminal front-end for the `tipp` calculator: one form screen with a
//! bill field, a 0-100% tip slider, a custom tip field and a currency
//! picker, plus a live total that updates on every keystroke.
//!
//! ## Usage
//! ```bash
//! # Run the calculator
//! tipp-cli
//!
//! # Start with the symbol pre-set to Euro
//! tipp-cli --currency EUR
//!
//! # With file logging to logs/ (the TUI owns the terminal, so logs never
//! # go to the console)
//! tipp-cli --log
//! ```

use clap::Parser;

use tipp::prelude::Currency;

mod tui;

use tui::{handle_events, ui, App};

/// Interactive tip calculator
#[derive(Parser, Debug)]
#[command(name = "tipp-cli")]
#[command(author = "tipprs contributors")]
#[command(version)]
#[command(about = "Terminal tip calculator with percentage and custom tips", long_about = None)]
struct Args {
    /// Enable file logging to logs/ directory
    #[arg(long, default_value = "false")]
    log: bool,

    /// Currency to pre-select: USD, EUR or TRY
    #[arg(long)]
    currency: Option<Currency>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // NOTE: while the TUI runs it owns the terminal, so tracing may only
    // write to a file; without --log it stays uninitialized.
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>;

    if args.log {
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        std::fs::create_dir_all("logs")?;

        let file_appender = tracing_appender::rolling::daily("logs", "tipp.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        _file_guard = Some(guard);

        let env_filter = tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("tipp=debug".parse().unwrap())
            .add_directive("tipp_cli=debug".parse().unwrap());

        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(file_layer)
            .init();

        tracing::info!("--- Tipp session started [{}] ---", chrono::Utc::now());
    } else {
        _file_guard = None;
    }

    run_tui(args)
}

/// Run the TUI application
fn run_tui(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(args.currency.unwrap_or_default());

    // Initialize terminal
    let mut terminal = ratatui::init();

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main application loop
fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Draw the UI
        terminal.draw(|frame| ui(frame, app))?;

        // Handle events
        if handle_events(app)? {
            break;
        }
    }

    Ok(())
}
