//! Length Converter TUI - Main entry point
//!
//! Launches the interactive converter screen, or runs one of the headless
//! subcommands.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use strum::IntoEnumIterator;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use lengthtui::app::App;
use lengthtui::cli::{Cli, Commands};
use lengthtui::config_file::ConverterConfig;
use lengthtui::converter;
use lengthtui::error::{LengthTuiError, Result};
use lengthtui::types::Unit;

/// Initialize logging.
///
/// With a log file everything at `info` and above goes there. Headless
/// commands log warnings to stderr. The interactive screen without a log file
/// installs no subscriber so nothing is written over the alternate screen.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter("info"))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None if !interactive => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter("warn"))
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

/// `RUST_LOG` overrides the default level
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Main application entry point
fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();

    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    init_logging(cli.log_file.as_deref(), interactive)?;
    info!("Length converter starting up");
    debug!("CLI arguments parsed: {:?}", cli);

    let config = ConverterConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        None | Some(Commands::Tui) => {
            info!("Launching interactive converter");
            run_tui(&config)?;
        }
        Some(Commands::Convert {
            value,
            from,
            to,
            json,
        }) => match run_convert(&value, from, to, json) {
            Ok(()) => {}
            Err(LengthTuiError::Conversion(e)) => {
                error!("Conversion rejected: {:?}", value);
                eprintln!("Warning: {}", e);
                std::process::exit(1);
            }
            Err(e) => return Err(e.into()),
        },
        Some(Commands::Units) => print_units(),
        Some(Commands::InitConfig { path }) => {
            config.save_to_file(&path)?;
            info!("Configuration written to {:?}", path);
            println!("Configuration written to {}", path.display());
        }
    }

    Ok(())
}

/// Run the interactive converter screen
fn run_tui(config: &ConverterConfig) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| LengthTuiError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen).map_err(|e| {
        LengthTuiError::terminal(format!("Failed to enter alternate screen: {}", e))
    })?;

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(|e| LengthTuiError::terminal(format!("Failed to create terminal: {}", e)))
        .and_then(|mut terminal| {
            let mut app = App::new(config);
            let result = app.run(&mut terminal);
            let _ = terminal.show_cursor();
            result
        });

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result
}

/// Headless single conversion
fn run_convert(value: &str, from: Unit, to: Unit, json: bool) -> Result<()> {
    let outcome = converter::convert(value, from, to)?;
    info!("Converted {:?} {} -> {}", value, from, to);

    if json {
        let payload = serde_json::json!({
            "display": outcome.display,
            "record": outcome.record,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", outcome.display);
    }
    Ok(())
}

/// Print the supported units
fn print_units() {
    for unit in Unit::iter() {
        println!("{:<12} {:<18} {}", unit.to_string(), unit.label(), unit.factor());
    }
}
