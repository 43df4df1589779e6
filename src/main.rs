use clap::Parser;
use spendsort::args::{Args, Command};
use spendsort::{commands, Config, Result};
use std::io;
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = commands::write_error(&e, io::stderr().lock());
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

pub fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let config = Config::load(
        args.common().spendsort_home().path(),
        args.common().statement(),
    )?;

    // The statement must exist at startup. Later failures to read it are reported per action.
    commands::ensure_statement_exists(&config)?;

    match args.command() {
        Command::Menu => commands::menu(&config, io::stdin().lock(), io::stdout().lock())?,
        Command::Show => commands::show(&config).print()?,
        Command::Budget(budget_args) => commands::budget(&config, budget_args.amount()).print()?,
        Command::Summary => commands::summary(&config).print()?,
    }
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
