//! Start-up sequence shared by both binaries.
//!
//! 1. Load `.env` and parse arguments (clap handles `--help` / `--version`).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (defaults + file + env).
//! 4. Build the [`OutputManager`].
//!
//! The binary then dispatches to its command and hands the result to
//! [`finish`], which turns any [`CliError`] into a message and exit code.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult, report},
    logging::init_logging,
    output::OutputManager,
};

/// Everything a command needs once start-up succeeded.
pub struct Session {
    pub config: AppConfig,
    pub output: OutputManager,
}

/// Parse arguments, or the exit code to stop with.
///
/// `--help` and `--version` exit 0; argument errors exit 2.
pub fn parse<P: Parser>() -> Result<P, ExitCode> {
    // Missing .env is the normal case.
    let _ = dotenvy::dotenv();

    P::try_parse().map_err(|e| {
        let code = if e.use_stderr() { 2 } else { 0 };
        let _ = e.print();
        ExitCode::from(code)
    })
}

/// Initialise logging and load configuration.
pub fn init(global: &GlobalArgs) -> Result<Session, ExitCode> {
    if let Err(e) = init_logging(global) {
        eprintln!("Failed to initialise logging: {e}");
        return Err(ExitCode::from(1));
    }

    debug!(
        verbose = global.verbose,
        quiet = global.quiet,
        no_color = global.no_color,
        "CLI started"
    );

    let config = AppConfig::load(global.config.as_deref())
        .map_err(|e| report(CliError::config(e), global.verbose > 0, global.no_color))?;
    debug!(base_path = %config.project.base_path.display(), "Configuration loaded");

    let output = OutputManager::new(global, &config);
    Ok(Session { config, output })
}

/// Map a command result to the process exit code.
pub fn finish(result: CliResult<()>, global: &GlobalArgs, session: &Session) -> ExitCode {
    match result {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => report(e, global.verbose > 0, !session.output.supports_color()),
    }
}
