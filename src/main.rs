use std::process::ExitCode;

use anyhow::Context;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use passgen::{Outcome, exits, terminal, tui};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn session() -> anyhow::Result<()> {
    let outcome = tui::run_stdio().context("password session ended early")?;
    if outcome == Outcome::NoCharacterTypeSelected {
        debug!("finished without a password");
    }
    Ok(())
}

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();
    init_logging();

    match session() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The prompt that was waiting for input has no newline yet.
            terminal::print_error(&format!("\nError: {e:#}"));
            ExitCode::FAILURE
        }
    }
}
