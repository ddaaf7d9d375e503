//! Contact Book - Main entry point
//!
//! Starts the interactive shell on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_book::{run_shell, CommandContext, Config, JsonFileRepository};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only, stdout is the prompt)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using address book at {}", config.book_path.display());

    let repository = JsonFileRepository::new(config.book_path.clone());
    let mut context = match CommandContext::load(config, Box::new(repository)) {
        Ok(context) => context,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    let stdin = io::stdin();
    run_shell(&mut context, stdin.lock(), io::stdout())?;

    info!("Contact book closed");
    Ok(())
}
