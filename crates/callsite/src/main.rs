//! callsite CLI binary.
//!
//! - List `file:line` locations found in error output
//! - Strip location prefixes from error output
//! - Show the effective detection configuration

use callsite::Cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    callsite::run(&cli)?;

    Ok(())
}
