//! CLI command handlers.

mod commands;
mod scan;

pub use commands::{Cli, Commands};
pub use scan::{extract_lines, open_input, strip_lines};

use callsite_error::{CallsiteError, CallsiteErrorKind, CallsiteResult, DetectionConfig};
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, instrument};

/// Resolve the detection config from an explicit path or the default sources.
#[instrument(skip_all)]
pub fn load_config(path: Option<&Path>) -> CallsiteResult<DetectionConfig> {
    match path {
        Some(path) => DetectionConfig::from_file(path),
        None => DetectionConfig::load(),
    }
}

/// Execute a parsed command line.
pub fn run(cli: &Cli) -> CallsiteResult<()> {
    let config = load_config(cli.config.as_deref())?;
    let stdout = io::stdout().lock();

    match &cli.command {
        Commands::Extract { path, all } => {
            let input = open_input(path.as_deref())?;
            let matched = extract_lines(input, stdout, &config, *all)?;
            info!(matched, "Extract finished");
        }

        Commands::Strip { path } => {
            let input = open_input(path.as_deref())?;
            let stripped = strip_lines(input, stdout, &config)?;
            info!(stripped, "Strip finished");
        }

        Commands::Config => {
            let rendered = config.to_toml()?;
            let mut stdout = stdout;
            stdout.write_all(rendered.as_bytes()).map_err(|e| {
                CallsiteError::new(CallsiteErrorKind::Io {
                    path: "-".into(),
                    message: e.to_string(),
                })
            })?;
        }
    }

    Ok(())
}
