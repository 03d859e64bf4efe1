//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// callsite - find and strip `file:line:` locations in error output
#[derive(Parser, Debug)]
#[command(name = "callsite")]
#[command(about = "Find and strip file:line: locations in error output", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Detection config file (defaults to bundled + user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print `file<TAB>line` for each line carrying a location prefix
    Extract {
        /// Input file, standard input if omitted
        path: Option<PathBuf>,

        /// Also print an empty record for lines without a location
        #[arg(long)]
        all: bool,
    },

    /// Print each line with its location prefix removed
    Strip {
        /// Input file, standard input if omitted
        path: Option<PathBuf>,
    },

    /// Print the effective detection configuration as TOML
    Config,
}
