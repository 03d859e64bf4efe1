//! Command-line scanning of `file:line:` locations in error output.
//!
//! The binary reads log or error output line by line and either lists the
//! locations it finds or strips them, using the detection rules of
//! [`callsite_error`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;

pub use cli::{Cli, Commands, extract_lines, load_config, run, strip_lines};
