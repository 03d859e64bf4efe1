//! Tests for the line scanning commands.

use callsite::cli::open_input;
use callsite::{Cli, Commands, extract_lines, load_config, strip_lines};
use callsite_error::{CallsiteErrorKind, DetectionConfig, inject};
use clap::Parser;
use std::io::{Cursor, Write};
use tempfile::Builder;

const LOG: &str = "\
example.go:123: something went wrong
plain line without location
main.rs:45: another: error
example.go: single colon
";

fn run_extract(input: &str, all: bool) -> (usize, String) {
    let mut output = Vec::new();
    let matched =
        extract_lines(Cursor::new(input), &mut output, &DetectionConfig::default(), all).unwrap();
    (matched, String::from_utf8(output).unwrap())
}

#[test]
fn test_extract_lists_only_located_lines() {
    let (matched, output) = run_extract(LOG, false);
    assert_eq!(matched, 2);
    assert_eq!(output, "example.go\t123\nmain.rs\t45\n");
}

#[test]
fn test_extract_all_keeps_line_alignment() {
    let (matched, output) = run_extract(LOG, true);
    assert_eq!(matched, 2);
    assert_eq!(output, "example.go\t123\n\nmain.rs\t45\n\n");
}

#[test]
fn test_extract_reads_injected_errors() {
    let err = inject("broken pipe");
    let (matched, output) = run_extract(&format!("{}\n", err), false);
    assert_eq!(matched, 1);
    assert!(output.starts_with("scan_test.rs\t"));
}

#[test]
fn test_strip_removes_prefixes() {
    let mut output = Vec::new();
    let stripped =
        strip_lines(Cursor::new(LOG), &mut output, &DetectionConfig::default()).unwrap();

    assert_eq!(stripped, 2);
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "something went wrong\nplain line without location\nanother: error\nexample.go: single colon\n"
    );
}

#[test]
fn test_open_missing_input_is_io_error() {
    let err = open_input(Some("/definitely/not/here.log".as_ref())).err().unwrap();
    assert!(matches!(err.kind(), CallsiteErrorKind::Io { .. }));
}

#[test]
fn test_open_input_reads_file() {
    let mut temp_file = Builder::new().suffix(".log").tempfile().unwrap();
    write!(temp_file, "{}", LOG).unwrap();

    let input = open_input(Some(temp_file.path())).unwrap();
    let mut output = Vec::new();
    let matched = extract_lines(input, &mut output, &DetectionConfig::default(), false).unwrap();
    assert_eq!(matched, 2);
}

#[test]
fn test_load_config_from_explicit_path() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(temp_file, "[detection]\nsource_suffixes = [\"log\"]").unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert!(config.is_source_file("app.log"));
    assert!(!config.is_source_file("main.rs"));
}

#[test]
fn test_cli_parses_extract_with_global_flags() {
    let cli = Cli::parse_from(["callsite", "extract", "errors.log", "--all", "--verbose"]);
    assert!(cli.verbose);
    match cli.command {
        Commands::Extract { path, all } => {
            assert_eq!(path.unwrap().to_str(), Some("errors.log"));
            assert!(all);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_cli_parses_strip_from_stdin() {
    let cli = Cli::parse_from(["callsite", "--config", "custom.toml", "strip"]);
    assert_eq!(cli.config.unwrap().to_str(), Some("custom.toml"));
    assert!(matches!(cli.command, Commands::Strip { path: None }));
}
