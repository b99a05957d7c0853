//! Tests for the remaining subcommands.

use super::parse;
use crate::cli::CliCommand;
use clap_complete::Shell;

#[test]
fn cli_parse_providers() {
    match parse(&["linklens", "providers"]) {
        CliCommand::Providers => {}
        _ => panic!("expected Providers"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["linklens", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_unknown_subcommand_fails() {
    use clap::Parser;
    assert!(crate::cli::Cli::try_parse_from(["linklens", "download"]).is_err());
}
