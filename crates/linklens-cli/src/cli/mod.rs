//! CLI for the linklens content URL classifier.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use linklens_core::config::{self, OutputFormat};
use std::path::PathBuf;

use commands::{run_analyze, run_batch, run_completions, run_providers};

/// Top-level CLI for the linklens content URL classifier.
#[derive(Debug, Parser)]
#[command(name = "linklens")]
#[command(about = "linklens: classify content URLs for embedding", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify a single content URL.
    Analyze {
        /// URL to classify.
        url: String,

        /// Print the result as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Classify URLs from a file, one per line.
    Batch {
        /// Path to the URL list (blank lines and #-comments are skipped).
        path: PathBuf,

        /// Print results as a JSON array instead of a table.
        #[arg(long)]
        json: bool,

        /// Abort at the first invalid URL.
        #[arg(long)]
        stop_on_invalid: bool,
    },

    /// List recognized providers and their embedding capability.
    Providers,

    /// Generate a shell completion script on stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Analyze { url, json } => {
                run_analyze(&url, json || cfg.output_format == OutputFormat::Json)
            }
            CliCommand::Batch {
                path,
                json,
                stop_on_invalid,
            } => run_batch(
                &path,
                json || cfg.output_format == OutputFormat::Json,
                stop_on_invalid || cfg.batch_stop_on_invalid,
            ),
            CliCommand::Providers => run_providers(),
            CliCommand::Completions { shell } => run_completions(shell),
        }
    }
}

#[cfg(test)]
mod tests;
