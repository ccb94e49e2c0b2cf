//! CLI for the refang defanged-URL converter.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use refang_core::config::{self, OutputFormat};

use commands::{run_check, run_convert};

/// Top-level CLI for the refang converter.
#[derive(Debug, Parser)]
#[command(name = "refang")]
#[command(
    about = "refang: turn defanged URLs from phishing reports back into clickable form",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Convert defanged URLs (reads stdin, one per line, when none are given).
    Convert {
        /// Defanged URLs to convert.
        urls: Vec<String>,

        /// Print each result as a JSON object instead of plain text.
        #[arg(long)]
        json: bool,

        /// Exit non-zero if any converted URL fails validation.
        #[arg(long)]
        strict: bool,
    },

    /// Convert a single URL and require that it validates.
    Check {
        /// Defanged or plain URL to check.
        url: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Convert { urls, json, strict } => {
                // Flags win; the config file only supplies defaults.
                let json = json || cfg.output == OutputFormat::Json;
                let strict = strict || cfg.fail_on_invalid;
                run_convert(&urls, json, strict)?;
            }
            CliCommand::Check { url } => run_check(&url)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
