//! CLI for urlgrab.

mod commands;
mod exit;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_completions, run_derive, run_download, run_man};
pub use exit::ExitStatus;

/// Top-level CLI for urlgrab.
#[derive(Debug, Parser)]
#[command(name = "urlgrab")]
#[command(
    about = "urlgrab: download a list of URLs concurrently into URL-derived files",
    long_about = None
)]
pub struct Cli {
    /// Write logs to ~/.local/state/urlgrab/urlgrab.log instead of stderr.
    #[arg(long, global = true)]
    pub log_file: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every URL listed in a config file.
    Run {
        /// Path to the TOML config (default: ./urlgrab.toml).
        config: Option<PathBuf>,
        /// Also write per-URL outcomes as JSON to this file.
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
    },

    /// Print the output filename each URL would be saved under.
    Derive {
        /// URLs to derive names for.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Generate shell completions on stdout.
    Completions {
        shell: clap_complete::Shell,
    },

    /// Render the man page (roff) on stdout.
    Man,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    pub fn run(self) -> Result<ExitStatus> {
        match self.command {
            CliCommand::Run { config, report } => {
                run_download(config.as_deref(), report.as_deref())
            }
            CliCommand::Derive { urls } => run_derive(&urls),
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man(),
        }
    }
}

#[cfg(test)]
mod tests;
