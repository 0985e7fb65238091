//! `urlgrab man` – print the man page.

use anyhow::{Context, Result};
use clap::CommandFactory;

use crate::cli::{Cli, ExitStatus};

pub fn run_man() -> Result<ExitStatus> {
    let man = clap_mangen::Man::new(Cli::command());
    man.render(&mut std::io::stdout())
        .context("render man page")?;
    Ok(ExitStatus::Normal)
}
