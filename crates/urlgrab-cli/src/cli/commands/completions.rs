//! `urlgrab completions <shell>` – print shell completions.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::{Cli, ExitStatus};

pub fn run_completions(shell: Shell) -> Result<ExitStatus> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "urlgrab", &mut std::io::stdout());
    Ok(ExitStatus::Normal)
}
