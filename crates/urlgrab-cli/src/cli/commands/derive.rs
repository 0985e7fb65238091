//! `urlgrab derive <url>...` – preview output names without downloading.

use anyhow::Result;
use urlgrab_core::url_model::derive_paths;

use crate::cli::ExitStatus;

pub fn run_derive(urls: &[String]) -> Result<ExitStatus> {
    for (url, derived) in derive_paths(urls.iter().map(String::as_str)) {
        match derived {
            Ok(name) => println!("{}\t{}", url, name),
            Err(e) => println!("{}\terror: {}", url, e),
        }
    }
    Ok(ExitStatus::Normal)
}
