//! `urlgrab run [config]` – download every URL in the config concurrently.

use anyhow::Result;
use std::path::Path;
use urlgrab_core::config::{self, DEFAULT_CONFIG_FILENAME};
use urlgrab_core::report::write_report;
use urlgrab_core::{DispatchReport, Dispatcher, DownloadOutcome, OverallStatus, UrlDownloader};

use crate::cli::ExitStatus;

pub fn run_download(config_path: Option<&Path>, report_path: Option<&Path>) -> Result<ExitStatus> {
    let config_path = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILENAME));
    let cfg = match config::load(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("{}", e);
            return Ok(ExitStatus::MissingConfiguration);
        }
    };
    tracing::debug!("loaded config: {:?}", cfg);

    let dispatcher = Dispatcher::new(UrlDownloader::new(cfg.transfer.to_options()));
    let report = dispatcher.dispatch(&cfg.output_dir, &cfg.urls);

    if let Some(path) = report_path {
        write_report(path, &report)?;
        tracing::info!("run report written to {}", path.display());
    }
    for line in summary_lines(&report) {
        println!("{}", line);
    }
    Ok(report.status.into())
}

fn summary_lines(report: &DispatchReport) -> Vec<String> {
    if report.status == OverallStatus::NoUrlProvided {
        return vec!["No URL was provided in config file.".to_string()];
    }
    let mut lines = vec![format!("{:<10} {}", "STATUS", "TARGET / URL")];
    for record in &report.summary.records {
        let line = match &record.outcome {
            DownloadOutcome::Completed { path, .. } => format!("{:<10} {}", "ok", path.display()),
            DownloadOutcome::IoError { kind, .. } => {
                format!("{:<10} {} ({})", "failed", record.url, kind)
            }
            DownloadOutcome::UrlError { .. } => format!("{:<10} {}", "bad-url", record.url),
        };
        lines.push(line);
    }
    lines.push(format!(
        "{} of {} downloads completed.",
        report.summary.completed(),
        report.summary.total
    ));
    lines
}
