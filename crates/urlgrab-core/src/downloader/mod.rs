//! One-shot URL → file downloader.
//!
//! Derives the target name from the URL, streams the body into
//! `<output_dir>/<derived name>` and classifies the result. A failed transfer
//! never leaves a partial file behind.

mod error;
mod transfer;

pub use error::{classify, classify_curl_error, TransferError};
pub use transfer::{fetch_to_file, TransferOptions};

use std::io;
use std::path::Path;
use std::time::Instant;

use crate::task::{DownloadOutcome, DownloadTask};
use crate::url_model::derive_path;

/// Performs one download task. Implementations run on their own thread, one per task.
pub trait Downloader: Sync {
    fn download(&self, task: DownloadTask) -> DownloadOutcome;
}

/// libcurl-backed downloader speaking whatever scheme the URL declares.
#[derive(Debug, Clone, Default)]
pub struct UrlDownloader {
    opts: TransferOptions,
}

impl UrlDownloader {
    pub fn new(opts: TransferOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &TransferOptions {
        &self.opts
    }
}

impl Downloader for UrlDownloader {
    fn download(&self, task: DownloadTask) -> DownloadOutcome {
        let derived = match derive_path(&task.source_url) {
            Ok(d) => d,
            Err(error) => {
                tracing::error!(
                    url = %task.source_url,
                    "unable to generate output file: {}",
                    error
                );
                return DownloadOutcome::UrlError { error };
            }
        };
        let target = derived.under(&task.output_dir);

        let started = Instant::now();
        tracing::info!(url = %task.source_url, target = %target.display(), "start downloading");

        match fetch_to_file(&task.source_url, &target, &self.opts) {
            Ok(bytes) => {
                let elapsed_ms = started.elapsed().as_millis() as u64;
                tracing::info!(
                    url = %task.source_url,
                    bytes,
                    "download complete ({}ms)",
                    elapsed_ms
                );
                DownloadOutcome::Completed {
                    path: target,
                    bytes,
                    elapsed_ms,
                }
            }
            Err(e) => {
                let kind = classify(&e);
                tracing::error!(
                    url = %task.source_url,
                    %kind,
                    "problem occurred while downloading: {}",
                    e
                );
                remove_partial(&target);
                DownloadOutcome::IoError {
                    path: Some(target),
                    kind,
                    message: e.to_string(),
                }
            }
        }
    }
}

/// Best-effort removal of a partially written target. Failures are only logged.
pub fn remove_partial(target: &Path) {
    tracing::info!("cleaning up: {}", target.display());
    match std::fs::remove_file(target) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("could not remove {}: {}", target.display(), e),
    }
}
