//! Fan-out of one download unit per URL and join of all outcomes.
//!
//! Every URL gets its own OS thread, started eagerly with no cap. Outcomes come
//! back over a channel; the call returns only after every thread has been
//! joined. Per-URL failures never fail the run.

use serde::Serialize;
use std::any::Any;
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use crate::downloader::Downloader;
use crate::task::{DownloadOutcome, DownloadTask, FailureKind};

/// Status of a whole dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    /// Every URL was processed (individual downloads may still have failed).
    Normal,
    /// The URL list was empty; nothing was started.
    NoUrlProvided,
}

/// Outcome of one URL, tagged with its position in the input list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRecord {
    pub index: usize,
    pub url: String,
    #[serde(flatten)]
    pub outcome: DownloadOutcome,
}

/// Aggregate state of one dispatch: how many units were started and which finished.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub records: Vec<TaskRecord>,
}

impl RunSummary {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            records: Vec::with_capacity(total),
        }
    }

    fn record(&mut self, index: usize, url: &str, outcome: DownloadOutcome) {
        debug_assert!(self.records.len() < self.total);
        self.records.push(TaskRecord {
            index,
            url: url.to_string(),
            outcome,
        });
    }

    /// Units started but not yet recorded.
    pub fn outstanding(&self) -> usize {
        self.total - self.records.len()
    }

    pub fn is_terminal(&self) -> bool {
        self.outstanding() == 0
    }

    pub fn completed(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_completed()).count()
    }

    pub fn failed(&self) -> usize {
        self.records.len() - self.completed()
    }

    /// Record for the URL at input position `index`.
    pub fn get(&self, index: usize) -> Option<&TaskRecord> {
        self.records.iter().find(|r| r.index == index)
    }
}

/// Status plus per-URL records of a finished dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    pub status: OverallStatus,
    pub summary: RunSummary,
}

/// Runs one `Downloader` unit per URL and waits for all of them.
pub struct Dispatcher<D> {
    downloader: D,
}

impl<D: Downloader> Dispatcher<D> {
    pub fn new(downloader: D) -> Self {
        Self { downloader }
    }

    pub fn downloader(&self) -> &D {
        &self.downloader
    }

    /// Downloads every URL into `output_dir` concurrently and reports the overall status.
    pub fn run(&self, output_dir: &Path, urls: &[String]) -> OverallStatus {
        self.dispatch(output_dir, urls).status
    }

    /// Like [`run`](Self::run) but also returns every per-URL outcome, sorted by input position.
    pub fn dispatch(&self, output_dir: &Path, urls: &[String]) -> DispatchReport {
        if urls.is_empty() {
            tracing::info!("No URL was provided.");
            return DispatchReport {
                status: OverallStatus::NoUrlProvided,
                summary: RunSummary::new(0),
            };
        }

        let mut summary = RunSummary::new(urls.len());
        let mut seen = vec![false; urls.len()];
        let downloader = &self.downloader;
        let (tx, rx) = mpsc::channel::<(usize, DownloadOutcome)>();

        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(urls.len());
            for (index, url) in urls.iter().enumerate() {
                let tx = tx.clone();
                let task = DownloadTask::new(url.clone(), output_dir);
                let spawned = thread::Builder::new()
                    .name(format!("urlgrab-dl-{}", index))
                    .spawn_scoped(scope, move || {
                        let outcome = downloader.download(task);
                        let _ = tx.send((index, outcome));
                    });
                match spawned {
                    Ok(handle) => handles.push((index, handle)),
                    Err(e) => {
                        tracing::error!(url = %url, "could not start download thread: {}", e);
                        seen[index] = true;
                        summary.record(
                            index,
                            url,
                            DownloadOutcome::IoError {
                                path: None,
                                kind: FailureKind::Other,
                                message: format!("could not start download thread: {}", e),
                            },
                        );
                    }
                }
            }
            drop(tx);

            // Ends once every unit has sent its outcome or died without one.
            for (index, outcome) in rx {
                seen[index] = true;
                summary.record(index, &urls[index], outcome);
            }

            for (index, handle) in handles {
                if let Err(payload) = handle.join() {
                    let message = panic_message(payload.as_ref());
                    tracing::error!(url = %urls[index], "download unit panicked: {}", message);
                    if !seen[index] {
                        seen[index] = true;
                        summary.record(
                            index,
                            &urls[index],
                            DownloadOutcome::IoError {
                                path: None,
                                kind: FailureKind::Panicked,
                                message,
                            },
                        );
                    }
                }
            }
        });

        summary.records.sort_by_key(|r| r.index);
        tracing::info!(
            completed = summary.completed(),
            failed = summary.failed(),
            "All files have been processed."
        );
        DispatchReport {
            status: OverallStatus::Normal,
            summary,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
