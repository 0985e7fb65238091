//! Per-URL work item and its terminal outcome.

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::url_model::UrlError;

/// One URL to fetch into one output directory. Moved into the unit that runs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    pub source_url: String,
    pub output_dir: PathBuf,
}

impl DownloadTask {
    pub fn new(source_url: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_url: source_url.into(),
            output_dir: output_dir.into(),
        }
    }
}

/// Classification of an I/O failure, for logs and the run report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Connect or read stall timeout.
    Timeout,
    /// DNS, refused connection, reset, truncated body.
    Connection,
    /// Non-2xx response from an HTTP(S) server.
    HttpStatus(u32),
    /// Creating or writing the target file failed.
    Storage,
    /// The download unit panicked.
    Panicked,
    Other,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Connection => write!(f, "connection"),
            FailureKind::HttpStatus(code) => write!(f, "HTTP {}", code),
            FailureKind::Storage => write!(f, "storage"),
            FailureKind::Panicked => write!(f, "panicked"),
            FailureKind::Other => write!(f, "other"),
        }
    }
}

/// Terminal result of one download attempt. Exactly one per task; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DownloadOutcome {
    /// Body fully written to `path`.
    Completed {
        path: PathBuf,
        bytes: u64,
        elapsed_ms: u64,
    },
    /// Transfer or filesystem failure; the partial file (if any) was removed.
    IoError {
        path: Option<PathBuf>,
        kind: FailureKind,
        message: String,
    },
    /// The URL was rejected before any I/O.
    UrlError {
        #[serde(serialize_with = "serialize_display")]
        error: UrlError,
    },
}

impl DownloadOutcome {
    /// Target path, when one was derived.
    pub fn path(&self) -> Option<&Path> {
        match self {
            DownloadOutcome::Completed { path, .. } => Some(path),
            DownloadOutcome::IoError { path, .. } => path.as_deref(),
            DownloadOutcome::UrlError { .. } => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, DownloadOutcome::Completed { .. })
    }

    pub fn is_io_error(&self) -> bool {
        matches!(self, DownloadOutcome::IoError { .. })
    }

    pub fn is_url_error(&self) -> bool {
        matches!(self, DownloadOutcome::UrlError { .. })
    }
}

fn serialize_display<T: fmt::Display, S: Serializer>(value: &T, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_accessor() {
        let done = DownloadOutcome::Completed {
            path: PathBuf::from("/out/a_com_x"),
            bytes: 3,
            elapsed_ms: 1,
        };
        assert_eq!(done.path(), Some(Path::new("/out/a_com_x")));

        let failed = DownloadOutcome::IoError {
            path: None,
            kind: FailureKind::Panicked,
            message: "boom".into(),
        };
        assert_eq!(failed.path(), None);
        assert!(failed.is_io_error());
    }

    #[test]
    fn outcome_serializes_tagged() {
        let outcome = DownloadOutcome::IoError {
            path: Some(PathBuf::from("/out/a_com_x")),
            kind: FailureKind::HttpStatus(404),
            message: "HTTP 404".into(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "io_error");
        assert_eq!(json["kind"]["http_status"], 404);
        assert_eq!(json["path"], "/out/a_com_x");
    }

    #[test]
    fn url_error_serializes_as_message() {
        let outcome = DownloadOutcome::UrlError {
            error: UrlError::NoHost {
                url: "mailto:x@y".into(),
            },
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "url_error");
        assert_eq!(json["error"], "cannot resolve host: mailto:x@y");
    }
}
