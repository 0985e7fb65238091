pub mod config;
pub mod dispatcher;
pub mod downloader;
pub mod logging;
pub mod report;
pub mod task;
pub mod url_model;

pub use dispatcher::{DispatchReport, Dispatcher, OverallStatus, RunSummary, TaskRecord};
pub use downloader::{Downloader, TransferOptions, UrlDownloader};
pub use task::{DownloadOutcome, DownloadTask, FailureKind};
pub use url_model::{derive_path, DerivedPath, UrlError};
