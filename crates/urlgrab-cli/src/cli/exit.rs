//! Process exit status reported to the environment.

use urlgrab_core::OverallStatus;

/// How a run ended. Any other failure exits with 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Config found and every URL processed.
    Normal,
    /// The config file could not be located or read.
    MissingConfiguration,
    /// Config found but it lists no URL.
    NoUrlProvided,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Normal => 0,
            ExitStatus::MissingConfiguration => 2,
            ExitStatus::NoUrlProvided => 3,
        }
    }
}

impl From<OverallStatus> for ExitStatus {
    fn from(status: OverallStatus) -> Self {
        match status {
            OverallStatus::Normal => ExitStatus::Normal,
            OverallStatus::NoUrlProvided => ExitStatus::NoUrlProvided,
        }
    }
}
