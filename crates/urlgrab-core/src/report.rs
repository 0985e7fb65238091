//! JSON run report: one record per URL with its outcome.

use anyhow::{Context, Result};
use std::path::Path;

use crate::dispatcher::DispatchReport;

/// Write `report` as pretty JSON to `path` (creates parent dir if needed).
pub fn write_report(path: &Path, report: &DispatchReport) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create dir: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(report).context("serialize run report")?;
    std::fs::write(path, json).with_context(|| format!("write run report: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::{OverallStatus, RunSummary};

    #[test]
    fn writes_status_and_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");
        let report = DispatchReport {
            status: OverallStatus::NoUrlProvided,
            summary: RunSummary::new(0),
        };
        write_report(&path, &report).unwrap();

        let value: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(value["status"], "no_url_provided");
        assert_eq!(value["summary"]["total"], 0);
        assert!(value["summary"]["records"].as_array().unwrap().is_empty());
    }
}
