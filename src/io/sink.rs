//! Report output collaborator (JSON sink).

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::ExtractionReport;
use crate::{Error, Result};

/// Receives the aggregate report, one per run.
pub trait ReportSink {
    /// Persists the report.
    ///
    /// # Errors
    ///
    /// Returns an error when the report cannot be serialized or written.
    fn write(&self, report: &ExtractionReport) -> Result<()>;
}

/// Writes the report as pretty-printed JSON to a file.
///
/// The schema is stable across runs so downstream tooling can diff
/// successive reports.
#[derive(Debug, Clone)]
pub struct JsonReportSink {
    path: PathBuf,
}

impl JsonReportSink {
    /// Creates a sink writing to the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The output path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads a previously written report.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<ExtractionReport> {
        let contents = fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: "read_report".to_string(),
            cause: format!("{}: {e}", path.display()),
        })?;
        serde_json::from_str(&contents).map_err(|e| Error::OperationFailed {
            operation: "parse_report".to_string(),
            cause: e.to_string(),
        })
    }
}

impl ReportSink for JsonReportSink {
    fn write(&self, report: &ExtractionReport) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| Error::OperationFailed {
                    operation: "create_report_dir".to_string(),
                    cause: format!("{}: {e}", parent.display()),
                })?;
            }
        }

        let json = serde_json::to_string_pretty(report).map_err(|e| Error::OperationFailed {
            operation: "serialize_report".to_string(),
            cause: e.to_string(),
        })?;
        fs::write(&self.path, json).map_err(|e| Error::OperationFailed {
            operation: "write_report".to_string(),
            cause: format!("{}: {e}", self.path.display()),
        })?;

        info!(path = %self.path.display(), files = report.summary.total_files, "report written");
        Ok(())
    }
}
