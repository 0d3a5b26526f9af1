//! Output formatter trait for CLI results.

use anyhow::Result;
use archcheck_core::ArchiveUnit;
use archcheck_core::ScanSummary;
use archcheck_core::VerificationResult;
use serde::Serialize;
use std::path::Path;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Announce the directory about to be scanned
    fn format_scan_start(&self, root: &Path);

    /// Announce the unit about to be verified
    fn format_unit_start(&self, unit: &ArchiveUnit);

    /// Format the outcome of one unit
    fn format_unit_result(&self, result: &VerificationResult);

    /// Format the final summary; `success` is the overall outcome
    fn format_summary(&self, summary: &ScanSummary, success: bool) -> Result<()>;

    /// Format error message
    fn format_error(&self, error: &anyhow::Error);

    /// Format warning message
    fn format_warning(&self, message: &str);

    /// Whether a progress spinner may be drawn alongside this output
    fn wants_progress(&self) -> bool;
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Failure,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn completed(operation: impl Into<String>, success: bool, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: if success {
                Status::Success
            } else {
                Status::Failure
            },
            data: Some(data),
            error: None,
        }
    }

    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> JsonOutput<()> {
        JsonOutput {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}
