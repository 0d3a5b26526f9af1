//! JSON output formatter for machine-readable results.
//!
//! Nothing is printed while the scan runs; the whole run is emitted as a
//! single document once it completes.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use archcheck_core::ArchiveUnit;
use archcheck_core::ScanSummary;
use archcheck_core::VerificationResult;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct ResultOutput {
    path: String,
    format: String,
    multi_volume: bool,
    tag: &'static str,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    duration_ms: u128,
}

impl From<&VerificationResult> for ResultOutput {
    fn from(result: &VerificationResult) -> Self {
        Self {
            path: result.path.display().to_string(),
            format: result.format.tag().to_string(),
            multi_volume: result.multi_volume,
            tag: result.tag(),
            status: result.status.to_string().to_lowercase(),
            message: result.message.clone(),
            duration_ms: result.duration.as_millis(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ScanOutput {
    root: String,
    passed: usize,
    failed: usize,
    unavailable: usize,
    results: Vec<ResultOutput>,
    failed_archives: Vec<String>,
    warnings: Vec<String>,
}

impl From<&ScanSummary> for ScanOutput {
    fn from(summary: &ScanSummary) -> Self {
        Self {
            root: summary.root.display().to_string(),
            passed: summary.passed(),
            failed: summary.failed(),
            unavailable: summary.unavailable(),
            results: summary.results.iter().map(ResultOutput::from).collect(),
            failed_archives: summary
                .failed_paths()
                .map(|p| p.display().to_string())
                .collect(),
            warnings: summary.warnings.clone(),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_scan_start(&self, _root: &Path) {}

    fn format_unit_start(&self, _unit: &ArchiveUnit) {}

    fn format_unit_result(&self, _result: &VerificationResult) {}

    fn format_summary(&self, summary: &ScanSummary, success: bool) -> Result<()> {
        let output = JsonOutput::completed("check", success, ScanOutput::from(summary));
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("check", format!("{error:#}"));
        let _ = Self::output(&output);
    }

    // Warnings are carried in the summary document
    fn format_warning(&self, _message: &str) {}

    fn wants_progress(&self) -> bool {
        false
    }
}
