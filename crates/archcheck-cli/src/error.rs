//! Error conversion utilities for CLI.
//!
//! Converts archcheck-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use archcheck_core::CheckError;
use std::path::Path;

/// Converts `CheckError` to user-friendly anyhow error with context
pub fn convert_check_error(err: CheckError, root: &Path) -> anyhow::Error {
    match err {
        CheckError::NotADirectory { path } => {
            anyhow!(
                "'{}' is not a valid directory\n\
                 HINT: Pass the path of an existing directory to scan.",
                path.display()
            )
        }
        CheckError::Io(io_err) => {
            anyhow!("I/O error while scanning '{}': {}", root.display(), io_err)
        }
        _ => anyhow::Error::from(err).context(format!("Error scanning '{}'", root.display())),
    }
}

/// Adds context to a core error raised while scanning `root`
pub fn add_scan_context<T>(result: Result<T, CheckError>, root: &Path) -> anyhow::Result<T> {
    result.map_err(|e| convert_check_error(e, root))
}
