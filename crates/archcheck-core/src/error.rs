//! Error types for archive discovery and verification.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `CheckError`.
pub type Result<T> = std::result::Result<T, CheckError>;

/// Errors that can occur while scanning or verifying archives.
#[derive(Error, Debug)]
pub enum CheckError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The scan root does not exist or is not a directory.
    #[error("'{}' is not a valid directory", path.display())]
    NotADirectory {
        /// The path supplied as scan root.
        path: PathBuf,
    },

    /// Archive structure could not be read.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// ZIP reader reported an error (bad header, CRC mismatch, truncation).
    #[error("ZIP error: {0}")]
    Zip(zip::result::ZipError),

    /// Archive uses a feature no built-in decoder handles.
    #[error("unsupported archive feature: {0}")]
    Unsupported(String),

    /// 7z reader reported an error (bad header, CRC mismatch, truncation).
    #[error("7z error: {0}")]
    SevenZip(String),

    /// External tool ran and reported a failure.
    #[error("{tool} reported errors: {output}")]
    ToolFailed {
        /// Tool name as invoked.
        tool: String,
        /// Condensed tool output.
        output: String,
    },

    /// External tool is not installed or not on the search path.
    #[error("{tool} not found; install 7-Zip (p7zip) to test multi-volume archives")]
    ToolMissing {
        /// Tool name or path that could not be spawned.
        tool: String,
    },
}

impl From<zip::result::ZipError> for CheckError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::UnsupportedArchive(msg)
                if !msg.to_ascii_lowercase().contains("password") =>
            {
                Self::Unsupported(msg.to_string())
            }
            other => Self::Zip(other),
        }
    }
}

impl From<sevenz_rust2::Error> for CheckError {
    fn from(err: sevenz_rust2::Error) -> Self {
        Self::SevenZip(err.to_string())
    }
}

impl CheckError {
    /// Returns `true` if this error means the archive data itself is bad.
    ///
    /// I/O errors and a missing tool are not corruption findings.
    ///
    /// # Examples
    ///
    /// ```
    /// use archcheck_core::CheckError;
    ///
    /// let err = CheckError::InvalidArchive("bad header".to_string());
    /// assert!(err.is_corruption());
    ///
    /// let err = CheckError::ToolMissing { tool: "7z".into() };
    /// assert!(!err.is_corruption());
    /// ```
    #[must_use]
    pub const fn is_corruption(&self) -> bool {
        matches!(
            self,
            Self::InvalidArchive(_) | Self::Zip(_) | Self::SevenZip(_) | Self::ToolFailed { .. }
        )
    }

    /// Returns `true` if a required capability was missing.
    ///
    /// Covers a missing external tool and a compression method the native
    /// readers were built without.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::ToolMissing { .. } | Self::Unsupported(_))
    }
}
