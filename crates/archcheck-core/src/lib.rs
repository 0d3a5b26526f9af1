//! Integrity checking for ZIP and 7z archives found under a directory tree.
//!
//! `archcheck-core` walks a directory, groups the files it finds into
//! logical archive units (single archives and multi-volume sets), and tests
//! each unit once:
//!
//! - single-volume ZIP and 7z archives are decoded in process and every
//!   entry's CRC is checked;
//! - multi-volume sets are handed to the external 7-Zip program, and are
//!   reported as unavailable when it is not installed.
//!
//! A corrupt archive never stops the scan. The [`ScanSummary`] returned by
//! [`check_directory`] holds one [`VerificationResult`] per unit.
//!
//! # Examples
//!
//! ```no_run
//! use archcheck_core::CheckConfig;
//! use archcheck_core::NoopObserver;
//! use archcheck_core::check_directory;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CheckConfig::default();
//! let summary = check_directory("/backups", &config, &mut NoopObserver)?;
//! println!("Passed: {}", summary.passed());
//! println!("Failed: {}", summary.failed());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod classify;
pub mod config;
pub mod discover;
pub mod error;
pub mod formats;
pub mod report;
pub mod tool;
pub mod types;
pub mod verify;

#[cfg(any(test, feature = "test-utils"))]
#[doc(hidden)]
pub mod test_utils;

// Re-export main API types
pub use api::check_directory;
pub use api::run_units;
pub use classify::classify;
pub use config::CheckConfig;
pub use error::CheckError;
pub use error::Result;
pub use report::NoopObserver;
pub use report::ScanObserver;
pub use report::ScanSummary;
pub use report::VerificationResult;
pub use report::VerificationStatus;
pub use tool::ExternalTool;
pub use tool::SevenZipCli;
pub use verify::Verifier;

// Re-export types module for easier access
pub use types::ArchiveFormat;
pub use types::ArchiveUnit;
