//! Dispatch of archive units to the matching integrity check.
//!
//! | format | multi-volume | method                 |
//! |--------|--------------|------------------------|
//! | ZIP    | no           | native `zip` reader    |
//! | 7z     | no           | native `sevenz-rust2`  |
//! | ZIP    | yes          | external tool required |
//! | 7z     | yes          | external tool required |
//!
//! A missing external tool yields [`VerificationStatus::Unavailable`]; there
//! is no native fallback for split archives.

use std::time::Instant;

use tracing::debug;

use crate::CheckError;
use crate::formats;
use crate::formats::EntryStats;
use crate::report::VerificationResult;
use crate::report::VerificationStatus;
use crate::tool::ExternalTool;
use crate::types::ArchiveFormat;
use crate::types::ArchiveUnit;

/// How a unit is tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// In-process reader.
    Native,
    /// External command-line tool.
    ExternalTool,
}

/// Looks up the test method for a format and volume layout.
#[must_use]
pub const fn method_for(format: ArchiveFormat, multi_volume: bool) -> Method {
    match (format, multi_volume) {
        (ArchiveFormat::Zip | ArchiveFormat::SevenZip, false) => Method::Native,
        (ArchiveFormat::Zip | ArchiveFormat::SevenZip, true) => Method::ExternalTool,
    }
}

/// Verifies archive units one at a time.
///
/// The external tool is probed by the caller and injected here, so tests can
/// substitute a fake.
///
/// # Examples
///
/// ```no_run
/// use archcheck_core::ArchiveFormat;
/// use archcheck_core::ArchiveUnit;
/// use archcheck_core::Verifier;
/// use archcheck_core::VerificationStatus;
///
/// let verifier = Verifier::native_only();
/// let result = verifier.verify(&ArchiveUnit::single("backup.zip", ArchiveFormat::Zip));
/// if result.status == VerificationStatus::Fail {
///     eprintln!("corrupt: {}", result.message.unwrap_or_default());
/// }
/// ```
pub struct Verifier {
    tool: Option<Box<dyn ExternalTool>>,
}

impl Verifier {
    /// Creates a verifier using `tool` for multi-volume units.
    #[must_use]
    pub fn new(tool: Option<Box<dyn ExternalTool>>) -> Self {
        Self { tool }
    }

    /// Creates a verifier with no external tool; multi-volume units will be
    /// reported as unavailable.
    #[must_use]
    pub fn native_only() -> Self {
        Self::new(None)
    }

    /// Returns `true` if an external tool is configured.
    #[must_use]
    pub fn has_tool(&self) -> bool {
        self.tool.is_some()
    }

    /// Verifies one unit. Never fails: every error is folded into the result.
    #[must_use]
    pub fn verify(&self, unit: &ArchiveUnit) -> VerificationResult {
        let started = Instant::now();
        let method = method_for(unit.format, unit.multi_volume);
        debug!(path = %unit.representative.display(), tag = unit.tag(), ?method, "verifying");

        let outcome = match method {
            Method::Native => {
                formats::test_file(&unit.representative, unit.format).map(|s| Some(describe(s)))
            }
            Method::ExternalTool => self.run_tool(unit).map(|()| None),
        };

        let (status, message) = match outcome {
            Ok(message) => (VerificationStatus::Pass, message),
            Err(err) if err.is_unavailable() => {
                (VerificationStatus::Unavailable, Some(err.to_string()))
            }
            Err(err) => (VerificationStatus::Fail, Some(err.to_string())),
        };

        debug!(path = %unit.representative.display(), %status, "verified");
        VerificationResult::new(unit, status, message).with_duration(started.elapsed())
    }

    fn run_tool(&self, unit: &ArchiveUnit) -> crate::Result<()> {
        let Some(tool) = &self.tool else {
            return Err(CheckError::ToolMissing {
                tool: "7z".to_string(),
            });
        };

        tool.test_archive(&unit.representative)
    }
}

fn describe(stats: EntryStats) -> String {
    let noun = if stats.files == 1 { "file" } else { "files" };
    format!("{} {noun}, {} bytes", stats.files, stats.bytes)
}
