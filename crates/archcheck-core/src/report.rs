//! Verification results and scan summaries.

use std::fmt;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use crate::types::ArchiveFormat;
use crate::types::ArchiveUnit;

/// Outcome of verifying one archive unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerificationStatus {
    /// Every entry decoded cleanly.
    Pass,
    /// The archive is corrupt or could not be read.
    Fail,
    /// A required external tool is missing; nothing was tested.
    Unavailable,
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
            Self::Unavailable => write!(f, "UNAVAILABLE"),
        }
    }
}

/// Result of verifying a single [`ArchiveUnit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    /// Representative path of the unit.
    pub path: PathBuf,

    /// Container format.
    pub format: ArchiveFormat,

    /// Whether the unit spans several volumes.
    pub multi_volume: bool,

    /// Outcome.
    pub status: VerificationStatus,

    /// Diagnostic: error text on failure, tool hint when unavailable,
    /// entry totals on a native pass.
    pub message: Option<String>,

    /// Time spent verifying the unit.
    pub duration: Duration,
}

impl VerificationResult {
    /// Creates a result for `unit` with the given status and message.
    #[must_use]
    pub fn new(unit: &ArchiveUnit, status: VerificationStatus, message: Option<String>) -> Self {
        Self {
            path: unit.representative.clone(),
            format: unit.format,
            multi_volume: unit.multi_volume,
            status,
            message,
            duration: Duration::ZERO,
        }
    }

    /// Sets the measured duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Display tag of the verified unit, e.g. `ZIP multi-volume`.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.format.unit_tag(self.multi_volume)
    }

    /// Returns `true` if the unit passed.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.status == VerificationStatus::Pass
    }
}

/// Aggregated results of a directory scan.
///
/// # Examples
///
/// ```
/// use archcheck_core::ArchiveFormat;
/// use archcheck_core::ArchiveUnit;
/// use archcheck_core::ScanSummary;
/// use archcheck_core::VerificationResult;
/// use archcheck_core::VerificationStatus;
///
/// let mut summary = ScanSummary::new("backups");
/// let unit = ArchiveUnit::single("backups/a.zip", ArchiveFormat::Zip);
/// summary.push(VerificationResult::new(&unit, VerificationStatus::Fail, None));
///
/// assert_eq!(summary.failed(), 1);
/// assert!(!summary.is_success(false));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Directory that was scanned.
    pub root: PathBuf,

    /// Per-unit results, in verification order.
    pub results: Vec<VerificationResult>,

    /// Warnings that did not affect any unit's status.
    pub warnings: Vec<String>,
}

impl ScanSummary {
    /// Creates an empty summary for `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Records a unit result.
    pub fn push(&mut self, result: VerificationResult) {
        self.results.push(result);
    }

    /// Adds a warning message.
    pub fn add_warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    /// Returns `true` if no archive units were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    fn count(&self, status: VerificationStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    /// Number of units that passed.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.count(VerificationStatus::Pass)
    }

    /// Number of units that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(VerificationStatus::Fail)
    }

    /// Number of units that could not be tested.
    #[must_use]
    pub fn unavailable(&self) -> usize {
        self.count(VerificationStatus::Unavailable)
    }

    /// Paths of failed units, in verification order.
    pub fn failed_paths(&self) -> impl Iterator<Item = &Path> {
        self.results
            .iter()
            .filter(|r| r.status == VerificationStatus::Fail)
            .map(|r| r.path.as_path())
    }

    /// Decides the overall outcome.
    ///
    /// Failed units always make the scan unsuccessful. Unavailable units do
    /// so only when `unavailable_is_failure` is set.
    #[must_use]
    pub fn is_success(&self, unavailable_is_failure: bool) -> bool {
        self.failed() == 0 && (!unavailable_is_failure || self.unavailable() == 0)
    }
}

/// Callback trait for progress reporting during a scan.
///
/// All methods have empty default implementations.
///
/// # Examples
///
/// ```
/// use archcheck_core::ArchiveUnit;
/// use archcheck_core::ScanObserver;
/// use archcheck_core::VerificationResult;
///
/// struct PrintProgress;
///
/// impl ScanObserver for PrintProgress {
///     fn on_unit_start(&mut self, unit: &ArchiveUnit) {
///         println!("Testing [{}]: {}", unit.tag(), unit.representative.display());
///     }
///
///     fn on_unit_complete(&mut self, result: &VerificationResult) {
///         println!("  {}", result.status);
///     }
/// }
/// ```
pub trait ScanObserver {
    /// Called once classification has produced the unit list.
    fn on_units_found(&mut self, _units: &[ArchiveUnit]) {}

    /// Called before a unit is verified.
    fn on_unit_start(&mut self, _unit: &ArchiveUnit) {}

    /// Called after a unit has been verified.
    fn on_unit_complete(&mut self, _result: &VerificationResult) {}

    /// Called for conditions worth reporting that do not change any status.
    fn on_warning(&mut self, _message: &str) {}
}

/// No-op implementation of `ScanObserver`.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}
