//! Scan configuration.

use std::path::PathBuf;

/// Settings for a directory scan.
///
/// # Examples
///
/// ```
/// use archcheck_core::CheckConfig;
///
/// // Defaults: missing tools do not fail the run
/// let config = CheckConfig::default();
/// assert!(!config.unavailable_is_failure);
///
/// let strict = CheckConfig {
///     unavailable_is_failure: true,
///     ..Default::default()
/// };
/// assert!(strict.unavailable_is_failure);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckConfig {
    /// Count units that could not be tested (missing external tool) as
    /// failures when deciding the overall outcome.
    pub unavailable_is_failure: bool,

    /// Explicit path to the 7-Zip program. When `None` the conventional
    /// command names are probed on the search path.
    pub tool_path: Option<PathBuf>,

    /// Descend into symlinked directories while walking.
    pub follow_symlinks: bool,
}
