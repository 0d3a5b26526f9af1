//! High-level public API for scanning a directory tree.

use std::fmt::Write as _;
use std::path::Path;

use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::CheckConfig;
use crate::Result;
use crate::classify::classify;
use crate::discover::collect_files;
use crate::report::ScanObserver;
use crate::report::ScanSummary;
use crate::tool::ExternalTool;
use crate::tool::SevenZipCli;
use crate::types::ArchiveUnit;
use crate::verify::Verifier;

/// Scans `root` recursively and verifies every archive found.
///
/// Files are grouped into archive units, each unit is verified exactly once
/// and in order, and `observer` is notified as the scan progresses. The
/// external 7-Zip tool is only probed when at least one multi-volume unit is
/// present.
///
/// A damaged archive never aborts the scan; it is recorded as a failed
/// result in the returned summary.
///
/// # Errors
///
/// Returns `CheckError::NotADirectory` if `root` does not name a directory.
///
/// # Examples
///
/// ```no_run
/// use archcheck_core::CheckConfig;
/// use archcheck_core::NoopObserver;
/// use archcheck_core::check_directory;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let summary = check_directory("/backups", &CheckConfig::default(), &mut NoopObserver)?;
/// println!("{} passed, {} failed", summary.passed(), summary.failed());
/// for path in summary.failed_paths() {
///     println!("  - {}", path.display());
/// }
/// # Ok(())
/// # }
/// ```
pub fn check_directory<P: AsRef<Path>>(
    root: P,
    config: &CheckConfig,
    observer: &mut dyn ScanObserver,
) -> Result<ScanSummary> {
    let root = root.as_ref();
    info!(root = %root.display(), "scanning");

    let files = collect_files(root, config.follow_symlinks)?;
    let units = classify(files);
    debug!(units = units.len(), "classification complete");
    observer.on_units_found(&units);

    let verifier = build_verifier(&units, config);
    let mut summary = run_units(&units, &verifier, observer);
    summary.root = root.to_path_buf();

    info!(
        passed = summary.passed(),
        failed = summary.failed(),
        unavailable = summary.unavailable(),
        "scan complete"
    );
    Ok(summary)
}

/// Verifies already-classified units in order.
///
/// Missing volume numbers inside a split set are reported through
/// [`ScanObserver::on_warning`] and recorded in the summary; they do not
/// change the unit's status.
pub fn run_units(
    units: &[ArchiveUnit],
    verifier: &Verifier,
    observer: &mut dyn ScanObserver,
) -> ScanSummary {
    let mut summary = ScanSummary::new("");

    for unit in units {
        if let Some(message) = gap_warning(unit) {
            warn!("{message}");
            observer.on_warning(&message);
            summary.add_warning(message);
        }

        observer.on_unit_start(unit);
        let result = verifier.verify(unit);
        observer.on_unit_complete(&result);
        summary.push(result);
    }

    summary
}

fn build_verifier(units: &[ArchiveUnit], config: &CheckConfig) -> Verifier {
    if !units.iter().any(|unit| unit.multi_volume) {
        return Verifier::native_only();
    }

    match SevenZipCli::detect(config.tool_path.as_deref()) {
        Some(tool) => {
            debug!(tool = tool.name(), "multi-volume units will use external tool");
            Verifier::new(Some(Box::new(tool)))
        }
        None => {
            warn!("no 7-Zip executable found; multi-volume archives will not be tested");
            Verifier::native_only()
        }
    }
}

fn gap_warning(unit: &ArchiveUnit) -> Option<String> {
    let missing = unit.missing_volumes();
    if missing.is_empty() {
        return None;
    }

    let mut message = format!("{}: missing volume", unit.representative.display());
    if missing.len() > 1 {
        message.push('s');
    }
    for (i, number) in missing.iter().enumerate() {
        let sep = if i == 0 { " " } else { ", " };
        let _ = write!(message, "{sep}{number}");
    }
    Some(message)
}
