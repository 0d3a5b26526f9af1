//! Check command implementation.

use crate::cli::Cli;
use crate::error::add_scan_context;
use crate::error::convert_check_error;
use crate::output::OutputFormatter;
use crate::progress::UnitSpinner;
use anyhow::Result;
use archcheck_core::ArchiveUnit;
use archcheck_core::CheckConfig;
use archcheck_core::CheckError;
use archcheck_core::ScanObserver;
use archcheck_core::VerificationResult;
use archcheck_core::check_directory;
use std::process::ExitCode;
use tracing::debug;

/// Forwards scan progress to the formatter and drives the spinner.
struct ConsoleObserver<'a> {
    formatter: &'a dyn OutputFormatter,
    show_progress: bool,
    spinner: Option<UnitSpinner>,
}

impl ScanObserver for ConsoleObserver<'_> {
    fn on_units_found(&mut self, units: &[ArchiveUnit]) {
        debug!(count = units.len(), "archive units found");
    }

    fn on_unit_start(&mut self, unit: &ArchiveUnit) {
        self.formatter.format_unit_start(unit);
        if self.show_progress {
            let name = unit
                .representative
                .file_name()
                .map_or_else(|| unit.representative.display().to_string(), |n| {
                    n.to_string_lossy().into_owned()
                });
            self.spinner = Some(UnitSpinner::start(&format!("verifying {name}")));
        }
    }

    fn on_unit_complete(&mut self, result: &VerificationResult) {
        self.spinner = None;
        self.formatter.format_unit_result(result);
    }

    fn on_warning(&mut self, message: &str) {
        self.formatter.format_warning(message);
    }
}

pub fn execute(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<ExitCode> {
    let config = CheckConfig {
        unavailable_is_failure: cli.unavailable_fails,
        tool_path: cli.tool.clone(),
        follow_symlinks: cli.follow_symlinks,
    };

    // Reject a bad root before any scan output
    if !cli.directory.is_dir() {
        let err = CheckError::NotADirectory {
            path: cli.directory.clone(),
        };
        return Err(convert_check_error(err, &cli.directory));
    }

    if cli.recursive {
        debug!("--recursive has no effect; scans always descend into subdirectories");
    }

    formatter.format_scan_start(&cli.directory);

    let mut observer = ConsoleObserver {
        formatter,
        show_progress: formatter.wants_progress() && UnitSpinner::should_show(),
        spinner: None,
    };
    let summary = add_scan_context(
        check_directory(&cli.directory, &config, &mut observer),
        &cli.directory,
    )?;

    let success = summary.is_success(config.unavailable_is_failure);
    formatter.format_summary(&summary, success)?;

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
