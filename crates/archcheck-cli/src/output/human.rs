//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use archcheck_core::ArchiveUnit;
use archcheck_core::ScanSummary;
use archcheck_core::VerificationResult;
use archcheck_core::VerificationStatus;
use console::Term;
use console::style;
use std::path::Path;
use std::time::Duration;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
    err_term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    fn format_duration(duration: Duration) -> String {
        let millis = duration.as_millis();
        if millis >= 1000 {
            format!("{:.1}s", duration.as_secs_f64())
        } else {
            format!("{millis}ms")
        }
    }

    fn result_line(&self, result: &VerificationResult) -> String {
        let (marker, text) = match result.status {
            VerificationStatus::Pass => ("✓", "Archive is valid".to_string()),
            VerificationStatus::Fail => (
                "✗",
                result
                    .message
                    .clone()
                    .unwrap_or_else(|| "Archive is corrupted or invalid".to_string()),
            ),
            VerificationStatus::Unavailable => (
                "⚠",
                format!(
                    "Skipped: {}",
                    result.message.as_deref().unwrap_or("external tool not available")
                ),
            ),
        };

        let marker = if self.use_colors {
            match result.status {
                VerificationStatus::Pass => style(marker).green().bold().to_string(),
                VerificationStatus::Fail => style(marker).red().bold().to_string(),
                VerificationStatus::Unavailable => style(marker).yellow().bold().to_string(),
            }
        } else {
            marker.to_string()
        };

        let mut line = format!("{marker} {text}");
        if self.verbose {
            let detail = match (result.status, &result.message) {
                (VerificationStatus::Pass, Some(stats)) => {
                    format!(" ({stats}, {})", Self::format_duration(result.duration))
                }
                _ => format!(" ({})", Self::format_duration(result.duration)),
            };
            line.push_str(&detail);
        }
        line
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            style(text).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_scan_start(&self, root: &Path) {
        if self.quiet {
            return;
        }

        let _ = self
            .term
            .write_line(&format!("Scanning {}...", root.display()));
    }

    fn format_unit_start(&self, unit: &ArchiveUnit) {
        if self.quiet {
            return;
        }

        let _ = self.term.write_line("");
        let _ = self.term.write_line(&format!(
            "Testing [{}]: {}",
            unit.tag(),
            unit.representative.display()
        ));

        if self.verbose && unit.multi_volume {
            let _ = self
                .term
                .write_line(&format!("  {} volumes", unit.members.len()));
        }
    }

    fn format_unit_result(&self, result: &VerificationResult) {
        if self.quiet {
            // Failures still surface in quiet mode, with the path for context
            if result.status == VerificationStatus::Fail {
                let _ = self.err_term.write_line(&format!(
                    "FAILED: {}: {}",
                    result.path.display(),
                    result.message.as_deref().unwrap_or("corrupted or invalid")
                ));
            }
            return;
        }

        let _ = self.term.write_line(&self.result_line(result));
    }

    fn format_summary(&self, summary: &ScanSummary, _success: bool) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if summary.is_empty() {
            let _ = self.term.write_line("No archives found");
            return Ok(());
        }

        let _ = self.term.write_line("");
        let _ = self.term.write_line(&self.heading("Summary:"));
        let _ = self
            .term
            .write_line(&format!("Passed: {}", summary.passed()));
        let _ = self
            .term
            .write_line(&format!("Failed: {}", summary.failed()));
        if summary.unavailable() > 0 {
            let _ = self
                .term
                .write_line(&format!("Unavailable: {}", summary.unavailable()));
        }

        if summary.failed() > 0 {
            let _ = self.term.write_line("");
            let _ = self.term.write_line(&self.heading("Failed archives:"));
            for path in summary.failed_paths() {
                let _ = self.term.write_line(&format!("- {}", path.display()));
            }
        }

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("ERROR: {error:?}"));
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("WARNING: {message}"));
        }
    }

    fn wants_progress(&self) -> bool {
        !self.quiet
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use archcheck_core::ArchiveFormat;

    fn plain(verbose: bool) -> HumanFormatter {
        HumanFormatter {
            verbose,
            quiet: false,
            use_colors: false,
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    fn result(status: VerificationStatus, message: Option<&str>) -> VerificationResult {
        let unit = ArchiveUnit::single("a.zip", ArchiveFormat::Zip);
        VerificationResult::new(&unit, status, message.map(str::to_string))
            .with_duration(Duration::from_millis(42))
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(HumanFormatter::format_duration(Duration::ZERO), "0ms");
        assert_eq!(HumanFormatter::format_duration(Duration::from_millis(999)), "999ms");
        assert_eq!(HumanFormatter::format_duration(Duration::from_millis(1500)), "1.5s");
    }

    #[test]
    fn test_pass_line() {
        let line = plain(false).result_line(&result(VerificationStatus::Pass, Some("2 files, 9 bytes")));
        assert_eq!(line, "✓ Archive is valid");
    }

    #[test]
    fn test_pass_line_verbose() {
        let line = plain(true).result_line(&result(VerificationStatus::Pass, Some("2 files, 9 bytes")));
        assert_eq!(line, "✓ Archive is valid (2 files, 9 bytes, 42ms)");
    }

    #[test]
    fn test_fail_line_uses_message() {
        let line = plain(false).result_line(&result(VerificationStatus::Fail, Some("bad.txt: CRC mismatch")));
        assert_eq!(line, "✗ bad.txt: CRC mismatch");

        let line = plain(false).result_line(&result(VerificationStatus::Fail, None));
        assert_eq!(line, "✗ Archive is corrupted or invalid");
    }

    #[test]
    fn test_unavailable_line() {
        let line = plain(false).result_line(&result(VerificationStatus::Unavailable, Some("7z not found")));
        assert_eq!(line, "⚠ Skipped: 7z not found");
    }
}
