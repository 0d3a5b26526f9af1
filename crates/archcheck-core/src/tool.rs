//! External archive tool used for multi-volume sets.
//!
//! Neither native reader can assemble split volumes, so multi-volume units
//! are tested by running `7z t` on the first volume and letting the tool
//! locate the rest. The tool is optional: when it cannot be spawned the unit
//! is reported as unavailable, never as corrupt.

use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;
use std::process::Stdio;

use tracing::debug;

use crate::CheckError;
use crate::Result;

/// Longest condensed diagnostic kept from tool output, in characters.
const MAX_MESSAGE_CHARS: usize = 300;

/// Command names probed, in order, when no explicit tool path is given.
#[cfg(windows)]
pub const DEFAULT_CANDIDATES: &[&str] = &["7z.exe", "7z", "7za.exe"];

/// Command names probed, in order, when no explicit tool path is given.
#[cfg(not(windows))]
pub const DEFAULT_CANDIDATES: &[&str] = &["7z", "7zz", "7za"];

/// A command-line program able to test an archive in place.
pub trait ExternalTool {
    /// Name or path the tool is invoked as.
    fn name(&self) -> &str;

    /// Runs the tool's integrity test against `path`.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::ToolMissing` if the program cannot be found and
    /// `CheckError::ToolFailed` if it ran and reported a problem.
    fn test_archive(&self, path: &Path) -> Result<()>;
}

/// The 7-Zip command-line program (`7z`, `7zz` or `7za`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SevenZipCli {
    program: PathBuf,
}

impl SevenZipCli {
    /// Wraps a program without checking that it exists.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Finds a usable 7-Zip program.
    ///
    /// With `explicit` set only that program is tried; otherwise each of
    /// [`DEFAULT_CANDIDATES`] is tried in turn on the search path. Candidates
    /// are resolved without being run; a program that later fails to spawn
    /// is still reported as missing by [`ExternalTool::test_archive`].
    #[must_use]
    pub fn detect(explicit: Option<&Path>) -> Option<Self> {
        if let Some(program) = explicit {
            return resolves(program).then(|| Self::new(program));
        }

        DEFAULT_CANDIDATES
            .iter()
            .map(Path::new)
            .find(|candidate| resolves(candidate))
            .map(Self::new)
    }

    fn name_lossy(&self) -> String {
        self.program.display().to_string()
    }
}

impl ExternalTool for SevenZipCli {
    fn name(&self) -> &str {
        self.program.to_str().unwrap_or("7z")
    }

    fn test_archive(&self, path: &Path) -> Result<()> {
        debug!(tool = %self.program.display(), archive = %path.display(), "running external test");

        let output = Command::new(&self.program)
            .arg("t")
            .arg("-y")
            .arg("-bd")
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    CheckError::ToolMissing {
                        tool: self.name_lossy(),
                    }
                } else {
                    CheckError::Io(e)
                }
            })?;

        if output.status.success() {
            return Ok(());
        }

        Err(CheckError::ToolFailed {
            tool: self.name_lossy(),
            output: condense_output(&output),
        })
    }
}

fn resolves(program: &Path) -> bool {
    match which::which(program) {
        Ok(resolved) => {
            debug!(tool = %program.display(), path = %resolved.display(), "external tool found");
            true
        }
        Err(e) => {
            debug!(tool = %program.display(), error = %e, "external tool not usable");
            false
        }
    }
}

/// Reduces tool output to a one-line diagnostic.
///
/// Lines mentioning an error are preferred; otherwise the last few lines are
/// kept. Falls back to the exit status when the tool printed nothing.
fn condense_output(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stdout
        .lines()
        .chain(stderr.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let errors: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| {
            let lower = line.to_ascii_lowercase();
            lower.contains("error")
                || lower.contains("wrong password")
                || lower.contains("missing volume")
        })
        .collect();

    let selected = if errors.is_empty() {
        &lines[lines.len().saturating_sub(3)..]
    } else {
        &errors[..]
    };

    if selected.is_empty() {
        return format!("exited with {}", output.status);
    }

    let joined = selected.join("; ");
    if joined.chars().count() > MAX_MESSAGE_CHARS {
        let truncated: String = joined.chars().take(MAX_MESSAGE_CHARS).collect();
        format!("{truncated}...")
    } else {
        joined
    }
}
