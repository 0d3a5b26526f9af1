//! Recursive enumeration of candidate files under a scan root.

use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use tracing::warn;
use walkdir::DirEntry;
use walkdir::WalkDir;

use crate::CheckError;
use crate::Result;

/// Walks `root` recursively and returns every file path found.
///
/// Entries are sorted by file name within each directory so the result is
/// stable between runs. Symlinks to files are included; symlinked
/// directories are descended into only when `follow_symlinks` is set.
/// Unreadable subdirectories are logged and skipped.
///
/// # Errors
///
/// Returns `CheckError::NotADirectory` if `root` is not a directory.
///
/// # Examples
///
/// ```no_run
/// use archcheck_core::discover::collect_files;
/// use std::path::Path;
///
/// let files = collect_files(Path::new("/backups"), false)?;
/// println!("{} files found", files.len());
/// # Ok::<(), archcheck_core::CheckError>(())
/// ```
pub fn collect_files(root: &Path, follow_symlinks: bool) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(CheckError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(follow_symlinks)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => is_file(&entry).then(|| entry.into_path()),
            Err(e) => {
                warn!("skipping unreadable path: {e}");
                None
            }
        })
        .collect();

    debug!(root = %root.display(), count = files.len(), "directory walk complete");
    Ok(files)
}

fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}
