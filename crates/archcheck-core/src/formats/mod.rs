//! In-process integrity checks for single-volume archives.

pub mod sevenz;
pub mod traits;
pub mod zip;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::Result;
use crate::types::ArchiveFormat;

// Re-export main types for convenience
pub use sevenz::SevenZipChecker;
pub use traits::EntryStats;
pub use traits::IntegrityCheck;
pub use zip::ZipChecker;

/// Opens `path` with the native reader for `format` and tests every entry.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or any entry fails to
/// decode cleanly.
pub fn test_file(path: &Path, format: ArchiveFormat) -> Result<EntryStats> {
    let source = BufReader::new(File::open(path)?);

    let mut checker: Box<dyn IntegrityCheck> = match format {
        ArchiveFormat::Zip => Box::new(ZipChecker::new(source)?),
        ArchiveFormat::SevenZip => Box::new(SevenZipChecker::new(source)?),
    };

    let stats = checker.test_entries()?;
    debug!(
        format = checker.format_name(),
        files = stats.files,
        bytes = stats.bytes,
        "entries decoded"
    );
    Ok(stats)
}
