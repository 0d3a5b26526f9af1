//! Common traits for in-process integrity checks.

use crate::Result;

/// Totals gathered while reading every entry of an archive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryStats {
    /// Number of file entries fully decoded.
    pub files: usize,

    /// Number of directory entries.
    pub directories: usize,

    /// Total uncompressed bytes read.
    pub bytes: u64,
}

/// Trait for archive readers able to test their own contents.
pub trait IntegrityCheck {
    /// Reads and decodes every entry, validating checksums along the way.
    ///
    /// # Errors
    ///
    /// Returns an error on the first unreadable structure, decompression
    /// failure, checksum mismatch or truncated stream.
    fn test_entries(&mut self) -> Result<EntryStats>;

    /// Returns the archive format name.
    fn format_name(&self) -> &'static str;
}
