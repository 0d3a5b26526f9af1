//! 7z integrity checking.
//!
//! Single-volume 7z archives are tested in process with `sevenz-rust2`.
//! Every entry is decoded into a sink; the reader verifies the CRC-32 stored
//! for each file once it has been read to the end, so a damaged packed
//! stream surfaces either as a decoder error or as a checksum mismatch.
//!
//! # Limitations
//!
//! - Encrypted archives are reported as failures. Password-protected
//!   archives cannot be tested without the password.
//! - Split archives (`.7z.001`, `.7z.002`, ...) are not assembled here; they
//!   are handed to the external tool.

use std::io;
use std::io::Read;
use std::io::Seek;

use sevenz_rust2::ArchiveReader;
use sevenz_rust2::Password;

use crate::CheckError;
use crate::Result;

use super::traits::EntryStats;
use super::traits::IntegrityCheck;

/// 7z archive opened for testing.
///
/// # Examples
///
/// ```no_run
/// use archcheck_core::formats::SevenZipChecker;
/// use archcheck_core::formats::traits::IntegrityCheck;
/// use std::fs::File;
///
/// let mut archive = SevenZipChecker::new(File::open("backup.7z")?)?;
/// let stats = archive.test_entries()?;
/// println!("{} files OK", stats.files);
/// # Ok::<(), archcheck_core::CheckError>(())
/// ```
pub struct SevenZipChecker<R: Read + Seek> {
    reader: ArchiveReader<R>,
}

impl<R: Read + Seek> SevenZipChecker<R> {
    /// Opens a 7z archive and parses its header.
    ///
    /// # Errors
    ///
    /// Returns an error if the signature header or the (possibly encoded)
    /// archive header cannot be read, or if the archive is encrypted.
    pub fn new(source: R) -> Result<Self> {
        let reader = ArchiveReader::new(source, Password::empty()).map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("encrypt") || err_str.contains("password") {
                return CheckError::InvalidArchive(
                    "encrypted 7z archive; password-protected archives cannot be tested".into(),
                );
            }
            CheckError::SevenZip(format!("failed to open 7z archive: {e}"))
        })?;

        Ok(Self { reader })
    }
}

impl<R: Read + Seek> IntegrityCheck for SevenZipChecker<R> {
    fn test_entries(&mut self) -> Result<EntryStats> {
        let mut stats = EntryStats::default();

        self.reader.for_each_entries(|entry, data| {
            if entry.is_directory() {
                stats.directories += 1;
                return Ok(true);
            }

            stats.bytes += io::copy(data, &mut io::sink())?;
            stats.files += 1;
            Ok(true)
        })?;

        Ok(stats)
    }

    fn format_name(&self) -> &'static str {
        "7z"
    }
}
