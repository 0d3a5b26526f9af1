//! Test utilities for building and damaging archives.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::fs;
use std::fs::OpenOptions;
use std::io::Cursor;
use std::io::Write;
use std::path::Path;

/// Creates an in-memory ZIP archive from a list of entries.
///
/// Each entry is a tuple of (path, content). Files are stored uncompressed,
/// so every payload appears verbatim in the output.
///
/// # Examples
///
/// ```
/// use archcheck_core::test_utils::create_test_zip;
///
/// let zip_data = create_test_zip(&[
///     ("file.txt", b"hello".as_slice()),
///     ("dir/nested.txt", b"world".as_slice()),
/// ]);
/// assert!(zip_data.starts_with(b"PK"));
/// ```
#[must_use]
pub fn create_test_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    create_test_zip_with(entries, zip::CompressionMethod::Stored)
}

/// Creates an in-memory ZIP archive whose entries use `method`.
#[must_use]
pub fn create_test_zip_with(entries: &[(&str, &[u8])], method: zip::CompressionMethod) -> Vec<u8> {
    use zip::write::SimpleFileOptions;
    use zip::write::ZipWriter;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let options = SimpleFileOptions::default()
        .compression_method(method)
        .unix_permissions(0o644);

    for (path, data) in entries {
        zip.start_file(*path, options).unwrap();
        zip.write_all(data).unwrap();
    }

    zip.finish().unwrap().into_inner()
}

/// Flips one byte in the middle of the first occurrence of `payload`.
///
/// Applied to a stored ZIP entry this leaves the structure intact but breaks
/// the entry's CRC-32.
pub fn corrupt_payload(data: &mut [u8], payload: &[u8]) {
    assert!(!payload.is_empty(), "payload must not be empty");
    let start = data
        .windows(payload.len())
        .position(|window| window == payload)
        .unwrap();
    data[start + payload.len() / 2] ^= 0xFF;
}

/// Overwrites the compression method of every entry, in both the local
/// and the central directory headers.
pub fn set_compression_method(data: &mut [u8], method: u16) {
    let raw = method.to_le_bytes();
    for (signature, offset) in [(b"PK\x03\x04", 8), (b"PK\x01\x02", 10)] {
        let starts: Vec<usize> = data
            .windows(4)
            .enumerate()
            .filter(|(_, window)| *window == signature)
            .map(|(i, _)| i)
            .collect();
        for start in starts {
            data[start + offset..start + offset + 2].copy_from_slice(&raw);
        }
    }
}

/// Writes a 7z archive containing `entries` to `dest`.
///
/// The entries are staged in a sibling directory that is removed afterwards.
pub fn write_test_7z(dest: &Path, entries: &[(&str, &[u8])]) {
    let staging = dest.with_extension("staging");
    fs::create_dir_all(&staging).unwrap();

    for (name, data) in entries {
        let path = staging.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, data).unwrap();
    }

    sevenz_rust2::compress_to_path(&staging, dest).unwrap();
    fs::remove_dir_all(&staging).unwrap();
}

/// Writes a valid ZIP archive containing `entries` to `dest`.
pub fn write_test_zip(dest: &Path, entries: &[(&str, &[u8])]) {
    fs::write(dest, create_test_zip(entries)).unwrap();
}

/// Writes a ZIP archive to `dest` whose entry `payload` fails its CRC check.
pub fn write_corrupted_zip(dest: &Path, payload: &[u8]) {
    let mut data = create_test_zip(&[("damaged.bin", payload)]);
    corrupt_payload(&mut data, payload);
    fs::write(dest, data).unwrap();
}

/// Truncates the file at `path` to `len` bytes.
pub fn truncate_file(path: &Path, len: u64) {
    let file = OpenOptions::new().write(true).open(path).unwrap();
    file.set_len(len).unwrap();
}
