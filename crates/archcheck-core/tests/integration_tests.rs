//! Integration tests for archcheck-core.
//!
//! These tests build real archives on disk and scan them end to end.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use archcheck_core::ArchiveFormat;
use archcheck_core::CheckConfig;
use archcheck_core::CheckError;
use archcheck_core::NoopObserver;
use archcheck_core::VerificationStatus;
use archcheck_core::check_directory;
use archcheck_core::test_utils::truncate_file;
use archcheck_core::test_utils::write_corrupted_zip;
use archcheck_core::test_utils::write_test_7z;
use archcheck_core::test_utils::write_test_zip;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;

fn config_without_tool() -> CheckConfig {
    CheckConfig {
        tool_path: Some(PathBuf::from("/nonexistent/archcheck/bin/7z")),
        ..Default::default()
    }
}

#[test]
fn test_mixed_directory_summary() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write_test_zip(&root.join("photos.zip"), &[("img.raw", b"pixels".as_slice())]);
    write_test_7z(&root.join("docs.7z"), &[("readme.txt", b"hello 7z".as_slice())]);
    write_corrupted_zip(&root.join("broken.zip"), b"this payload will not survive");
    fs::write(root.join("notes.txt"), b"not an archive").unwrap();

    let summary = check_directory(root, &CheckConfig::default(), &mut NoopObserver).unwrap();

    assert_eq!(summary.results.len(), 3);
    assert_eq!(summary.passed(), 2);
    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.unavailable(), 0);
    let broken = root.join("broken.zip");
    assert_eq!(
        summary.failed_paths().collect::<Vec<&Path>>(),
        vec![broken.as_path()]
    );
    assert!(!summary.is_success(false));
}

#[test]
fn test_nested_directories_are_scanned() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("2024/q1/archive");
    fs::create_dir_all(&nested).unwrap();
    write_test_zip(&nested.join("deep.zip"), &[("a", b"a".as_slice())]);

    let summary =
        check_directory(temp.path(), &CheckConfig::default(), &mut NoopObserver).unwrap();

    assert_eq!(summary.results.len(), 1);
    assert_eq!(summary.results[0].path, nested.join("deep.zip"));
    assert_eq!(summary.results[0].status, VerificationStatus::Pass);
}

#[test]
fn test_empty_directory_is_success() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("readme.md"), b"nothing here").unwrap();

    let summary =
        check_directory(temp.path(), &CheckConfig::default(), &mut NoopObserver).unwrap();

    assert!(summary.is_empty());
    assert_eq!(summary.passed(), 0);
    assert_eq!(summary.failed(), 0);
    assert!(summary.is_success(true));
}

#[test]
fn test_missing_root_is_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist");

    let err = check_directory(&missing, &CheckConfig::default(), &mut NoopObserver).unwrap_err();
    assert!(matches!(err, CheckError::NotADirectory { ref path } if *path == missing));
    assert!(err.to_string().contains("is not a valid directory"));
}

#[test]
fn test_truncated_7z_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("cut.7z");
    write_test_7z(&path, &[("big.bin", [7u8; 8192].as_slice())]);
    truncate_file(&path, 64);

    let summary =
        check_directory(temp.path(), &CheckConfig::default(), &mut NoopObserver).unwrap();

    assert_eq!(summary.results.len(), 1);
    assert_eq!(summary.results[0].status, VerificationStatus::Fail);
    assert!(summary.results[0].message.is_some());
}

#[test]
fn test_non_archive_with_archive_extension_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("fake.zip"), b"plain text pretending").unwrap();
    fs::write(temp.path().join("fake.7z"), b"also plain text").unwrap();

    let summary =
        check_directory(temp.path(), &CheckConfig::default(), &mut NoopObserver).unwrap();

    assert_eq!(summary.failed(), 2);
}

#[test]
fn test_split_set_without_tool_is_unavailable() {
    let temp = TempDir::new().unwrap();
    for name in ["set.7z.001", "set.7z.002", "set.7z.003"] {
        fs::write(temp.path().join(name), b"volume bytes").unwrap();
    }

    let summary = check_directory(temp.path(), &config_without_tool(), &mut NoopObserver).unwrap();

    assert_eq!(summary.results.len(), 1);
    let result = &summary.results[0];
    assert_eq!(result.path, temp.path().join("set.7z.001"));
    assert_eq!(result.format, ArchiveFormat::SevenZip);
    assert!(result.multi_volume);
    assert_eq!(result.status, VerificationStatus::Unavailable);
    assert_eq!(result.tag(), "7z multi-volume");

    assert!(summary.is_success(false));
    assert!(!summary.is_success(true));
}

#[test]
fn test_split_zip_set_is_one_unit() {
    let temp = TempDir::new().unwrap();
    for name in ["backup.z01", "backup.z02", "backup.zip"] {
        fs::write(temp.path().join(name), b"volume bytes").unwrap();
    }

    let summary = check_directory(temp.path(), &config_without_tool(), &mut NoopObserver).unwrap();

    assert_eq!(summary.results.len(), 1);
    assert_eq!(summary.results[0].path, temp.path().join("backup.zip"));
    assert_eq!(summary.results[0].tag(), "ZIP multi-volume");
}

#[test]
fn test_volume_gap_is_warning_only() {
    let temp = TempDir::new().unwrap();
    for name in ["gap.7z.001", "gap.7z.003"] {
        fs::write(temp.path().join(name), b"volume bytes").unwrap();
    }

    let summary = check_directory(temp.path(), &config_without_tool(), &mut NoopObserver).unwrap();

    assert_eq!(summary.results.len(), 1);
    assert_eq!(summary.results[0].status, VerificationStatus::Unavailable);
    assert_eq!(summary.warnings.len(), 1);
    assert!(summary.warnings[0].contains("missing volume 2"));
}

#[cfg(unix)]
#[test]
fn test_split_set_with_failing_tool_fails() {
    let temp = TempDir::new().unwrap();
    for name in ["set.7z.001", "set.7z.002"] {
        fs::write(temp.path().join(name), b"volume bytes").unwrap();
    }

    // `false` spawns fine and always exits non-zero
    let config = CheckConfig {
        tool_path: Some(PathBuf::from("false")),
        ..Default::default()
    };
    let summary = check_directory(temp.path(), &config, &mut NoopObserver).unwrap();

    assert_eq!(summary.results[0].status, VerificationStatus::Fail);
    assert_eq!(summary.failed(), 1);
}

#[cfg(unix)]
#[test]
fn test_split_set_with_passing_tool_passes() {
    let temp = TempDir::new().unwrap();
    for name in ["set.zip", "set.z01"] {
        fs::write(temp.path().join(name), b"volume bytes").unwrap();
    }

    let config = CheckConfig {
        tool_path: Some(PathBuf::from("true")),
        ..Default::default()
    };
    let summary = check_directory(temp.path(), &config, &mut NoopObserver).unwrap();

    assert_eq!(summary.passed(), 1);
    assert!(summary.is_success(true));
}
