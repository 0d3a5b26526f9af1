//! Grouping of file names into logical archive units.
//!
//! Classification is purely name based. Extensions are matched without
//! regard to ASCII case; base names are compared exactly.
//!
//! | name              | meaning                                   |
//! |-------------------|-------------------------------------------|
//! | `base.zip`        | ZIP archive, or final volume of a split ZIP |
//! | `base.z01`, ...   | leading volumes of a split ZIP            |
//! | `base.7z`         | single 7z archive                         |
//! | `base.7z.001`, ...| volumes of a split 7z archive             |
//!
//! Anything else is ignored.
//!
//! # Examples
//!
//! ```
//! use archcheck_core::ArchiveFormat;
//! use archcheck_core::classify;
//! use std::path::Path;
//!
//! let units = classify([
//!     "photos.7z.002",
//!     "photos.7z.001",
//!     "notes.txt",
//!     "docs.zip",
//! ]);
//!
//! assert_eq!(units.len(), 2);
//! assert_eq!(units[0].representative, Path::new("photos.7z.001"));
//! assert!(units[0].multi_volume);
//! assert_eq!(units[1].format, ArchiveFormat::Zip);
//! ```

use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use crate::types::ArchiveFormat;
use crate::types::ArchiveUnit;

/// What a single file name says about its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameKind {
    Zip,
    ZipVolume(u32),
    SevenZip,
    SevenZipVolume(u32),
}

impl NameKind {
    const fn format(self) -> ArchiveFormat {
        match self {
            Self::Zip | Self::ZipVolume(_) => ArchiveFormat::Zip,
            Self::SevenZip | Self::SevenZipVolume(_) => ArchiveFormat::SevenZip,
        }
    }

    const fn volume(self) -> Option<u32> {
        match self {
            Self::ZipVolume(n) | Self::SevenZipVolume(n) => Some(n),
            Self::Zip | Self::SevenZip => None,
        }
    }
}

/// Files sharing a directory, base name and format family.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SetKey {
    parent: PathBuf,
    base: String,
    format: ArchiveFormat,
}

#[derive(Debug)]
struct Candidate {
    position: usize,
    path: PathBuf,
    kind: NameKind,
}

/// Splits a file name into its base name and role.
fn parse_name(file_name: &str) -> Option<(&str, NameKind)> {
    // ASCII lowercasing keeps byte offsets valid for slicing `file_name`.
    let lower = file_name.to_ascii_lowercase();

    if let Some(idx) = lower.rfind(".7z.") {
        let suffix = &lower[idx + 4..];
        if is_numeric(suffix)
            && let Ok(n) = suffix.parse::<u32>()
        {
            return Some((&file_name[..idx], NameKind::SevenZipVolume(n)));
        }
    }

    if let Some(base_len) = lower.len().checked_sub(3)
        && lower.ends_with(".7z")
    {
        return Some((&file_name[..base_len], NameKind::SevenZip));
    }

    if let Some(base_len) = lower.len().checked_sub(4)
        && lower.ends_with(".zip")
    {
        return Some((&file_name[..base_len], NameKind::Zip));
    }

    let idx = lower.rfind(".z")?;
    let digits = &lower[idx + 2..];
    if digits.len() >= 2
        && is_numeric(digits)
        && let Ok(n) = digits.parse::<u32>()
    {
        return Some((&file_name[..idx], NameKind::ZipVolume(n)));
    }

    None
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns the volume number encoded in a split-archive file name.
///
/// `a.7z.003` yields 3, `a.z02` yields 2. Plain `.zip` and `.7z` names, and
/// names that are not archives at all, yield `None`.
#[must_use]
pub fn volume_number(path: &Path) -> Option<u32> {
    let name = path.file_name()?.to_str()?;
    parse_name(name).and_then(|(_, kind)| kind.volume())
}

/// Groups file paths into archive units.
///
/// Units are returned in the input order of their representative file.
/// Duplicate paths are ignored. Unrecognized names are silently skipped.
pub fn classify<I, P>(paths: I) -> Vec<ArchiveUnit>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let mut seen = HashSet::new();
    let mut index: HashMap<SetKey, usize> = HashMap::new();
    let mut groups: Vec<Vec<Candidate>> = Vec::new();

    for (position, path) in paths.into_iter().map(Into::into).enumerate() {
        let Some((base, kind)) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(parse_name)
        else {
            continue;
        };

        let key = SetKey {
            parent: path.parent().map(Path::to_path_buf).unwrap_or_default(),
            base: base.to_string(),
            format: kind.format(),
        };

        if !seen.insert(path.clone()) {
            continue;
        }

        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(Candidate {
            position,
            path,
            kind,
        });
    }

    let mut units: Vec<(usize, ArchiveUnit)> = groups.into_iter().flat_map(build_units).collect();
    units.sort_by_key(|(position, _)| *position);
    units.into_iter().map(|(_, unit)| unit).collect()
}

/// Turns one name group into units, each tagged with its representative's
/// input position.
fn build_units(group: Vec<Candidate>) -> Vec<(usize, ArchiveUnit)> {
    let (mut volumes, plain): (Vec<Candidate>, Vec<Candidate>) =
        group.into_iter().partition(|c| c.kind.volume().is_some());

    let Some(format) = volumes.first().or_else(|| plain.first()).map(|c| c.kind.format()) else {
        return Vec::new();
    };

    if volumes.is_empty() {
        return plain
            .into_iter()
            .map(|c| (c.position, ArchiveUnit::single(c.path, format)))
            .collect();
    }

    volumes.sort_by(|a, b| {
        a.kind
            .volume()
            .cmp(&b.kind.volume())
            .then_with(|| a.path.cmp(&b.path))
    });

    // Split ZIP sets are tested through the trailing `.zip`; split 7z sets
    // through their first numbered volume.
    let representative = match format {
        ArchiveFormat::Zip => plain.first().unwrap_or(&volumes[0]),
        ArchiveFormat::SevenZip => &volumes[0],
    };
    let position = representative.position;
    let rep_path = representative.path.clone();

    let members = volumes
        .iter()
        .chain(plain.iter())
        .map(|c| c.path.clone())
        .collect();

    vec![(position, ArchiveUnit::split(rep_path, format, members))]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn reps(units: &[ArchiveUnit]) -> Vec<&Path> {
        units.iter().map(|u| u.representative.as_path()).collect()
    }

    #[test]
    fn test_parse_name() {
        assert_eq!(parse_name("a.zip"), Some(("a", NameKind::Zip)));
        assert_eq!(parse_name("a.ZIP"), Some(("a", NameKind::Zip)));
        assert_eq!(parse_name("a.z01"), Some(("a", NameKind::ZipVolume(1))));
        assert_eq!(parse_name("a.Z12"), Some(("a", NameKind::ZipVolume(12))));
        assert_eq!(parse_name("a.7z"), Some(("a", NameKind::SevenZip)));
        assert_eq!(
            parse_name("a.tar.7Z.010"),
            Some(("a.tar", NameKind::SevenZipVolume(10)))
        );
        assert_eq!(parse_name("a.z1"), None);
        assert_eq!(parse_name("a.zap"), None);
        assert_eq!(parse_name("a.7z.part"), None);
        assert_eq!(parse_name("a.7z.001.txt"), None);
        assert_eq!(parse_name("readme.txt"), None);
        assert_eq!(parse_name("a.7z."), None);
    }

    #[test]
    fn test_single_archives() {
        let units = classify(["a.zip", "b.7z"]);
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].format, ArchiveFormat::Zip);
        assert!(!units[0].multi_volume);
        assert_eq!(units[1].format, ArchiveFormat::SevenZip);
        assert!(!units[1].multi_volume);
    }

    #[test]
    fn test_sevenz_volumes_grouped() {
        let units = classify(["base.7z.003", "base.7z.001", "base.7z.002"]);
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].representative, Path::new("base.7z.001"));
        assert_eq!(units[0].format, ArchiveFormat::SevenZip);
        assert!(units[0].multi_volume);
        assert_eq!(
            units[0].members,
            vec![
                PathBuf::from("base.7z.001"),
                PathBuf::from("base.7z.002"),
                PathBuf::from("base.7z.003"),
            ]
        );
    }

    #[test]
    fn test_numeric_not_lexical_order() {
        let units = classify(["a.7z.002", "a.7z.010", "a.7z.001"]);
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].representative, Path::new("a.7z.001"));
        assert_eq!(
            units[0].members,
            vec![
                PathBuf::from("a.7z.001"),
                PathBuf::from("a.7z.002"),
                PathBuf::from("a.7z.010"),
            ]
        );
    }

    #[test]
    fn test_lone_first_volume_is_multi_volume() {
        let units = classify(["only.7z.001"]);
        assert_eq!(units.len(), 1);
        assert!(units[0].multi_volume);
        assert_eq!(units[0].members.len(), 1);
    }

    #[test]
    fn test_bare_7z_folds_into_volume_set() {
        let units = classify(["x.7z", "x.7z.001", "x.7z.002"]);
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].representative, Path::new("x.7z.001"));
        assert_eq!(units[0].members.last().unwrap(), Path::new("x.7z"));
    }

    #[test]
    fn test_split_zip_with_final_zip() {
        let units = classify(["base.z02", "base.zip", "base.z01"]);
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].representative, Path::new("base.zip"));
        assert_eq!(units[0].format, ArchiveFormat::Zip);
        assert!(units[0].multi_volume);
        assert_eq!(
            units[0].members,
            vec![
                PathBuf::from("base.z01"),
                PathBuf::from("base.z02"),
                PathBuf::from("base.zip"),
            ]
        );
    }

    #[test]
    fn test_split_zip_without_final_zip() {
        let units = classify(["base.z02", "base.z01"]);
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].representative, Path::new("base.z01"));
        assert!(units[0].multi_volume);
    }

    #[test]
    fn test_case_insensitive_extensions() {
        let units = classify(["BIG.Z01", "BIG.ZIP", "Other.7Z.001"]);
        assert_eq!(units.len(), 2);
        assert_eq!(reps(&units), vec![Path::new("BIG.ZIP"), Path::new("Other.7Z.001")]);
    }

    #[test]
    fn test_unrecognized_names_ignored() {
        let units = classify(["readme.md", "image.png", "archive.rar", "x.7z.bak"]);
        assert!(units.is_empty());
    }

    #[test]
    fn test_same_base_in_different_directories() {
        let units = classify(["one/a.7z.001", "two/a.7z.001", "one/a.7z.002"]);
        assert_eq!(units.len(), 2);
        assert_eq!(
            reps(&units),
            vec![Path::new("one/a.7z.001"), Path::new("two/a.7z.001")]
        );
        assert_eq!(units[0].members.len(), 2);
        assert_eq!(units[1].members.len(), 1);
    }

    #[test]
    fn test_zip_and_7z_with_same_base_are_separate() {
        let units = classify(["data.zip", "data.7z"]);
        assert_eq!(units.len(), 2);
    }

    #[test]
    fn test_output_follows_representative_position() {
        let units = classify(["late.7z.002", "first.zip", "late.7z.001", "last.7z"]);
        assert_eq!(
            reps(&units),
            vec![
                Path::new("first.zip"),
                Path::new("late.7z.001"),
                Path::new("last.7z"),
            ]
        );
    }

    #[test]
    fn test_duplicate_paths_ignored() {
        let units = classify(["a.zip", "a.zip"]);
        assert_eq!(units.len(), 1);
    }

    #[test]
    fn test_volume_number() {
        assert_eq!(volume_number(Path::new("dir/a.7z.007")), Some(7));
        assert_eq!(volume_number(Path::new("a.z03")), Some(3));
        assert_eq!(volume_number(Path::new("a.zip")), None);
        assert_eq!(volume_number(Path::new("a.7z")), None);
        assert_eq!(volume_number(Path::new("notes.txt")), None);
    }
}
