//! Logical archive unit produced by classification.

use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

use super::ArchiveFormat;
use crate::classify::volume_number;

/// One logical archive to test, possibly spanning several files.
///
/// `representative` is the file handed to a verifier. For split 7z sets it is
/// the volume with the smallest numeric suffix; for split ZIP sets it is the
/// `.zip` file when present, otherwise the first `.zNN` volume.
///
/// # Examples
///
/// ```
/// use archcheck_core::ArchiveFormat;
/// use archcheck_core::ArchiveUnit;
///
/// let unit = ArchiveUnit::single("backup.zip", ArchiveFormat::Zip);
/// assert!(!unit.multi_volume);
/// assert_eq!(unit.tag(), "ZIP");
/// assert_eq!(unit.members.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveUnit {
    /// File to hand to the verifier.
    pub representative: PathBuf,

    /// Container format.
    pub format: ArchiveFormat,

    /// Whether the archive is split across several volumes.
    pub multi_volume: bool,

    /// Every file belonging to the unit, in volume order.
    pub members: Vec<PathBuf>,
}

impl ArchiveUnit {
    /// Creates a single-file unit.
    #[must_use]
    pub fn single(path: impl Into<PathBuf>, format: ArchiveFormat) -> Self {
        let path = path.into();
        Self {
            members: vec![path.clone()],
            representative: path,
            format,
            multi_volume: false,
        }
    }

    /// Creates a multi-volume unit. `members` must already be in volume order.
    #[must_use]
    pub fn split(representative: PathBuf, format: ArchiveFormat, members: Vec<PathBuf>) -> Self {
        Self {
            representative,
            format,
            multi_volume: true,
            members,
        }
    }

    /// Display tag, e.g. `ZIP` or `7z multi-volume`.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.format.unit_tag(self.multi_volume)
    }

    /// Path of the representative file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.representative
    }

    /// Volume numbers absent between 1 and the highest numbered volume.
    ///
    /// Always empty for single-file units. The trailing `.zip` of a split ZIP
    /// set carries no number and is not considered.
    ///
    /// # Examples
    ///
    /// ```
    /// use archcheck_core::classify;
    ///
    /// let units = classify(["set.7z.001", "set.7z.002", "set.7z.004"]);
    /// assert_eq!(units[0].missing_volumes(), vec![3]);
    /// ```
    #[must_use]
    pub fn missing_volumes(&self) -> Vec<u32> {
        if !self.multi_volume {
            return Vec::new();
        }

        let present: BTreeSet<u32> = self
            .members
            .iter()
            .filter_map(|member| volume_number(member))
            .collect();

        let Some(&highest) = present.last() else {
            return Vec::new();
        };

        (1..highest).filter(|n| !present.contains(n)).collect()
    }
}
