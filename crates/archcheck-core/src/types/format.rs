//! Archive format enumeration.

use std::fmt;

/// Archive container formats that can be verified.
///
/// The format is decided once, from the file name, by the classifier and is
/// carried on every [`ArchiveUnit`](super::ArchiveUnit). Verification never
/// inspects file names again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveFormat {
    /// ZIP archive (`.zip`, split volumes `.z01`, `.z02`, ...).
    Zip,
    /// 7z archive (`.7z`, split volumes `.7z.001`, `.7z.002`, ...).
    SevenZip,
}

impl ArchiveFormat {
    /// Short display tag used in console output.
    ///
    /// # Examples
    ///
    /// ```
    /// use archcheck_core::ArchiveFormat;
    ///
    /// assert_eq!(ArchiveFormat::Zip.tag(), "ZIP");
    /// assert_eq!(ArchiveFormat::SevenZip.tag(), "7z");
    /// ```
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Zip => "ZIP",
            Self::SevenZip => "7z",
        }
    }

    /// Display tag including the multi-volume qualifier.
    #[must_use]
    pub const fn unit_tag(self, multi_volume: bool) -> &'static str {
        match (self, multi_volume) {
            (Self::Zip, false) => "ZIP",
            (Self::Zip, true) => "ZIP multi-volume",
            (Self::SevenZip, false) => "7z",
            (Self::SevenZip, true) => "7z multi-volume",
        }
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_tags() {
        assert_eq!(ArchiveFormat::Zip.unit_tag(false), "ZIP");
        assert_eq!(ArchiveFormat::Zip.unit_tag(true), "ZIP multi-volume");
        assert_eq!(ArchiveFormat::SevenZip.unit_tag(false), "7z");
        assert_eq!(ArchiveFormat::SevenZip.unit_tag(true), "7z multi-volume");
    }

    #[test]
    fn test_display() {
        assert_eq!(ArchiveFormat::SevenZip.to_string(), "7z");
        assert_ne!(ArchiveFormat::SevenZip, ArchiveFormat::Zip);
    }
}
