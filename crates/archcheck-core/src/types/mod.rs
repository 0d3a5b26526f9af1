//! Data types shared between classification and verification.

pub mod format;
pub mod unit;

pub use format::ArchiveFormat;
pub use unit::ArchiveUnit;
