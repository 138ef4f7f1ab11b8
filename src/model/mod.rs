//! Domain records returned by the client.
//!
//! Records are immutable once built. Each one comes with a builder whose
//! `build` fails when a mandatory field was never set; no other validation
//! (ranges, cross-field consistency) is performed.

mod names;
mod release;
mod version;

pub use names::{
    Architecture, HeapSize, ImageKind, JvmImplementation, OperatingSystem, ReleaseKind, SortOrder,
    Vendor,
};
pub use release::{
    Binary, BinaryBuilder, Installer, ListBinaryAssetView, ListBinaryAssetViewBuilder, Package,
    PackageBuilder, Release, ReleaseBuilder, Source, SourceBuilder,
};
pub use version::{
    AvailableReleases, AvailableReleasesBuilder, InvalidVersionRange, VersionBound, VersionData,
    VersionDataBuilder, VersionRange,
};

use chrono::{DateTime, FixedOffset};

/// Timestamp type carried by releases and binaries.
pub type Timestamp = DateTime<FixedOffset>;

/// A mandatory field was absent when building a record.
///
/// The payload names the field as `<record>.<field>`, e.g. `binary.project`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("missing required field `{0}`")]
pub struct MissingField(pub &'static str);

pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> Result<T, MissingField> {
    value.ok_or(MissingField(field))
}
