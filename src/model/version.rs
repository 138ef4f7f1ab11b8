use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::{MissingField, required};

/// Parsed version information of a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionData {
    major: u32,
    minor: u32,
    security: u32,
    patch: Option<u32>,
    build: u32,
    pre: Option<String>,
    optional: Option<String>,
    adopt_build_number: Option<u32>,
    semver: String,
    openjdk_version: String,
}

impl VersionData {
    pub fn builder() -> VersionDataBuilder {
        VersionDataBuilder::default()
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn security(&self) -> u32 {
        self.security
    }

    pub fn patch(&self) -> Option<u32> {
        self.patch
    }

    pub fn build(&self) -> u32 {
        self.build
    }

    /// Pre-release tag, e.g. `ea`.
    pub fn pre(&self) -> Option<&str> {
        self.pre.as_deref()
    }

    /// Trailing qualifier of the upstream version string.
    pub fn optional(&self) -> Option<&str> {
        self.optional.as_deref()
    }

    /// Vendor-specific rebuild counter.
    pub fn adopt_build_number(&self) -> Option<u32> {
        self.adopt_build_number
    }

    /// Semantic version string, e.g. `11.0.6+10`.
    pub fn semver(&self) -> &str {
        &self.semver
    }

    /// Raw upstream version string, e.g. `11.0.6+10`.
    pub fn openjdk_version(&self) -> &str {
        &self.openjdk_version
    }
}

#[derive(Debug, Clone, Default)]
pub struct VersionDataBuilder {
    pub major: Option<u32>,
    pub minor: Option<u32>,
    pub security: Option<u32>,
    pub patch: Option<u32>,
    pub build: Option<u32>,
    pub pre: Option<String>,
    pub optional: Option<String>,
    pub adopt_build_number: Option<u32>,
    pub semver: Option<String>,
    pub openjdk_version: Option<String>,
}

impl VersionDataBuilder {
    pub fn build(self) -> Result<VersionData, MissingField> {
        Ok(VersionData {
            major: required(self.major, "version.major")?,
            minor: required(self.minor, "version.minor")?,
            security: required(self.security, "version.security")?,
            patch: self.patch,
            build: required(self.build, "version.build")?,
            pre: self.pre,
            optional: self.optional,
            adopt_build_number: self.adopt_build_number,
            semver: required(self.semver, "version.semver")?,
            openjdk_version: required(self.openjdk_version, "version.openjdk_version")?,
        })
    }
}

/// Summary of the feature versions the service knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableReleases {
    available_releases: Vec<u32>,
    available_lts_releases: Vec<u32>,
    most_recent_feature_release: u32,
    most_recent_lts: u32,
    most_recent_feature_version: Option<u32>,
    tip_version: Option<u32>,
}

impl AvailableReleases {
    pub fn builder() -> AvailableReleasesBuilder {
        AvailableReleasesBuilder::default()
    }

    /// Feature versions with at least one GA release, in service order.
    pub fn available_releases(&self) -> &[u32] {
        &self.available_releases
    }

    /// Long-term-support feature versions, in service order.
    pub fn available_lts_releases(&self) -> &[u32] {
        &self.available_lts_releases
    }

    pub fn most_recent_feature_release(&self) -> u32 {
        self.most_recent_feature_release
    }

    pub fn most_recent_lts(&self) -> u32 {
        self.most_recent_lts
    }

    /// Newest feature version including early-access builds, when reported.
    pub fn most_recent_feature_version(&self) -> Option<u32> {
        self.most_recent_feature_version
    }

    /// Version currently in development upstream, when reported.
    pub fn tip_version(&self) -> Option<u32> {
        self.tip_version
    }
}

#[derive(Debug, Clone, Default)]
pub struct AvailableReleasesBuilder {
    pub available_releases: Vec<u32>,
    pub available_lts_releases: Vec<u32>,
    pub most_recent_feature_release: Option<u32>,
    pub most_recent_lts: Option<u32>,
    pub most_recent_feature_version: Option<u32>,
    pub tip_version: Option<u32>,
}

impl AvailableReleasesBuilder {
    pub fn build(self) -> Result<AvailableReleases, MissingField> {
        Ok(AvailableReleases {
            available_releases: self.available_releases,
            available_lts_releases: self.available_lts_releases,
            most_recent_feature_release: required(
                self.most_recent_feature_release,
                "available_releases.most_recent_feature_release",
            )?,
            most_recent_lts: required(self.most_recent_lts, "available_releases.most_recent_lts")?,
            most_recent_feature_version: self.most_recent_feature_version,
            tip_version: self.tip_version,
        })
    }
}

/// One end of a [`VersionRange`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionBound {
    pub name: Option<String>,
    pub exclusive: bool,
}

impl VersionBound {
    pub fn inclusive(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            exclusive: false,
        }
    }

    pub fn exclusive(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            exclusive: true,
        }
    }

    /// A bound that does not restrict anything.
    pub fn unbounded() -> Self {
        Self {
            name: None,
            exclusive: true,
        }
    }
}

/// Version filter rendered in the Maven range notation the service accepts,
/// e.g. `[11.0.0,12.0.0)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionRange {
    pub lower: VersionBound,
    pub upper: VersionBound,
}

impl VersionRange {
    pub fn new(lower: VersionBound, upper: VersionBound) -> Self {
        Self { lower, upper }
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.lower.exclusive { '(' } else { '[' };
        let close = if self.upper.exclusive { ')' } else { ']' };
        write!(
            f,
            "{}{},{}{}",
            open,
            self.lower.name.as_deref().unwrap_or(""),
            self.upper.name.as_deref().unwrap_or(""),
            close
        )
    }
}

/// Text that is not a `[lower,upper)`-style version range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid version range `{0}`: expected e.g. `[11,12)` or `(,17]`")]
pub struct InvalidVersionRange(pub String);

impl FromStr for VersionRange {
    type Err = InvalidVersionRange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidVersionRange(s.to_string());

        let mut chars = s.trim().chars();
        let lower_exclusive = match chars.next() {
            Some('[') => false,
            Some('(') => true,
            _ => return Err(invalid()),
        };
        let upper_exclusive = match chars.next_back() {
            Some(']') => false,
            Some(')') => true,
            _ => return Err(invalid()),
        };

        let (lower, upper) = chars.as_str().split_once(',').ok_or_else(invalid)?;
        if upper.contains(',') {
            return Err(invalid());
        }

        let bound = |name: &str, exclusive| VersionBound {
            name: Some(name.trim()).filter(|n| !n.is_empty()).map(str::to_string),
            exclusive,
        };

        Ok(VersionRange {
            lower: bound(lower, lower_exclusive),
            upper: bound(upper, upper_exclusive),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version_builder() -> VersionDataBuilder {
        VersionDataBuilder {
            major: Some(11),
            minor: Some(0),
            security: Some(6),
            build: Some(10),
            semver: Some("11.0.6+10".into()),
            openjdk_version: Some("11.0.6+10".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_version_data_build() {
        let version = version_builder().build().unwrap();
        assert_eq!(version.major(), 11);
        assert_eq!(version.security(), 6);
        assert_eq!(version.build(), 10);
        assert_eq!(version.pre(), None);
        assert_eq!(version.semver(), "11.0.6+10");
    }

    #[test]
    fn test_version_data_missing_semver() {
        let mut builder = version_builder();
        builder.semver = None;
        assert_eq!(builder.build(), Err(MissingField("version.semver")));
    }

    #[test]
    fn test_available_releases_requires_most_recent() {
        let builder = AvailableReleasesBuilder {
            available_releases: vec![8, 11],
            most_recent_lts: Some(11),
            ..Default::default()
        };
        assert_eq!(
            builder.build(),
            Err(MissingField("available_releases.most_recent_feature_release"))
        );
    }

    #[test]
    fn test_version_range_display() {
        let range = VersionRange::new(
            VersionBound::inclusive("11.0.0"),
            VersionBound::exclusive("12.0.0"),
        );
        assert_eq!(range.to_string(), "[11.0.0,12.0.0)");
    }

    #[test]
    fn test_version_range_open_lower() {
        let range = VersionRange::new(VersionBound::unbounded(), VersionBound::inclusive("17"));
        assert_eq!(range.to_string(), "(,17]");
    }

    #[test]
    fn test_version_range_parse() {
        let range: VersionRange = "[11.0.0,12.0.0)".parse().unwrap();
        assert_eq!(range.lower, VersionBound::inclusive("11.0.0"));
        assert_eq!(range.upper, VersionBound::exclusive("12.0.0"));

        let range: VersionRange = "(,17]".parse().unwrap();
        assert_eq!(range.lower.name, None);
        assert!(range.lower.exclusive);
        assert_eq!(range.upper, VersionBound::inclusive("17"));
        assert_eq!(range.to_string(), "(,17]");
    }

    #[test]
    fn test_version_range_parse_invalid() {
        assert!("11".parse::<VersionRange>().is_err());
        assert!("[11,12".parse::<VersionRange>().is_err());
        assert!("[11;12]".parse::<VersionRange>().is_err());
        assert!("[8,11,17]".parse::<VersionRange>().is_err());
        assert!("".parse::<VersionRange>().is_err());
    }
}
