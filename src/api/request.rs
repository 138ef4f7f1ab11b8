//! Request types and the URIs they resolve to.

use anyhow::{Result, anyhow};
use url::Url;

use crate::model::{
    Architecture, HeapSize, ImageKind, JvmImplementation, OperatingSystem, ReleaseKind, SortOrder,
    Vendor, VersionRange,
};

/// Something that can be resolved against the API base URL.
pub trait Endpoint {
    fn url(&self, base: &Url) -> Result<Url>;
}

/// Appends `segments` to the base path and `query` (if any) as the query
/// string. Segments are percent-encoded.
fn build_url(base: &Url, segments: &[&str], query: &[(&'static str, String)]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| anyhow!("API URL {} cannot be used as a base", base))?
        .pop_if_empty()
        .extend(segments);

    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
    }

    Ok(url)
}

fn push<T: ToString>(query: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<T>) {
    if let Some(value) = value {
        query.push((key, value.to_string()));
    }
}

/// `GET /info/available_releases`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableReleasesRequest;

impl Endpoint for AvailableReleasesRequest {
    fn url(&self, base: &Url) -> Result<Url> {
        build_url(base, &["info", "available_releases"], &[])
    }
}

/// Filters shared by the release name and release version listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseFilter {
    pub release_kind: Option<ReleaseKind>,
    pub vendor: Option<Vendor>,
    pub version: Option<VersionRange>,
    pub project: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ReleaseFilter {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push(&mut query, "release_type", &self.release_kind);
        push(&mut query, "vendor", &self.vendor);
        push(&mut query, "version", &self.version);
        push(&mut query, "project", &self.project);
        push(&mut query, "sort_order", &self.sort_order);
        push(&mut query, "page", &self.page);
        push(&mut query, "page_size", &self.page_size);
        query
    }
}

/// `GET /info/release_names`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseNamesRequest {
    pub filter: ReleaseFilter,
}

impl Endpoint for ReleaseNamesRequest {
    fn url(&self, base: &Url) -> Result<Url> {
        build_url(base, &["info", "release_names"], &self.filter.query())
    }
}

/// `GET /info/release_versions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseVersionsRequest {
    pub filter: ReleaseFilter,
}

impl Endpoint for ReleaseVersionsRequest {
    fn url(&self, base: &Url) -> Result<Url> {
        build_url(base, &["info", "release_versions"], &self.filter.query())
    }
}

/// `GET /assets/feature_releases/{feature_version}/{release_type}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetsForReleaseRequest {
    pub feature_version: u32,
    pub release_kind: ReleaseKind,
    pub architecture: Option<Architecture>,
    pub heap_size: Option<HeapSize>,
    pub image_kind: Option<ImageKind>,
    pub jvm_implementation: Option<JvmImplementation>,
    pub operating_system: Option<OperatingSystem>,
    pub project: Option<String>,
    pub vendor: Option<Vendor>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl AssetsForReleaseRequest {
    pub fn new(feature_version: u32, release_kind: ReleaseKind) -> Self {
        Self {
            feature_version,
            release_kind,
            architecture: None,
            heap_size: None,
            image_kind: None,
            jvm_implementation: None,
            operating_system: None,
            project: None,
            vendor: None,
            sort_order: None,
            page: None,
            page_size: None,
        }
    }
}

impl Endpoint for AssetsForReleaseRequest {
    fn url(&self, base: &Url) -> Result<Url> {
        let mut query = Vec::new();
        push(&mut query, "architecture", &self.architecture);
        push(&mut query, "heap_size", &self.heap_size);
        push(&mut query, "image_type", &self.image_kind);
        push(&mut query, "jvm_impl", &self.jvm_implementation);
        push(&mut query, "os", &self.operating_system);
        push(&mut query, "project", &self.project);
        push(&mut query, "vendor", &self.vendor);
        push(&mut query, "sort_order", &self.sort_order);
        push(&mut query, "page", &self.page);
        push(&mut query, "page_size", &self.page_size);

        let feature = self.feature_version.to_string();
        build_url(
            base,
            &["assets", "feature_releases", feature.as_str(), self.release_kind.as_str()],
            &query,
        )
    }
}

/// `GET /assets/latest/{feature_version}/{jvm_impl}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetsForLatestRequest {
    pub feature_version: u32,
    pub jvm_implementation: JvmImplementation,
}

impl Endpoint for AssetsForLatestRequest {
    fn url(&self, base: &Url) -> Result<Url> {
        let feature = self.feature_version.to_string();
        build_url(
            base,
            &["assets", "latest", feature.as_str(), self.jvm_implementation.as_str()],
            &[],
        )
    }
}

/// Platform coordinates identifying one binary of a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryTarget {
    pub operating_system: OperatingSystem,
    pub architecture: Architecture,
    pub image_kind: ImageKind,
    pub jvm_implementation: JvmImplementation,
    pub heap_size: HeapSize,
    pub vendor: Vendor,
}

impl BinaryTarget {
    fn segments(&self) -> [&str; 6] {
        [
            self.operating_system.as_str(),
            self.architecture.as_str(),
            self.image_kind.as_str(),
            self.jvm_implementation.as_str(),
            self.heap_size.as_str(),
            self.vendor.as_str(),
        ]
    }
}

/// `/binary/latest/{feature_version}/{release_type}/{os}/{arch}/{image_type}/{jvm_impl}/{heap_size}/{vendor}`
///
/// The service answers with a redirect to the artifact, so only the URI is
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryForLatestRequest {
    pub feature_version: u32,
    pub release_kind: ReleaseKind,
    pub target: BinaryTarget,
    pub project: Option<String>,
}

impl Endpoint for BinaryForLatestRequest {
    fn url(&self, base: &Url) -> Result<Url> {
        let feature = self.feature_version.to_string();
        let mut segments = vec!["binary", "latest", feature.as_str(), self.release_kind.as_str()];
        segments.extend(self.target.segments());

        let mut query = Vec::new();
        push(&mut query, "project", &self.project);
        build_url(base, &segments, &query)
    }
}

/// `/binary/version/{release_name}/{os}/{arch}/{image_type}/{jvm_impl}/{heap_size}/{vendor}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryForReleaseRequest {
    pub release_name: String,
    pub target: BinaryTarget,
    pub project: Option<String>,
}

impl Endpoint for BinaryForReleaseRequest {
    fn url(&self, base: &Url) -> Result<Url> {
        let mut segments = vec!["binary", "version", self.release_name.as_str()];
        segments.extend(self.target.segments());

        let mut query = Vec::new();
        push(&mut query, "project", &self.project);
        build_url(base, &segments, &query)
    }
}
