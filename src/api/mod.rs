//! Client for the v3 release metadata API.
//!
//! The [`AdoptApi`] trait describes the operations; [`AdoptClient`] is the
//! HTTP implementation. Listing operations return [`Parsed`], which pairs
//! the records that mapped cleanly with the errors for those that didn't.

mod client;
mod request;

use anyhow::Result;
use async_trait::async_trait;
use url::Url;

use crate::model::{AvailableReleases, ListBinaryAssetView, Release, VersionData};
use crate::parser::ElementError;

pub use client::AdoptClient;
pub use request::{
    AssetsForLatestRequest, AssetsForReleaseRequest, AvailableReleasesRequest,
    BinaryForLatestRequest, BinaryForReleaseRequest, BinaryTarget, Endpoint, ReleaseFilter,
    ReleaseNamesRequest, ReleaseVersionsRequest,
};

/// Base URL used when none is configured.
pub const DEFAULT_API_URL: &str = "https://api.adoptium.net/v3";

/// Records from a listing response together with the elements that were
/// dropped while mapping it.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub value: T,
    pub errors: Vec<ElementError>,
}

impl<T> Parsed<T> {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Operations offered by the release metadata API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdoptApi: Send + Sync {
    /// Base URL all requests are resolved against.
    fn api_url(&self) -> &Url;

    /// Feature versions the service knows about.
    async fn available_releases(&self) -> Result<AvailableReleases>;

    /// Release names such as `jdk-11.0.6+10`, in service order.
    async fn release_names(&self, request: &ReleaseNamesRequest) -> Result<Vec<String>>;

    async fn release_versions(
        &self,
        request: &ReleaseVersionsRequest,
    ) -> Result<Parsed<Vec<VersionData>>>;

    /// Releases of one feature version with their binaries.
    async fn assets_for_release(
        &self,
        request: &AssetsForReleaseRequest,
    ) -> Result<Parsed<Vec<Release>>>;

    /// The newest binary of a feature version for every platform.
    async fn assets_for_latest(
        &self,
        request: &AssetsForLatestRequest,
    ) -> Result<Parsed<Vec<ListBinaryAssetView>>>;

    /// Download URI of one binary of a named release.
    fn binary_for_release(&self, request: &BinaryForReleaseRequest) -> Result<Url>;

    /// Download URI of the newest binary of a feature version.
    fn binary_for_latest(&self, request: &BinaryForLatestRequest) -> Result<Url>;
}
