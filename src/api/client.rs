use anyhow::Result;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use url::Url;

use crate::http::HttpClient;
use crate::model::{AvailableReleases, ListBinaryAssetView, Release, VersionData};
use crate::parser::{ElementError, ResponseParser};

use super::{
    AdoptApi, AssetsForLatestRequest, AssetsForReleaseRequest, AvailableReleasesRequest,
    BinaryForLatestRequest, BinaryForReleaseRequest, DEFAULT_API_URL, Endpoint, Parsed,
    ReleaseNamesRequest, ReleaseVersionsRequest,
};

/// HTTP implementation of [`AdoptApi`].
pub struct AdoptClient {
    http_client: HttpClient,
    api_url: Url,
}

impl AdoptClient {
    /// Client against [`DEFAULT_API_URL`].
    pub fn new(client: Client) -> Result<Self> {
        Ok(Self::from_http_client(
            HttpClient::new(client),
            Url::parse(DEFAULT_API_URL)?,
        ))
    }

    pub fn with_api_url(client: Client, api_url: Url) -> Self {
        Self::from_http_client(HttpClient::new(client), api_url)
    }

    pub fn from_http_client(http_client: HttpClient, api_url: Url) -> Self {
        Self {
            http_client,
            api_url,
        }
    }

    async fn fetch<E: Endpoint + Sync>(&self, endpoint: &E) -> Result<(Url, Vec<u8>)> {
        let url = endpoint.url(&self.api_url)?;
        let body = self.http_client.get_bytes(&url).await?;
        Ok((url, body))
    }
}

fn report(url: &Url, errors: &[ElementError]) {
    if !errors.is_empty() {
        warn!("{}: dropped {} malformed element(s)", url, errors.len());
    }
}

#[async_trait]
impl AdoptApi for AdoptClient {
    fn api_url(&self) -> &Url {
        &self.api_url
    }

    #[tracing::instrument(skip(self))]
    async fn available_releases(&self) -> Result<AvailableReleases> {
        let (url, body) = self.fetch(&AvailableReleasesRequest).await?;
        let releases = ResponseParser::new(url, body.as_slice(), |_: ElementError| {})
            .parse_available_releases()?;
        Ok(releases)
    }

    #[tracing::instrument(skip(self))]
    async fn release_names(&self, request: &ReleaseNamesRequest) -> Result<Vec<String>> {
        let (url, body) = self.fetch(request).await?;
        let names = ResponseParser::new(url, body.as_slice(), |_: ElementError| {})
            .parse_release_names()?;
        debug!("Found {} release names", names.len());
        Ok(names)
    }

    #[tracing::instrument(skip(self))]
    async fn release_versions(
        &self,
        request: &ReleaseVersionsRequest,
    ) -> Result<Parsed<Vec<VersionData>>> {
        let (url, body) = self.fetch(request).await?;
        let mut errors = Vec::new();
        let value = ResponseParser::new(url.clone(), body.as_slice(), |e: ElementError| {
            errors.push(e)
        })
        .parse_release_versions()?;
        report(&url, &errors);
        Ok(Parsed { value, errors })
    }

    #[tracing::instrument(skip(self))]
    async fn assets_for_release(
        &self,
        request: &AssetsForReleaseRequest,
    ) -> Result<Parsed<Vec<Release>>> {
        let (url, body) = self.fetch(request).await?;
        let mut errors = Vec::new();
        let value = ResponseParser::new(url.clone(), body.as_slice(), |e: ElementError| {
            errors.push(e)
        })
        .parse_assets_for_release()?;
        report(&url, &errors);
        Ok(Parsed { value, errors })
    }

    #[tracing::instrument(skip(self))]
    async fn assets_for_latest(
        &self,
        request: &AssetsForLatestRequest,
    ) -> Result<Parsed<Vec<ListBinaryAssetView>>> {
        let (url, body) = self.fetch(request).await?;
        let mut errors = Vec::new();
        let value = ResponseParser::new(url.clone(), body.as_slice(), |e: ElementError| {
            errors.push(e)
        })
        .parse_assets_for_latest()?;
        report(&url, &errors);
        Ok(Parsed { value, errors })
    }

    fn binary_for_release(&self, request: &BinaryForReleaseRequest) -> Result<Url> {
        request.url(&self.api_url)
    }

    fn binary_for_latest(&self, request: &BinaryForLatestRequest) -> Result<Url> {
        request.url(&self.api_url)
    }
}
