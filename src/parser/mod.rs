//! Response parsing with per-element failure isolation.
//!
//! A document either decodes at the top level or the whole call fails with
//! [`ParseFailed`]. Inside a decoded document, each release, binary or
//! version entry is mapped on its own: an entry that cannot be mapped is
//! reported to the error sink as an [`ElementError`] and left out of the
//! result, while its siblings are returned in their original order.

mod ast;
mod error;
mod mapping;

use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::io::Read;
use url::Url;

use crate::model::{
    AvailableReleases, AvailableReleasesBuilder, ListBinaryAssetView, Release, VersionData,
};

pub use error::{ElementError, ErrorContext, MappingError, ParseFailed};

use ast::{AvailableReleasesJson, ReleaseNamesJson, ReleaseVersionsJson};
use mapping::Mapper;

/// Parser for a single response body.
///
/// Each parse method consumes the parser, reads the reader to its end and
/// returns. The reader is only read from; pass `&mut reader` to keep
/// ownership of it.
pub struct ResponseParser<R, S> {
    source: Url,
    reader: R,
    sink: S,
}

impl<R, S> ResponseParser<R, S>
where
    R: Read,
    S: FnMut(ElementError),
{
    /// `source` is only used to label errors; `sink` receives every dropped
    /// element, synchronously, before the parse method returns.
    pub fn new(source: Url, reader: R, sink: S) -> Self {
        Self {
            source,
            reader,
            sink,
        }
    }

    fn read<T: DeserializeOwned>(&mut self) -> Result<T, ParseFailed> {
        debug!("Parsing response from {}...", self.source);
        serde_json::from_reader(&mut self.reader).map_err(|cause| ParseFailed {
            uri: self.source.clone(),
            cause,
        })
    }

    pub fn parse_available_releases(mut self) -> Result<AvailableReleases, ParseFailed> {
        let ast: AvailableReleasesJson = self.read()?;

        let builder = AvailableReleasesBuilder {
            available_releases: ast.available_releases,
            available_lts_releases: ast.available_lts_releases,
            most_recent_feature_release: Some(ast.most_recent_feature_release),
            most_recent_lts: Some(ast.most_recent_lts),
            most_recent_feature_version: ast.most_recent_feature_version,
            tip_version: ast.tip_version,
        };

        // Both mandatory values are always set above.
        builder.build().map_err(|missing| ParseFailed {
            uri: self.source,
            cause: serde::de::Error::custom(missing),
        })
    }

    pub fn parse_release_names(mut self) -> Result<Vec<String>, ParseFailed> {
        let ast: ReleaseNamesJson = self.read()?;
        Ok(ast.releases)
    }

    pub fn parse_release_versions(mut self) -> Result<Vec<VersionData>, ParseFailed> {
        let ast: ReleaseVersionsJson = self.read()?;
        let mut mapper = Mapper::new(&self.source, &mut self.sink);
        Ok(mapper.isolate_all(ErrorContext::Version, ast.versions, Mapper::version_element))
    }

    pub fn parse_assets_for_release(mut self) -> Result<Vec<Release>, ParseFailed> {
        let ast: Vec<Value> = self.read()?;
        let mut mapper = Mapper::new(&self.source, &mut self.sink);
        Ok(mapper.isolate_all(ErrorContext::Release, ast, Mapper::release_element))
    }

    pub fn parse_assets_for_latest(mut self) -> Result<Vec<ListBinaryAssetView>, ParseFailed> {
        let ast: Vec<Value> = self.read()?;
        let mut mapper = Mapper::new(&self.source, &mut self.sink);
        Ok(mapper.isolate_all(ErrorContext::Release, ast, Mapper::asset_view_element))
    }
}
