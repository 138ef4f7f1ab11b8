//! Wire shapes of the service's JSON documents.
//!
//! Top-level documents are strict: their required keys must be present.
//! Element shapes are lenient: every field is optional so that presence is
//! checked by the record builders, and array elements are kept as raw
//! `Value`s until each one is decoded on its own.

use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Debug)]
pub struct AvailableReleasesJson {
    pub available_releases: Vec<u32>,
    pub available_lts_releases: Vec<u32>,
    pub most_recent_feature_release: u32,
    pub most_recent_lts: u32,
    #[serde(default)]
    pub most_recent_feature_version: Option<u32>,
    #[serde(default)]
    pub tip_version: Option<u32>,
}

#[derive(Deserialize, Debug)]
pub struct ReleaseNamesJson {
    pub releases: Vec<String>,
}

#[derive(Deserialize, Debug)]
pub struct ReleaseVersionsJson {
    pub versions: Vec<Value>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct VersionJson {
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

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct PackageJson {
    pub name: Option<String>,
    pub link: Option<String>,
    pub size: Option<u64>,
    pub download_count: Option<u64>,
    pub checksum: Option<String>,
    pub checksum_link: Option<String>,
    pub signature_link: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct SourceJson {
    pub name: Option<String>,
    pub link: Option<String>,
    pub size: Option<u64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct BinaryJson {
    pub architecture: Option<String>,
    pub os: Option<String>,
    pub image_type: Option<String>,
    pub jvm_impl: Option<String>,
    pub heap_size: Option<String>,
    pub download_count: Option<u64>,
    pub updated_at: Option<String>,
    pub project: Option<String>,
    pub package: Option<PackageJson>,
    pub installer: Option<PackageJson>,
    pub scm_ref: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ReleaseJson {
    pub id: Option<String>,
    pub release_name: Option<String>,
    pub release_link: Option<String>,
    pub release_type: Option<String>,
    pub vendor: Option<String>,
    pub timestamp: Option<String>,
    pub updated_at: Option<String>,
    pub download_count: Option<u64>,
    pub version_data: Option<VersionJson>,
    pub source: Option<SourceJson>,
    pub binaries: Vec<Value>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ListBinaryAssetViewJson {
    pub release_name: Option<String>,
    pub binary: Option<BinaryJson>,
}
