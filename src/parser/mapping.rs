//! Conversion of wire shapes into domain records with per-element isolation.

use log::{debug, error};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::model::{
    Binary, BinaryBuilder, ListBinaryAssetView, ListBinaryAssetViewBuilder, Package,
    PackageBuilder, Release, ReleaseBuilder, Source, SourceBuilder, Timestamp, VersionData,
    VersionDataBuilder,
};

use super::ast::{
    BinaryJson, ListBinaryAssetViewJson, PackageJson, ReleaseJson, SourceJson, VersionJson,
};
use super::error::{ElementError, ErrorContext, MappingError};

type Mapped<T> = Result<T, MappingError>;

/// Maps decoded documents into records, handing every dropped element to
/// the sink.
pub(super) struct Mapper<'a, S> {
    source: &'a Url,
    sink: &'a mut S,
}

impl<'a, S: FnMut(ElementError)> Mapper<'a, S> {
    pub(super) fn new(source: &'a Url, sink: &'a mut S) -> Self {
        Self { source, sink }
    }

    /// Maps every element independently, keeping the survivors in order.
    pub(super) fn isolate_all<T>(
        &mut self,
        context: ErrorContext,
        elements: Vec<Value>,
        map: impl Fn(&mut Self, Value) -> Mapped<T>,
    ) -> Vec<T> {
        let mut mapped = Vec::with_capacity(elements.len());
        for element in elements {
            let result = map(self, element);
            if let Some(value) = self.isolate(context, result) {
                mapped.push(value);
            }
        }
        mapped
    }

    fn isolate<T>(&mut self, context: ErrorContext, result: Mapped<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                error!("{}: dropping {} element: {}", self.source, context, e);
                (self.sink)(ElementError::new(context, e, self.source.clone()));
                None
            }
        }
    }

    pub(super) fn version_element(&mut self, element: Value) -> Mapped<VersionData> {
        to_version_data(decode(element)?)
    }

    pub(super) fn release_element(&mut self, element: Value) -> Mapped<Release> {
        let json: ReleaseJson = decode(element)?;

        let builder = ReleaseBuilder {
            id: json.id,
            release_name: json.release_name,
            release_link: link(json.release_link, "release.release_link")?,
            release_type: json.release_type.map(Into::into),
            vendor: json.vendor.map(Into::into),
            timestamp: timestamp(json.timestamp, "release.timestamp")?,
            updated_at: timestamp(json.updated_at, "release.updated_at")?,
            download_count: json.download_count,
            version_data: json.version_data.map(to_version_data).transpose()?,
            source: json.source.map(to_source).transpose()?,
            binaries: Vec::new(),
        };

        // Binaries are only looked at once the release itself is valid.
        let release = builder.build()?;
        let binaries = self.isolate_all(ErrorContext::Binary, json.binaries, |_, binary| {
            to_binary(decode(binary)?)
        });

        Ok(release.with_binaries(binaries))
    }

    pub(super) fn asset_view_element(&mut self, element: Value) -> Mapped<ListBinaryAssetView> {
        let json: ListBinaryAssetViewJson = decode(element)?;

        let builder = ListBinaryAssetViewBuilder {
            release_name: json.release_name,
            binary: json.binary.map(to_binary).transpose()?,
        };

        Ok(builder.build()?)
    }
}

fn decode<T: DeserializeOwned>(element: Value) -> Mapped<T> {
    Ok(serde_json::from_value(element)?)
}

fn timestamp(text: Option<String>, field: &'static str) -> Mapped<Option<Timestamp>> {
    text.map(|text| {
        chrono::DateTime::parse_from_rfc3339(&text)
            .map_err(|cause| MappingError::Timestamp { field, cause })
    })
    .transpose()
}

fn link(text: Option<String>, field: &'static str) -> Mapped<Option<Url>> {
    text.map(|text| Url::parse(&text).map_err(|cause| MappingError::Link { field, cause }))
        .transpose()
}

fn to_version_data(json: VersionJson) -> Mapped<VersionData> {
    let builder = VersionDataBuilder {
        major: json.major,
        minor: json.minor,
        security: json.security,
        patch: json.patch,
        build: json.build,
        pre: json.pre,
        optional: json.optional,
        adopt_build_number: json.adopt_build_number,
        semver: json.semver,
        openjdk_version: json.openjdk_version,
    };
    Ok(builder.build()?)
}

fn to_source(json: SourceJson) -> Mapped<Source> {
    let builder = SourceBuilder {
        name: json.name,
        link: link(json.link, "source.link")?,
        size: json.size,
    };
    Ok(builder.build()?)
}

fn to_package_builder(json: PackageJson, role: &'static str) -> Mapped<PackageBuilder> {
    let (link_field, checksum_field, signature_field) = match role {
        "installer" => (
            "installer.link",
            "installer.checksum_link",
            "installer.signature_link",
        ),
        _ => (
            "package.link",
            "package.checksum_link",
            "package.signature_link",
        ),
    };

    Ok(PackageBuilder {
        name: json.name,
        link: link(json.link, link_field)?,
        size: json.size,
        download_count: json.download_count,
        checksum: json.checksum,
        checksum_link: link(json.checksum_link, checksum_field)?,
        signature_link: link(json.signature_link, signature_field)?,
    })
}

fn to_package(json: PackageJson) -> Mapped<Package> {
    Ok(to_package_builder(json, "package")?.build()?)
}

fn to_installer(json: PackageJson) -> Mapped<Package> {
    Ok(to_package_builder(json, "installer")?.build_installer()?)
}

fn to_binary(json: BinaryJson) -> Mapped<Binary> {
    let builder = BinaryBuilder {
        architecture: json.architecture.map(Into::into),
        operating_system: json.os.map(Into::into),
        image_type: json.image_type.map(Into::into),
        jvm_implementation: json.jvm_impl.map(Into::into),
        heap_size: json.heap_size.map(Into::into),
        download_count: json.download_count,
        updated_at: timestamp(json.updated_at, "binary.updated_at")?,
        project: json.project,
        package: json.package.map(to_package).transpose()?,
        installer: json.installer.map(to_installer).transpose()?,
        scm_reference: json.scm_ref,
    };
    let binary = builder.build()?;
    log_unknown_spellings(&binary);
    Ok(binary)
}

/// Unknown spellings are kept as-is; they only show up in debug logs.
fn log_unknown_spellings(binary: &Binary) {
    let fields = [
        ("architecture", binary.architecture().is_known(), binary.architecture().as_str()),
        ("os", binary.operating_system().is_known(), binary.operating_system().as_str()),
        ("image_type", binary.image_type().is_known(), binary.image_type().as_str()),
        ("jvm_impl", binary.jvm_implementation().is_known(), binary.jvm_implementation().as_str()),
        ("heap_size", binary.heap_size().is_known(), binary.heap_size().as_str()),
    ];
    for (field, known, text) in fields {
        if !known {
            debug!("Unrecognized {} spelling {:?}, keeping it", field, text);
        }
    }
}
