use serde::Serialize;
use url::Url;

use super::{
    Architecture, HeapSize, ImageKind, JvmImplementation, MissingField, OperatingSystem,
    ReleaseKind, Timestamp, Vendor, VersionData, required,
};

/// A downloadable file: either the main package of a binary or its
/// platform installer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    name: String,
    link: Url,
    size: u64,
    download_count: u64,
    checksum: Option<String>,
    checksum_link: Option<Url>,
    signature_link: Option<Url>,
}

/// Installers share the package shape.
pub type Installer = Package;

impl Package {
    pub fn builder() -> PackageBuilder {
        PackageBuilder::default()
    }

    /// File name, e.g. `OpenJDK11U-jdk_x64_linux_hotspot_11.0.6_10.tar.gz`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn link(&self) -> &Url {
        &self.link
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn download_count(&self) -> u64 {
        self.download_count
    }

    /// Hex-encoded SHA-256 of the file.
    pub fn checksum(&self) -> Option<&str> {
        self.checksum.as_deref()
    }

    pub fn checksum_link(&self) -> Option<&Url> {
        self.checksum_link.as_ref()
    }

    pub fn signature_link(&self) -> Option<&Url> {
        self.signature_link.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PackageBuilder {
    pub name: Option<String>,
    pub link: Option<Url>,
    pub size: Option<u64>,
    pub download_count: Option<u64>,
    pub checksum: Option<String>,
    pub checksum_link: Option<Url>,
    pub signature_link: Option<Url>,
}

impl PackageBuilder {
    pub fn build(self) -> Result<Package, MissingField> {
        self.build_with([
            "package.name",
            "package.link",
            "package.size",
            "package.download_count",
        ])
    }

    /// Same as [`build`](Self::build), reporting missing fields under
    /// `installer.`.
    pub fn build_installer(self) -> Result<Installer, MissingField> {
        self.build_with([
            "installer.name",
            "installer.link",
            "installer.size",
            "installer.download_count",
        ])
    }

    fn build_with(self, fields: [&'static str; 4]) -> Result<Package, MissingField> {
        let [name, link, size, download_count] = fields;
        Ok(Package {
            name: required(self.name, name)?,
            link: required(self.link, link)?,
            size: required(self.size, size)?,
            download_count: required(self.download_count, download_count)?,
            checksum: self.checksum,
            checksum_link: self.checksum_link,
            signature_link: self.signature_link,
        })
    }
}

/// Source archive of a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    name: String,
    link: Url,
    size: u64,
}

impl Source {
    pub fn builder() -> SourceBuilder {
        SourceBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn link(&self) -> &Url {
        &self.link
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

#[derive(Debug, Clone, Default)]
pub struct SourceBuilder {
    pub name: Option<String>,
    pub link: Option<Url>,
    pub size: Option<u64>,
}

impl SourceBuilder {
    pub fn build(self) -> Result<Source, MissingField> {
        Ok(Source {
            name: required(self.name, "source.name")?,
            link: required(self.link, "source.link")?,
            size: required(self.size, "source.size")?,
        })
    }
}

/// One platform build of a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binary {
    architecture: Architecture,
    operating_system: OperatingSystem,
    image_type: ImageKind,
    jvm_implementation: JvmImplementation,
    heap_size: HeapSize,
    download_count: u64,
    updated_at: Timestamp,
    project: String,
    package: Package,
    installer: Option<Installer>,
    scm_reference: Option<String>,
}

impl Binary {
    pub fn builder() -> BinaryBuilder {
        BinaryBuilder::default()
    }

    pub fn architecture(&self) -> &Architecture {
        &self.architecture
    }

    pub fn operating_system(&self) -> &OperatingSystem {
        &self.operating_system
    }

    pub fn image_type(&self) -> &ImageKind {
        &self.image_type
    }

    pub fn jvm_implementation(&self) -> &JvmImplementation {
        &self.jvm_implementation
    }

    pub fn heap_size(&self) -> &HeapSize {
        &self.heap_size
    }

    pub fn download_count(&self) -> u64 {
        self.download_count
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Owning project, usually `jdk`.
    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn package(&self) -> &Package {
        &self.package
    }

    pub fn installer(&self) -> Option<&Installer> {
        self.installer.as_ref()
    }

    /// Source-control tag the binary was built from.
    pub fn scm_reference(&self) -> Option<&str> {
        self.scm_reference.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct BinaryBuilder {
    pub architecture: Option<Architecture>,
    pub operating_system: Option<OperatingSystem>,
    pub image_type: Option<ImageKind>,
    pub jvm_implementation: Option<JvmImplementation>,
    pub heap_size: Option<HeapSize>,
    pub download_count: Option<u64>,
    pub updated_at: Option<Timestamp>,
    pub project: Option<String>,
    pub package: Option<Package>,
    pub installer: Option<Installer>,
    pub scm_reference: Option<String>,
}

impl BinaryBuilder {
    pub fn build(self) -> Result<Binary, MissingField> {
        Ok(Binary {
            architecture: required(self.architecture, "binary.architecture")?,
            operating_system: required(self.operating_system, "binary.os")?,
            image_type: required(self.image_type, "binary.image_type")?,
            jvm_implementation: required(self.jvm_implementation, "binary.jvm_impl")?,
            heap_size: required(self.heap_size, "binary.heap_size")?,
            download_count: required(self.download_count, "binary.download_count")?,
            updated_at: required(self.updated_at, "binary.updated_at")?,
            project: required(self.project, "binary.project")?,
            package: required(self.package, "binary.package")?,
            installer: self.installer,
            scm_reference: self.scm_reference,
        })
    }
}

/// A published release with the binaries that survived parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    id: String,
    release_name: String,
    release_link: Url,
    release_type: ReleaseKind,
    vendor: Vendor,
    timestamp: Timestamp,
    updated_at: Timestamp,
    download_count: u64,
    version_data: VersionData,
    source: Option<Source>,
    binaries: Vec<Binary>,
}

impl Release {
    pub fn builder() -> ReleaseBuilder {
        ReleaseBuilder::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Release name, e.g. `jdk-11.0.6+10`.
    pub fn release_name(&self) -> &str {
        &self.release_name
    }

    pub fn release_link(&self) -> &Url {
        &self.release_link
    }

    pub fn release_type(&self) -> &ReleaseKind {
        &self.release_type
    }

    pub fn vendor(&self) -> &Vendor {
        &self.vendor
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn download_count(&self) -> u64 {
        self.download_count
    }

    pub fn version_data(&self) -> &VersionData {
        &self.version_data
    }

    pub fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    pub(crate) fn with_binaries(mut self, binaries: Vec<Binary>) -> Self {
        self.binaries = binaries;
        self
    }

    /// Binaries in document order.
    pub fn binaries(&self) -> &[Binary] {
        &self.binaries
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReleaseBuilder {
    pub id: Option<String>,
    pub release_name: Option<String>,
    pub release_link: Option<Url>,
    pub release_type: Option<ReleaseKind>,
    pub vendor: Option<Vendor>,
    pub timestamp: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub download_count: Option<u64>,
    pub version_data: Option<VersionData>,
    pub source: Option<Source>,
    pub binaries: Vec<Binary>,
}

impl ReleaseBuilder {
    pub fn add_binary(&mut self, binary: Binary) -> &mut Self {
        self.binaries.push(binary);
        self
    }

    pub fn build(self) -> Result<Release, MissingField> {
        Ok(Release {
            id: required(self.id, "release.id")?,
            release_name: required(self.release_name, "release.release_name")?,
            release_link: required(self.release_link, "release.release_link")?,
            release_type: required(self.release_type, "release.release_type")?,
            vendor: required(self.vendor, "release.vendor")?,
            timestamp: required(self.timestamp, "release.timestamp")?,
            updated_at: required(self.updated_at, "release.updated_at")?,
            download_count: required(self.download_count, "release.download_count")?,
            version_data: required(self.version_data, "release.version_data")?,
            source: self.source,
            binaries: self.binaries,
        })
    }
}

/// A binary paired with the name of the release it belongs to, as returned
/// by the "latest assets" endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListBinaryAssetView {
    release_name: String,
    binary: Binary,
}

impl ListBinaryAssetView {
    pub fn builder() -> ListBinaryAssetViewBuilder {
        ListBinaryAssetViewBuilder::default()
    }

    pub fn release_name(&self) -> &str {
        &self.release_name
    }

    pub fn binary(&self) -> &Binary {
        &self.binary
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListBinaryAssetViewBuilder {
    pub release_name: Option<String>,
    pub binary: Option<Binary>,
}

impl ListBinaryAssetViewBuilder {
    pub fn build(self) -> Result<ListBinaryAssetView, MissingField> {
        Ok(ListBinaryAssetView {
            release_name: required(self.release_name, "view.release_name")?,
            binary: required(self.binary, "view.binary")?,
        })
    }
}
