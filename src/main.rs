use adoptv3::api::{
    AssetsForLatestRequest, AssetsForReleaseRequest, BinaryForLatestRequest,
    BinaryForReleaseRequest, BinaryTarget, ReleaseFilter, ReleaseNamesRequest,
    ReleaseVersionsRequest,
};
use adoptv3::commands::{self, Output, config::Config};
use adoptv3::model::{
    Architecture, HeapSize, ImageKind, JvmImplementation, OperatingSystem, ReleaseKind, SortOrder,
    Vendor, VersionRange,
};
use anyhow::Result;
use clap::Parser;

/// adoptv3 - query the Adoptium / AdoptOpenJDK v3 API
///
/// Lists OpenJDK releases and binaries and resolves download links.
/// Malformed entries in a response are skipped with a warning on stderr.
///
/// Examples:
///   adoptv3 available                     # Feature versions on offer
///   adoptv3 assets 17 --os linux          # GA releases of 17 for Linux
///   adoptv3 binary-url latest 21 --os mac # Download link for the newest 21
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API base URL (defaults to https://api.adoptium.net/v3)
    #[arg(
        long = "api-url",
        env = "ADOPTV3_API_URL",
        value_name = "URL",
        global = true
    )]
    pub api_url: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Show the feature versions the service offers
    Available,

    /// List release names such as jdk-11.0.6+10
    ReleaseNames(FilterArgs),

    /// List release versions
    ReleaseVersions(FilterArgs),

    /// List releases of a feature version with their binaries
    Assets(AssetsArgs),

    /// Show the newest binary of a feature version for each platform
    Latest(LatestArgs),

    /// Print the download link of a binary
    #[command(subcommand)]
    BinaryUrl(BinaryUrlCommands),
}

#[derive(clap::Subcommand, Debug)]
enum BinaryUrlCommands {
    /// Binary of a named release
    Release(BinaryReleaseArgs),

    /// Newest binary of a feature version
    Latest(BinaryLatestArgs),
}

#[derive(clap::Args, Debug)]
pub struct FilterArgs {
    /// Release type: ga or ea
    #[arg(long = "release-type", value_name = "TYPE")]
    pub release_kind: Option<ReleaseKind>,

    #[arg(long)]
    pub vendor: Option<Vendor>,

    /// Version range in Maven notation, e.g. [11.0.0,12.0.0)
    #[arg(long, value_name = "RANGE")]
    pub version: Option<VersionRange>,

    #[arg(long)]
    pub project: Option<String>,

    /// ASC or DESC
    #[arg(long = "sort-order", value_name = "ORDER")]
    pub sort_order: Option<SortOrder>,

    #[arg(long)]
    pub page: Option<u32>,

    #[arg(long = "page-size", value_name = "SIZE")]
    pub page_size: Option<u32>,
}

impl From<FilterArgs> for ReleaseFilter {
    fn from(args: FilterArgs) -> Self {
        ReleaseFilter {
            release_kind: args.release_kind,
            vendor: args.vendor,
            version: args.version,
            project: args.project,
            sort_order: args.sort_order,
            page: args.page,
            page_size: args.page_size,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct AssetsArgs {
    /// Feature version, e.g. 17
    #[arg(value_name = "FEATURE_VERSION")]
    pub feature_version: u32,

    #[arg(long = "release-type", value_name = "TYPE", default_value = "ga")]
    pub release_kind: ReleaseKind,

    #[arg(long = "os", value_name = "OS")]
    pub operating_system: Option<OperatingSystem>,

    #[arg(long = "arch", value_name = "ARCH")]
    pub architecture: Option<Architecture>,

    #[arg(long = "image-type", value_name = "TYPE")]
    pub image_kind: Option<ImageKind>,

    #[arg(long = "jvm-impl", value_name = "JVM")]
    pub jvm_implementation: Option<JvmImplementation>,

    #[arg(long = "heap-size", value_name = "SIZE")]
    pub heap_size: Option<HeapSize>,

    #[arg(long)]
    pub vendor: Option<Vendor>,

    #[arg(long)]
    pub project: Option<String>,

    #[arg(long = "sort-order", value_name = "ORDER")]
    pub sort_order: Option<SortOrder>,

    #[arg(long)]
    pub page: Option<u32>,

    #[arg(long = "page-size", value_name = "SIZE")]
    pub page_size: Option<u32>,
}

impl From<AssetsArgs> for AssetsForReleaseRequest {
    fn from(args: AssetsArgs) -> Self {
        AssetsForReleaseRequest {
            feature_version: args.feature_version,
            release_kind: args.release_kind,
            architecture: args.architecture,
            heap_size: args.heap_size,
            image_kind: args.image_kind,
            jvm_implementation: args.jvm_implementation,
            operating_system: args.operating_system,
            project: args.project,
            vendor: args.vendor,
            sort_order: args.sort_order,
            page: args.page,
            page_size: args.page_size,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct LatestArgs {
    #[arg(value_name = "FEATURE_VERSION")]
    pub feature_version: u32,

    #[arg(long = "jvm-impl", value_name = "JVM", default_value = "hotspot")]
    pub jvm_implementation: JvmImplementation,
}

#[derive(clap::Args, Debug)]
pub struct TargetArgs {
    #[arg(long = "os", value_name = "OS", default_value = "linux")]
    pub operating_system: OperatingSystem,

    #[arg(long = "arch", value_name = "ARCH", default_value = "x64")]
    pub architecture: Architecture,

    #[arg(long = "image-type", value_name = "TYPE", default_value = "jdk")]
    pub image_kind: ImageKind,

    #[arg(long = "jvm-impl", value_name = "JVM", default_value = "hotspot")]
    pub jvm_implementation: JvmImplementation,

    #[arg(long = "heap-size", value_name = "SIZE", default_value = "normal")]
    pub heap_size: HeapSize,

    #[arg(long, default_value = "eclipse")]
    pub vendor: Vendor,

    #[arg(long)]
    pub project: Option<String>,
}

impl TargetArgs {
    fn split(self) -> (BinaryTarget, Option<String>) {
        let target = BinaryTarget {
            operating_system: self.operating_system,
            architecture: self.architecture,
            image_kind: self.image_kind,
            jvm_implementation: self.jvm_implementation,
            heap_size: self.heap_size,
            vendor: self.vendor,
        };
        (target, self.project)
    }
}

#[derive(clap::Args, Debug)]
pub struct BinaryReleaseArgs {
    /// Release name, e.g. jdk-11.0.6+10
    #[arg(value_name = "RELEASE_NAME")]
    pub release_name: String,

    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(clap::Args, Debug)]
pub struct BinaryLatestArgs {
    #[arg(value_name = "FEATURE_VERSION")]
    pub feature_version: u32,

    #[arg(long = "release-type", value_name = "TYPE", default_value = "ga")]
    pub release_kind: ReleaseKind,

    #[command(flatten)]
    pub target: TargetArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = Config::new(cli.api_url)?;
    let api = &config.api;
    let mut output = Output::stdio(cli.json);

    match cli.command {
        Commands::Available => commands::available(api, &mut output).await?,
        Commands::ReleaseNames(args) => {
            let request = ReleaseNamesRequest {
                filter: args.into(),
            };
            commands::release_names(api, &request, &mut output).await?
        }
        Commands::ReleaseVersions(args) => {
            let request = ReleaseVersionsRequest {
                filter: args.into(),
            };
            commands::release_versions(api, &request, &mut output).await?
        }
        Commands::Assets(args) => commands::assets(api, &args.into(), &mut output).await?,
        Commands::Latest(args) => {
            let request = AssetsForLatestRequest {
                feature_version: args.feature_version,
                jvm_implementation: args.jvm_implementation,
            };
            commands::latest(api, &request, &mut output).await?
        }
        Commands::BinaryUrl(BinaryUrlCommands::Release(args)) => {
            let (target, project) = args.target.split();
            let request = BinaryForReleaseRequest {
                release_name: args.release_name,
                target,
                project,
            };
            commands::binary_url_release(api, &request, &mut output)?
        }
        Commands::BinaryUrl(BinaryUrlCommands::Latest(args)) => {
            let (target, project) = args.target.split();
            let request = BinaryForLatestRequest {
                feature_version: args.feature_version,
                release_kind: args.release_kind,
                target,
                project,
            };
            commands::binary_url_latest(api, &request, &mut output)?
        }
    }
    Ok(())
}
