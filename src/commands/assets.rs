use anyhow::Result;
use std::io::Write;

use crate::{
    api::{AdoptApi, AssetsForLatestRequest, AssetsForReleaseRequest},
    model::Binary,
};

use super::Output;

fn binary_line(binary: &Binary) -> String {
    format!(
        "{} {} {} {} {} {}",
        binary.operating_system(),
        binary.architecture(),
        binary.image_type(),
        binary.jvm_implementation(),
        binary.heap_size(),
        binary.package().link()
    )
}

/// Print the releases of a feature version with their binaries.
#[tracing::instrument(skip(api, output))]
pub async fn assets<A: AdoptApi, W: Write, E: Write>(
    api: &A,
    request: &AssetsForReleaseRequest,
    output: &mut Output<W, E>,
) -> Result<()> {
    let parsed = api.assets_for_release(request).await?;

    if output.json {
        output.write_json(&parsed.value)?;
    } else if parsed.value.is_empty() {
        writeln!(output.out, "No releases found.")?;
    } else {
        for release in &parsed.value {
            writeln!(
                output.out,
                "{} ({}, {})",
                release.release_name(),
                release.release_type(),
                release.timestamp().format("%Y-%m-%d")
            )?;
            for binary in release.binaries() {
                writeln!(output.out, "  {}", binary_line(binary))?;
            }
        }
    }

    output.warn_dropped(&parsed.errors)
}

/// Print the newest binary of a feature version for each platform.
#[tracing::instrument(skip(api, output))]
pub async fn latest<A: AdoptApi, W: Write, E: Write>(
    api: &A,
    request: &AssetsForLatestRequest,
    output: &mut Output<W, E>,
) -> Result<()> {
    let parsed = api.assets_for_latest(request).await?;

    if output.json {
        output.write_json(&parsed.value)?;
    } else if parsed.value.is_empty() {
        writeln!(output.out, "No binaries found.")?;
    } else {
        for view in &parsed.value {
            writeln!(output.out, "{} {}", view.release_name(), binary_line(view.binary()))?;
        }
    }

    output.warn_dropped(&parsed.errors)
}
