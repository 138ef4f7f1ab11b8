use anyhow::Result;
use std::io::Write;
use url::Url;

use crate::api::{AdoptApi, BinaryForLatestRequest, BinaryForReleaseRequest};

use super::Output;

fn print_url<W: Write, E: Write>(url: &Url, output: &mut Output<W, E>) -> Result<()> {
    if output.json {
        output.write_json(url.as_str())
    } else {
        writeln!(output.out, "{}", url)?;
        Ok(())
    }
}

/// Print the download URI of one binary of a named release.
#[tracing::instrument(skip(api, output))]
pub fn binary_url_release<A: AdoptApi, W: Write, E: Write>(
    api: &A,
    request: &BinaryForReleaseRequest,
    output: &mut Output<W, E>,
) -> Result<()> {
    let url = api.binary_for_release(request)?;
    print_url(&url, output)
}

/// Print the download URI of the newest binary of a feature version.
#[tracing::instrument(skip(api, output))]
pub fn binary_url_latest<A: AdoptApi, W: Write, E: Write>(
    api: &A,
    request: &BinaryForLatestRequest,
    output: &mut Output<W, E>,
) -> Result<()> {
    let url = api.binary_for_latest(request)?;
    print_url(&url, output)
}
