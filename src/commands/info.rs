use anyhow::Result;
use log::debug;
use std::io::Write;

use crate::api::{AdoptApi, ReleaseNamesRequest, ReleaseVersionsRequest};

use super::Output;

fn join(values: &[u32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print the feature versions the service offers.
#[tracing::instrument(skip(api, output))]
pub async fn available<A: AdoptApi, W: Write, E: Write>(
    api: &A,
    output: &mut Output<W, E>,
) -> Result<()> {
    let releases = api.available_releases().await?;
    if output.json {
        return output.write_json(&releases);
    }

    writeln!(output.out, "Available releases: {}", join(releases.available_releases()))?;
    writeln!(output.out, "LTS releases: {}", join(releases.available_lts_releases()))?;
    writeln!(output.out, "Most recent feature release: {}", releases.most_recent_feature_release())?;
    writeln!(output.out, "Most recent LTS: {}", releases.most_recent_lts())?;
    if let Some(version) = releases.most_recent_feature_version() {
        writeln!(output.out, "Most recent feature version: {}", version)?;
    }
    if let Some(version) = releases.tip_version() {
        writeln!(output.out, "Tip version: {}", version)?;
    }
    Ok(())
}

/// Print release names, one per line.
#[tracing::instrument(skip(api, output))]
pub async fn release_names<A: AdoptApi, W: Write, E: Write>(
    api: &A,
    request: &ReleaseNamesRequest,
    output: &mut Output<W, E>,
) -> Result<()> {
    let names = api.release_names(request).await?;
    if output.json {
        return output.write_json(&names);
    }

    if names.is_empty() {
        writeln!(output.out, "No releases found.")?;
        return Ok(());
    }
    for name in &names {
        writeln!(output.out, "{}", name)?;
    }
    Ok(())
}

/// Print release versions (semver), one per line.
#[tracing::instrument(skip(api, output))]
pub async fn release_versions<A: AdoptApi, W: Write, E: Write>(
    api: &A,
    request: &ReleaseVersionsRequest,
    output: &mut Output<W, E>,
) -> Result<()> {
    let parsed = api.release_versions(request).await?;
    debug!(
        "Got {} versions, {} dropped",
        parsed.value.len(),
        parsed.errors.len()
    );

    if output.json {
        output.write_json(&parsed.value)?;
    } else if parsed.value.is_empty() {
        writeln!(output.out, "No versions found.")?;
    } else {
        for version in &parsed.value {
            writeln!(output.out, "{}", version.semver())?;
        }
    }

    output.warn_dropped(&parsed.errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockAdoptApi, Parsed, ReleaseFilter};
    use crate::commands::test_utils::{capture, element_error, stderr, stdout, versions};
    use crate::model::{AvailableReleasesBuilder, ReleaseKind};

    fn available_releases() -> crate::model::AvailableReleases {
        AvailableReleasesBuilder {
            available_releases: vec![8, 11, 17, 21],
            available_lts_releases: vec![8, 11, 17, 21],
            most_recent_feature_release: Some(21),
            most_recent_lts: Some(21),
            most_recent_feature_version: None,
            tip_version: Some(23),
        }
        .build()
        .unwrap()
    }

    #[tokio::test]
    async fn test_available_text() {
        let mut api = MockAdoptApi::new();
        api.expect_available_releases()
            .returning(|| Ok(available_releases()));

        let mut output = capture(false);
        available(&api, &mut output).await.unwrap();

        let text = stdout(&output);
        assert!(text.contains("Available releases: 8, 11, 17, 21\n"));
        assert!(text.contains("Most recent LTS: 21\n"));
        assert!(text.contains("Tip version: 23\n"));
        assert!(!text.contains("Most recent feature version"));
    }

    #[tokio::test]
    async fn test_available_json() {
        let mut api = MockAdoptApi::new();
        api.expect_available_releases()
            .returning(|| Ok(available_releases()));

        let mut output = capture(true);
        available(&api, &mut output).await.unwrap();

        let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        assert_eq!(value["most_recent_lts"], 21);
        assert_eq!(value["available_lts_releases"][0], 8);
    }

    #[tokio::test]
    async fn test_available_propagates_errors() {
        let mut api = MockAdoptApi::new();
        api.expect_available_releases()
            .returning(|| Err(anyhow::anyhow!("connection refused")));

        let mut output = capture(false);
        let err = available(&api, &mut output).await.unwrap_err();
        assert!(err.to_string().contains("connection refused"));
        assert!(output.out.is_empty());
    }

    #[tokio::test]
    async fn test_release_names_passes_request() {
        let mut api = MockAdoptApi::new();
        api.expect_release_names()
            .withf(|r| r.filter.release_kind == Some(ReleaseKind::Ea))
            .times(1)
            .returning(|_| Ok(vec!["jdk-23+1".to_string(), "jdk-22+36".to_string()]));

        let request = ReleaseNamesRequest {
            filter: ReleaseFilter {
                release_kind: Some(ReleaseKind::Ea),
                ..Default::default()
            },
        };
        let mut output = capture(false);
        release_names(&api, &request, &mut output).await.unwrap();

        assert_eq!(stdout(&output), "jdk-23+1\njdk-22+36\n");
    }

    #[tokio::test]
    async fn test_release_names_empty() {
        let mut api = MockAdoptApi::new();
        api.expect_release_names().returning(|_| Ok(vec![]));

        let mut output = capture(false);
        release_names(&api, &ReleaseNamesRequest::default(), &mut output)
            .await
            .unwrap();

        assert_eq!(stdout(&output), "No releases found.\n");
    }

    #[test_log::test(tokio::test)]
    async fn test_release_versions_warns_about_dropped_elements() {
        let mut api = MockAdoptApi::new();
        api.expect_release_versions().returning(|_| {
            Ok(Parsed {
                value: versions(&["11.0.6+10", "11.0.5+10"]),
                errors: vec![element_error()],
            })
        });

        let mut output = capture(false);
        release_versions(&api, &ReleaseVersionsRequest::default(), &mut output)
            .await
            .unwrap();

        assert_eq!(stdout(&output), "11.0.6+10\n11.0.5+10\n");
        let warnings = stderr(&output);
        assert!(warnings.starts_with("warning: version: "));
        assert_eq!(warnings.lines().count(), 1);
    }

    #[tokio::test]
    async fn test_release_versions_json() {
        let mut api = MockAdoptApi::new();
        api.expect_release_versions().returning(|_| {
            Ok(Parsed {
                value: versions(&["11.0.6+10"]),
                errors: vec![],
            })
        });

        let mut output = capture(true);
        release_versions(&api, &ReleaseVersionsRequest::default(), &mut output)
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        assert_eq!(value[0]["semver"], "11.0.6+10");
        assert_eq!(value[0]["major"], 11);
        assert!(output.err.is_empty());
    }
}
