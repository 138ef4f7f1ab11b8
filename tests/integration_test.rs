use assert_cmd::Command;
use assert_cmd::cargo;
use mockito::{Matcher, Server};
use predicates::prelude::*;

const BINARY: &str = r#"{
    "architecture": "x64",
    "os": "linux",
    "image_type": "jdk",
    "jvm_impl": "hotspot",
    "heap_size": "normal",
    "download_count": 1234,
    "updated_at": "2020-01-16T14:24:40Z",
    "project": "jdk",
    "package": {
        "name": "OpenJDK11U-jdk_x64_linux_hotspot_11.0.6_10.tar.gz",
        "link": "https://github.com/AdoptOpenJDK/openjdk11-binaries/releases/download/jdk-11.0.6%2B10/OpenJDK11U-jdk_x64_linux_hotspot_11.0.6_10.tar.gz",
        "size": 195167296,
        "download_count": 1234
    }
}"#;

fn release(name: &str, timestamp: &str, binaries: &[&str]) -> String {
    format!(
        r#"{{
            "id": "{name}.id",
            "release_name": "{name}",
            "release_link": "https://github.com/AdoptOpenJDK/openjdk11-binaries/releases/tag/{name}",
            "release_type": "ga",
            "vendor": "adoptopenjdk",
            "timestamp": "{timestamp}",
            "updated_at": "{timestamp}",
            "download_count": 1234,
            "version_data": {{
                "major": 11, "minor": 0, "security": 6, "build": 10,
                "semver": "11.0.6+10", "openjdk_version": "11.0.6+10"
            }},
            "binaries": [{binaries}]
        }}"#,
        binaries = binaries.join(",")
    )
}

fn adoptv3(url: &str) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("adoptv3"));
    cmd.arg("--api-url").arg(url);
    cmd
}

#[test]
fn test_available_releases() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/info/available_releases")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "available_releases": [8, 11, 13, 14],
                "available_lts_releases": [8, 11],
                "most_recent_feature_release": 14,
                "most_recent_lts": 11
            }"#,
        )
        .create();

    adoptv3(&server.url())
        .arg("available")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available releases: 8, 11, 13, 14"))
        .stdout(predicate::str::contains("Most recent LTS: 11"));
}

#[test]
fn test_api_url_from_environment() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/info/release_names")
        .with_status(200)
        .with_body(r#"{"releases": ["jdk-11.0.6+10", "jdk-11.0.5+10"]}"#)
        .create();

    Command::new(cargo::cargo_bin!("adoptv3"))
        .env("ADOPTV3_API_URL", server.url())
        .arg("release-names")
        .assert()
        .success()
        .stdout("jdk-11.0.6+10\njdk-11.0.5+10\n");

    mock.assert();
}

#[test]
fn test_release_names_sends_filters() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/info/release_names")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("release_type".into(), "ga".into()),
            Matcher::UrlEncoded("version".into(), "[11.0.0,12.0.0)".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"releases": ["jdk-11.0.6+10"]}"#)
        .create();

    adoptv3(&server.url())
        .args(["release-names", "--release-type", "ga", "--version", "[11.0.0,12.0.0)"])
        .assert()
        .success()
        .stdout("jdk-11.0.6+10\n");

    mock.assert();
}

#[test]
fn test_release_versions_skips_malformed_entries() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/info/release_versions")
        .with_status(200)
        .with_body(
            r#"{"versions": [
                {"major": "not-a-number"},
                {"major": 11, "minor": 0, "security": 6, "build": 10,
                 "semver": "11.0.6+10", "openjdk_version": "11.0.6+10"}
            ]}"#,
        )
        .create();

    adoptv3(&server.url())
        .arg("release-versions")
        .assert()
        .success()
        .stdout("11.0.6+10\n")
        .stderr(predicate::str::contains("warning: version: "));
}

#[test]
fn test_assets_drops_bad_binary_and_release() {
    let mut server = Server::new();
    let bad_binary = BINARY.replace(r#""heap_size": "normal","#, "");
    let body = format!(
        "[{}, {}]",
        release("jdk-11.0.6+10", "2020-01-16T14:24:40Z", &[BINARY, bad_binary.as_str()]),
        release("jdk-11.0.5+10", "last tuesday", &[BINARY]),
    );
    let _mock = server
        .mock("GET", "/assets/feature_releases/11/ga")
        .with_status(200)
        .with_body(body)
        .create();

    adoptv3(&server.url())
        .args(["assets", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jdk-11.0.6+10 (ga, 2020-01-16)"))
        .stdout(predicate::str::contains("jdk-11.0.5+10").not())
        .stdout(predicate::str::contains("  linux x64 jdk hotspot normal ").count(1))
        .stderr(predicate::str::contains("warning: binary: "))
        .stderr(predicate::str::contains("warning: release: "));
}

#[test]
fn test_assets_json_output() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/assets/feature_releases/11/ga")
        .match_query(Matcher::UrlEncoded("os".into(), "linux".into()))
        .with_status(200)
        .with_body(format!(
            "[{}]",
            release("jdk-11.0.6+10", "2020-01-16T14:24:40Z", &[BINARY])
        ))
        .create();

    let output = adoptv3(&server.url())
        .args(["assets", "11", "--os", "linux", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["release_name"], "jdk-11.0.6+10");
    assert_eq!(value[0]["binaries"][0]["operating_system"], "linux");
}

#[test]
fn test_latest_with_unknown_spelling() {
    let mut server = Server::new();
    let binary = BINARY.replace(r#""architecture": "x64""#, r#""architecture": "loongarch64""#);
    let _mock = server
        .mock("GET", "/assets/latest/11/hotspot")
        .with_status(200)
        .with_body(format!(
            r#"[{{"release_name": "jdk-11.0.6+10", "binary": {binary}}}]"#
        ))
        .create();

    adoptv3(&server.url())
        .args(["latest", "11"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("jdk-11.0.6+10 linux loongarch64 jdk hotspot normal "))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_malformed_response_fails() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/assets/latest/11/hotspot")
        .with_status(200)
        .with_body(r#"{"not": "an array"}"#)
        .create();

    adoptv3(&server.url())
        .args(["latest", "11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse response from"));
}

#[test]
fn test_not_found_fails() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/assets/feature_releases/99/ga")
        .with_status(404)
        .create();

    adoptv3(&server.url())
        .args(["assets", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn test_binary_url_needs_no_server() {
    Command::new(cargo::cargo_bin!("adoptv3"))
        .args([
            "--api-url",
            "https://api.example.com/v3",
            "binary-url",
            "release",
            "jdk-11.0.6+10",
            "--os",
            "windows",
            "--vendor",
            "adoptopenjdk",
        ])
        .assert()
        .success()
        .stdout(
            "https://api.example.com/v3/binary/version/jdk-11.0.6+10/windows/x64/jdk/hotspot/normal/adoptopenjdk\n",
        );
}
