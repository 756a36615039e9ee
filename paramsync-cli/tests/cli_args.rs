//! Binary-level tests for `paramsync`.
//!
//! None of these reach AWS: they cover argument validation and the failure
//! paths taken before or during client construction.

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;

fn paramsync_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("paramsync"));
    // Keep the SDK away from the developer's real config and from IMDS.
    cmd.env_remove("AWS_REGION")
        .env_remove("AWS_DEFAULT_REGION")
        .env_remove("AWS_PROFILE")
        .env("AWS_CONFIG_FILE", "/nonexistent/paramsync/config")
        .env("AWS_SHARED_CREDENTIALS_FILE", "/nonexistent/paramsync/credentials")
        .env("AWS_EC2_METADATA_DISABLED", "true")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_every_flag() {
    let assert = paramsync_cmd().arg("--help").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("stdout utf8");

    for flag in [
        "--name",
        "--value",
        "--description",
        "--tier",
        "--dry-run",
        "--region",
        "--profile",
        "--endpoint-url",
    ] {
        assert!(stdout.contains(flag), "missing {flag} in --help output");
    }
}

#[test]
fn name_and_value_are_required() {
    paramsync_cmd()
        .args(["--value", "a"])
        .assert()
        .failure()
        .stderr(contains("--name"));

    paramsync_cmd()
        .args(["--name", "X"])
        .assert()
        .failure()
        .stderr(contains("--value"));
}

#[test]
fn tier_must_be_a_known_name() {
    paramsync_cmd()
        .args(["--name", "X", "--value", "a", "--tier", "Premium"])
        .assert()
        .failure()
        .stderr(contains("unknown tier 'Premium'"));
}

#[test]
fn missing_region_fails_before_any_request() {
    paramsync_cmd()
        .args(["--name", "X", "--value", "a"])
        .assert()
        .failure()
        .stderr(contains("no AWS region configured"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn unreachable_endpoint_propagates_as_error() {
    paramsync_cmd()
        .env("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE")
        .env("AWS_SECRET_ACCESS_KEY", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY")
        .env("AWS_MAX_ATTEMPTS", "1")
        .args([
            "--name",
            "X",
            "--value",
            "a",
            "--region",
            "us-east-1",
            "--endpoint-url",
            "http://127.0.0.1:9",
        ])
        .assert()
        .failure()
        .stderr(contains("reconcile failed for 'X'"))
        .stdout(contains("successfully").not());
}
