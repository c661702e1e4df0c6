use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a test command
fn awsctl() -> Command {
    Command::cargo_bin("awsctl").unwrap()
}

/// Helper pointing the command at an isolated config file
fn awsctl_with_config(path: &std::path::Path) -> Command {
    let mut cmd = awsctl();
    cmd.arg("--config-file").arg(path);
    cmd
}

#[test]
fn test_help_flag() {
    awsctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("guided end-to-end scenarios"))
        .stdout(predicate::str::contains("EXAMPLES:"));
}

#[test]
fn test_help_short_flag() {
    awsctl()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_flag() {
    awsctl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("awsctl"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_command() {
    awsctl()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("awsctl"));
}

#[test]
fn test_no_args_shows_help() {
    awsctl()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    awsctl()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_dynamodb_help() {
    awsctl()
        .arg("dynamodb")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("DynamoDB actions"));
}

#[test]
fn test_dynamodb_alias() {
    awsctl()
        .arg("ddb")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("DynamoDB actions"));
}

#[test]
fn test_s3_help() {
    awsctl()
        .arg("s3")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("S3 actions"));
}

#[test]
fn test_scenario_help_lists_examples() {
    awsctl()
        .arg("scenario")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Guided multi-step scenarios"))
        .stdout(predicate::str::contains("EXAMPLES:"));
}

#[test]
fn test_scenario_list() {
    awsctl()
        .arg("scenario")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("dynamodb-getting-started"))
        .stdout(predicate::str::contains("s3-getting-started"));
}

#[test]
fn test_scenario_list_json() {
    awsctl()
        .args(["scenario", "list", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"dynamodb-getting-started\""));
}

#[test]
fn test_profile_set_list_show_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    awsctl_with_config(&config_path)
        .args([
            "profile",
            "set",
            "dev",
            "--region",
            "eu-west-1",
            "--endpoint-url",
            "http://localhost:4566",
            "--default",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile 'dev' saved"));

    awsctl_with_config(&config_path)
        .args(["profile", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dev (default)"))
        .stdout(predicate::str::contains("region=eu-west-1"));

    awsctl_with_config(&config_path)
        .args(["profile", "show", "dev", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"region\": \"eu-west-1\""))
        .stdout(predicate::str::contains("http://localhost:4566"));
}

#[test]
fn test_profile_show_unknown_fails_with_tip() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    awsctl_with_config(&config_path)
        .args(["profile", "show", "ghost"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Profile 'ghost' not found"))
        .stderr(predicate::str::contains("tip"));
}

#[test]
fn test_profile_set_rejects_bad_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    awsctl_with_config(&config_path)
        .args([
            "profile",
            "set",
            "bad",
            "--endpoint-url",
            "localhost:4566",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("endpoint_url"));
}

#[test]
fn test_profile_remove_clears_default() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    awsctl_with_config(&config_path)
        .args(["profile", "set", "dev", "--region", "us-east-1", "--default"])
        .assert()
        .success();

    awsctl_with_config(&config_path)
        .args(["profile", "remove", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile 'dev' removed"));

    awsctl_with_config(&config_path)
        .args(["profile", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No profiles configured"));
}

#[test]
fn test_dynamodb_put_item_rejects_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    awsctl_with_config(&config_path)
        .args([
            "dynamodb",
            "put-item",
            "--table",
            "movies",
            "--item",
            "{not json",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--item is not valid JSON"));
}

#[test]
fn test_completions_bash() {
    awsctl()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("awsctl"));
}

#[test]
fn test_output_format_flag_accepted() {
    awsctl()
        .args(["scenario", "list", "-o", "yaml"])
        .assert()
        .success();
}
