// tests/integration_test.rs
use std::process::Command;

fn run_tool(args: &[&str]) -> std::process::Output {
    let mut cmd_args = vec!["run", "--quiet", "--bin", "semver-tool", "--"];
    cmd_args.extend_from_slice(args);
    Command::new("cargo")
        .args(&cmd_args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help() {
    let output = run_tool(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("semver-tool"));
    assert!(stdout.contains("Verify semantic version strings"));
}

#[test]
fn test_valid_version_no_flags_is_silent() {
    let output = run_tool(&["1.2.3"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_invalid_version_fails_with_message() {
    let output = run_tool(&["v3.4.0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("v3.4.0 is not valid semantic version"));
}

#[test]
fn test_invalid_version_quiet_fails_silently() {
    let output = run_tool(&["--quiet", "not-a-version"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_quiet_suppresses_display_flags() {
    let output = run_tool(&["--quiet", "--show-permutations", "1.2.3"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_show_permutations() {
    let output = run_tool(&["--show-permutations", "3.4.0-dev.4+buildmeta1234"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "3-dev 3.4-dev 3.4.0-dev\n");
}

#[test]
fn test_prerelease_flags() {
    let output = run_tool(&["--prerelease", "--prerelease-head", "3.4.0-dev.4"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "dev.4\ndev\n");
}

#[test]
fn test_field_flags() {
    let output = run_tool(&[
        "--major",
        "--minor",
        "--patch",
        "--buildmetadata",
        "3.4.0-dev.4+buildmeta1234",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "3\n4\n0\nbuildmeta1234\n");
}

#[test]
fn test_missing_argument_is_usage_error() {
    let output = run_tool(&[]);
    assert!(!output.status.success());
}
