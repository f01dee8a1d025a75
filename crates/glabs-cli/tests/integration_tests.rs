//! Integration tests for the glabs CLI binary.
//!
//! These tests exercise the actual compiled binary using assert_cmd.

use assert_cmd::Command;
use glabs_test_utils::config::TestConfig;
use glabs_test_utils::fixtures::{COURSE_YAML, course_fixture};
use predicates::prelude::*;

/// Get a Command for the glabs binary
fn glabs_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("glabs"));
    cmd.env_remove("GLABS_CONFIG");
    cmd
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_output() {
    glabs_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inspect classroom assignment configuration"));
}

#[test]
fn test_version_output() {
    glabs_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("glabs"));
}

#[test]
fn test_no_command_shows_help_hint() {
    glabs_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("glabs --help"));
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_show_group_assignment() {
    glabs_cmd()
        .arg("--config")
        .arg(course_fixture("cs1.yml"))
        .args(["show", "cs1", "hw1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("teaching/cs1/ws24/blatt1"))
        .stdout(predicate::str::contains("reporter (20)"))
        .stdout(predicate::str::contains("team-a: alice, bob"))
        .stdout(predicate::str::contains("team-b: carol, dave"));
}

#[test]
fn test_show_reads_config_from_env() {
    glabs_cmd()
        .env("GLABS_CONFIG", course_fixture("cs1.toml"))
        .args(["show", "cs1", "hw2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("students (4):"))
        .stdout(predicate::str::contains("maintainer (40)"));
}

#[test]
fn test_show_with_filter() {
    glabs_cmd()
        .arg("--config")
        .arg(course_fixture("cs1.yml"))
        .args(["show", "cs1", "hw2", "carol", "nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("students (1):"))
        .stdout(predicate::str::contains("- carol"))
        .stdout(predicate::str::contains("- alice").not());
}

#[test]
fn test_show_json() {
    glabs_cmd()
        .arg("--config")
        .arg(course_fixture("cs1.yml"))
        .args(["show", "cs1", "hw1", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""access_level": "reporter""#))
        .stdout(predicate::str::contains(r#""mode": "group""#))
        .stdout(predicate::str::contains(r#""to_branch": "main""#));
}

#[test]
fn test_show_missing_assignment_fails() {
    glabs_cmd()
        .arg("--config")
        .arg(course_fixture("cs1.yml"))
        .args(["show", "cs1", "hw9"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("assignment not found"))
        .stderr(predicate::str::contains("cs1.hw9"));
}

#[test]
fn test_show_startercode_without_url_fails() {
    glabs_cmd()
        .arg("--config")
        .arg(course_fixture("cs1.toml"))
        .args(["show", "cs1", "broken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("startercode provided without url"));
}

#[test]
fn test_show_without_config_fails() {
    glabs_cmd()
        .args(["show", "cs1", "hw1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GLABS_CONFIG"));
}

#[test]
fn test_show_reports_parse_errors() {
    let config = TestConfig::new();
    let path = config.write("broken.json", "{ \"cs1\": ");

    glabs_cmd()
        .arg("--config")
        .arg(&path)
        .args(["show", "cs1", "hw1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse JSON"));
}

#[test]
fn test_show_from_written_yaml() {
    let config = TestConfig::new();
    let path = config.write("nested/glabs.yaml", COURSE_YAML);

    glabs_cmd()
        .arg("-c")
        .arg(&path)
        .args(["show", "cs1", "hw1", "team-b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("groups (1):"))
        .stdout(predicate::str::contains("team-a").not());
}
