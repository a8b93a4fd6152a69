//! Argument parsing of the `hubref` binary

use super::common::hubref_command;

#[test]
fn test_help_lists_commands() {
    let output = hubref_command().arg("--help").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    for command in ["resolve", "diff", "branches", "tags", "starred", "login", "logout"] {
        assert!(stdout.contains(command), "missing {} in help:\n{}", command, stdout);
    }
}

#[test]
fn test_version_flag() {
    let output = hubref_command().arg("--version").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("hubref"));
}

#[test]
fn test_malformed_repo_is_usage_error() {
    let output = hubref_command()
        .args(["resolve", "not-a-repo", "main/readme.md"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("owner/repo"));
}

#[test]
fn test_initial_page_requires_browse() {
    let output = hubref_command()
        .args(["resolve", "octo/hello", "main", "--initial-page", "2"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_fragment_conflicts_with_browse() {
    let output = hubref_command()
        .args(["resolve", "octo/hello", "main", "--browse", "--fragment", "L1"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_pull_number_must_be_numeric() {
    let output = hubref_command()
        .args(["diff", "pull", "octo/hello", "seven", "diff-abc"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}
