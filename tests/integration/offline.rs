//! Commands that finish without reaching the API

use super::common::isolated_command;
use tempfile::TempDir;

const SHA: &str = "0123456789abcdef0123456789abcdef01234567";

#[test]
fn test_head_resolves_without_network() {
    let home = TempDir::new().unwrap();

    let output = isolated_command(home.path())
        .args(["resolve", "octo/hello", "HEAD/docs/readme.md", "--fragment", "#L7"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "file octo/hello@HEAD:docs/readme.md#L7"
    );
}

#[test]
fn test_sha_browse_without_network() {
    let home = TempDir::new().unwrap();

    let output = isolated_command(home.path())
        .args(["resolve", "octo/hello", SHA, "--browse", "--initial-page", "4"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        format!("browse octo/hello@{} (page 4)", SHA)
    );
}

#[test]
fn test_file_view_of_bare_ref_is_not_found() {
    let home = TempDir::new().unwrap();

    let output = isolated_command(home.path())
        .args(["resolve", "octo/hello", "HEAD"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Nothing in octo/hello matches 'HEAD'"));
}

#[test]
fn test_first_run_writes_default_config() {
    let home = TempDir::new().unwrap();

    isolated_command(home.path())
        .args(["resolve", "octo/hello", "HEAD/a.txt"])
        .output()
        .unwrap();

    let config_path = home.path().join("config").join("hubref").join("config.yaml");
    if cfg!(target_os = "linux") {
        let content = std::fs::read_to_string(config_path).unwrap();
        assert!(content.contains("api_url: https://api.github.com"));
        assert!(content.contains("per_page: 100"));
        assert!(!content.contains("test-token"));
    }
}

#[test]
fn test_malformed_diff_fragment() {
    let home = TempDir::new().unwrap();

    let output = isolated_command(home.path())
        .args(["diff", "commit", "octo/hello", SHA, "L12"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("is not a diff link fragment"));
}

#[test]
fn test_unreachable_api_is_network_error() {
    let home = TempDir::new().unwrap();

    let output = isolated_command(home.path())
        .args(["branches", "octo/hello"])
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("network error"), "{}", stderr);
    assert!(stderr.contains("Check your network connection"), "{}", stderr);
}
