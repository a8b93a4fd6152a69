use super::TestContext;
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn test_prefix_match_stops_paging() {
    let ctx = TestContext::new().await;
    ctx.mount_ref_pages_reading("branches", &[&["main"], &["main/v2"], &["zeta"]], 1).await;

    ctx.hubref()
        .args(["resolve", "octo/hello", "main/v2/file.txt"])
        .assert()
        .success()
        .stdout("file octo/hello@main:v2/file.txt\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_exact_match_wins_in_browse_mode() {
    let ctx = TestContext::new().await;
    ctx.mount_ref_pages_reading("branches", &[&["main", "main/v2"], &["zeta"]], 1).await;

    ctx.hubref()
        .args(["resolve", "octo/hello", "main/v2", "--browse"])
        .assert()
        .success()
        .stdout("browse octo/hello@main/v2\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_tag_fallback_as_json() {
    let ctx = TestContext::new().await;
    ctx.mount_ref_pages("branches", &[&["main"]]).await;
    ctx.mount_ref_pages("tags", &[&["v0.9"], &["v1.0"]]).await;

    let output = ctx
        .hubref()
        .args(["--json", "resolve", "octo/hello", "v1.0/README.md", "--fragment", "L3-L5"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let target: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(target["kind"], "file_view");
    assert_eq!(target["ref_name"], "v1.0");
    assert_eq!(target["path"], "README.md");
    assert_eq!(target["highlight"]["start"], 3);
    assert_eq!(target["highlight"]["end"], 5);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_head_never_calls_the_api() {
    let ctx = TestContext::new().await;

    ctx.hubref()
        .args(["resolve", "octo/hello", "HEAD/readme.md"])
        .assert()
        .success()
        .stdout("file octo/hello@HEAD:readme.md\n");

    assert_eq!(ctx.request_count().await, 0);
    if cfg!(target_os = "linux") {
        assert!(ctx.hubref_home.join("config.yaml").exists());
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_no_match_fails_without_api_error() {
    let ctx = TestContext::new().await;
    ctx.mount_ref_pages("branches", &[&["main"]]).await;
    ctx.mount_ref_pages("tags", &[&["v1.0"]]).await;

    ctx.hubref()
        .args(["resolve", "octo/hello", "gone/file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing in octo/hello matches 'gone/file.txt'"))
        .stderr(predicate::str::contains("GitHub reported an error").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_repository_reports_api_error() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/hello/branches"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"message":"Not Found"}"#))
        .mount(&ctx.server)
        .await;

    ctx.hubref()
        .args(["resolve", "octo/hello", "main/file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Could not resolve the link: GitHub reported an error: Not Found",
        ))
        .stderr(predicate::str::contains("Check the spelling of the owner and repository"));
}
