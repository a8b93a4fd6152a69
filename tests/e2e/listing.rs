use super::TestContext;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn test_branches_follow_every_page() {
    let ctx = TestContext::new().await;
    ctx.mount_ref_pages("branches", &[&["main", "dev"], &["release/1.x"], &[]]).await;

    ctx.hubref()
        .args(["branches", "octo/hello"])
        .assert()
        .success()
        .stdout("main\ndev\nrelease/1.x\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_tags_failure_drops_partial_results() {
    let ctx = TestContext::new().await;
    let next = format!(
        r#"<{}/repos/octo/hello/tags?per_page=100&page=2>; rel="next""#,
        ctx.server.uri()
    );
    Mock::given(method("GET"))
        .and(path("/repos/octo/hello/tags"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "name": "v1.0", "commit": { "sha": "abc" } }]))
                .insert_header("link", next.as_str()),
        )
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/hello/tags"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&ctx.server)
        .await;

    ctx.hubref()
        .args(["tags", "octo/hello"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("v1.0").not())
        .stderr(predicate::str::contains("HTTP 502"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_starred() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/user/starred/octo/hello"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&ctx.server)
        .await;

    ctx.hubref()
        .args(["starred", "octo/hello"])
        .assert()
        .success()
        .stdout("octo/hello is starred\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_not_starred_is_not_an_error() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/user/starred/octo/hello"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&ctx.server)
        .await;

    ctx.hubref()
        .args(["starred", "octo/hello"])
        .assert()
        .success()
        .stdout("octo/hello is not starred\n")
        .stderr(predicate::str::contains("✗").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_env_token_is_reported_not_logged_out() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/hello/branches"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Bad credentials" })),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.hubref()
        .env("RUST_LOG", "warn")
        .args(["branches", "octo/hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP 401"))
        .stderr(predicate::str::contains(
            "GitHub rejected the token from GITHUB_TOKEN or the config file",
        ))
        .stderr(predicate::str::contains("stored GitHub token was rejected").not());
}
