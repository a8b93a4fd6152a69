use super::TestContext;
use hubref::resolver::path_fingerprint;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const SHA: &str = "0123456789abcdef0123456789abcdef01234567";

async fn mount_commit(ctx: &TestContext, files: &[&str]) {
    let files: Vec<_> = files
        .iter()
        .map(|name| json!({ "filename": name, "status": "modified" }))
        .collect();
    Mock::given(method("GET"))
        .and(path(format!("/repos/octo/hello/commits/{}", SHA).as_str()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "sha": SHA, "files": files })),
        )
        .mount(&ctx.server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_commit_diff_with_lines() {
    let ctx = TestContext::new().await;
    mount_commit(&ctx, &["README.md", "src/lib.rs"]).await;
    let fragment = format!("#diff-{}R10-R12", path_fingerprint("src/lib.rs"));

    ctx.hubref()
        .args(["diff", "commit", "octo/hello", SHA, &fragment])
        .assert()
        .success()
        .stdout(format!("commit-diff octo/hello@{}:src/lib.rs R10-R12\n", SHA));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_commit_image_is_previewed() {
    let ctx = TestContext::new().await;
    mount_commit(&ctx, &["docs/shot.png"]).await;
    let fragment = format!("diff-{}", path_fingerprint("docs/shot.png"));

    ctx.hubref()
        .args(["diff", "commit", "octo/hello", SHA, &fragment])
        .assert()
        .success()
        .stdout(format!("image octo/hello@{}:docs/shot.png\n", SHA));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_pull_request_fallback_uses_head_sha() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/hello/pulls/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "number": 7,
            "head": { "sha": "feedface", "ref": "feature" },
            "base": { "sha": "deadbeef", "ref": "main" }
        })))
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/hello/pulls/7/files"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "filename": "a.txt" }])))
        .mount(&ctx.server)
        .await;
    let fragment = format!("diff-{}", path_fingerprint("removed.txt"));

    ctx.hubref()
        .args(["diff", "pull", "octo/hello", "7", &fragment])
        .assert()
        .success()
        .stdout("pull-files octo/hello#7@feedface\n");
}
