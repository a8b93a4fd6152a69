use super::output::print_target;
use super::strip_hash;
use hubref::core::{HubrefError, HubrefResult};
use hubref::di::ServiceContainer;
use hubref::resolver::{DiffHighlightId, RepoCoordinates};

fn parse_diff_fragment(fragment: &str) -> HubrefResult<DiffHighlightId> {
    DiffHighlightId::parse(strip_hash(fragment)).ok_or_else(|| {
        HubrefError::Application(format!(
            "'{}' is not a diff link fragment (expected diff-<sha256>[L|R<line>])",
            fragment
        ))
    })
}

pub async fn commit(
    container: &ServiceContainer,
    repo: RepoCoordinates,
    sha: &str,
    fragment: &str,
    json: bool,
) -> HubrefResult<()> {
    let id = parse_diff_fragment(fragment)?;
    let resolver = container.commit_diff_resolver(repo, sha);
    let (resolver, id) = (&resolver, &id);

    let target = container
        .retryable(&format!("Loading commit {}", sha), "Could not load the commit")
        .run(move || resolver.resolve(id))
        .await?;

    print_target(&target, json)
}

pub async fn pull(
    container: &ServiceContainer,
    repo: RepoCoordinates,
    number: u64,
    fragment: &str,
    json: bool,
) -> HubrefResult<()> {
    let id = parse_diff_fragment(fragment)?;
    let resolver = container.pull_request_diff_resolver(repo, number);
    let (resolver, id) = (&resolver, &id);

    let target = container
        .retryable(
            &format!("Loading pull request #{}", number),
            "Could not load the pull request",
        )
        .run(move || resolver.resolve(id))
        .await?;

    print_target(&target, json)
}
