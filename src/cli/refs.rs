//! Branch, tag and star listings

use hubref::core::HubrefResult;
use hubref::di::ServiceContainer;
use hubref::pagination::PageIterator;
use hubref::resolver::RepoCoordinates;

pub async fn branches(container: &ServiceContainer, repo: RepoCoordinates) -> HubrefResult<()> {
    let classifier = container.classifier();
    let iterator = PageIterator::new(&classifier);
    let (iterator, github, repo) = (&iterator, container.github(), &repo);

    let branches = container
        .retryable(
            &format!("Listing branches of {}", repo),
            "Could not list branches",
        )
        .run(move || {
            iterator.collect_all(move |page| github.branches_page(&repo.owner, &repo.repo, page))
        })
        .await?;

    for branch in branches {
        println!("{}", branch.name);
    }
    Ok(())
}

pub async fn tags(container: &ServiceContainer, repo: RepoCoordinates) -> HubrefResult<()> {
    let classifier = container.classifier();
    let iterator = PageIterator::new(&classifier);
    let (iterator, github, repo) = (&iterator, container.github(), &repo);

    let tags = container
        .retryable(&format!("Listing tags of {}", repo), "Could not list tags")
        .run(move || {
            iterator.collect_all(move |page| github.tags_page(&repo.owner, &repo.repo, page))
        })
        .await?;

    for tag in tags {
        println!("{}", tag.name);
    }
    Ok(())
}

pub async fn starred(container: &ServiceContainer, repo: RepoCoordinates) -> HubrefResult<()> {
    let classifier = container.classifier();
    let (classifier, github, repo) = (&classifier, container.github(), &repo);

    let starred = container
        .retryable(&format!("Checking star on {}", repo), "Could not check the star")
        .run(move || async move {
            let response = github.starred(&repo.owner, &repo.repo).await?;
            classifier.presence(response)
        })
        .await?;

    if starred {
        println!("{} is starred", repo);
    } else {
        println!("{} is not starred", repo);
    }
    Ok(())
}
