//! Resolving `#diff-<sha256>` links to a concrete diff target

use crate::classify::ErrorClassifier;
use crate::core::HubrefResult;
use crate::di::traits::GitHubProvider;
use crate::github::types::GitHubFile;
use crate::pagination::PageIterator;
use crate::resolver::fragment::DiffHighlightId;
use crate::resolver::target::{DiffLines, NavigationTarget, RepoCoordinates};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "ico", "svg"];

/// Whether `filename` should be previewed as an image instead of diffed
pub fn is_image(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

/// A changeset that a diff link can point into
#[async_trait]
pub trait DiffSource: Send + Sync {
    /// Files changed by the changeset, in API order
    async fn files(&self) -> HubrefResult<Vec<GitHubFile>>;

    /// Commit the changeset should be shown at
    async fn sha(&self) -> HubrefResult<String>;

    /// Target for a matched, non-image file
    fn launch_target(&self, sha: &str, file: &GitHubFile, id: &DiffHighlightId) -> NavigationTarget;

    /// Target when no file matched the fingerprint
    fn fallback_target(&self, sha: &str) -> NavigationTarget;

    fn repo(&self) -> &RepoCoordinates;
}

fn highlighted_lines(id: &DiffHighlightId) -> Option<DiffLines> {
    id.start_line.map(|start| DiffLines {
        start,
        end: id.end_line,
        right: id.right,
    })
}

/// Files of a single commit
pub struct CommitDiffSource {
    github: Arc<dyn GitHubProvider>,
    classifier: ErrorClassifier,
    repo: RepoCoordinates,
    sha: String,
}

impl CommitDiffSource {
    pub fn new(
        github: Arc<dyn GitHubProvider>,
        classifier: ErrorClassifier,
        repo: RepoCoordinates,
        sha: impl Into<String>,
    ) -> Self {
        Self {
            github,
            classifier,
            repo,
            sha: sha.into(),
        }
    }
}

#[async_trait]
impl DiffSource for CommitDiffSource {
    async fn files(&self) -> HubrefResult<Vec<GitHubFile>> {
        let response = self
            .github
            .commit(&self.repo.owner, &self.repo.repo, &self.sha)
            .await?;
        Ok(self.classifier.strict(response)?.files)
    }

    async fn sha(&self) -> HubrefResult<String> {
        Ok(self.sha.clone())
    }

    fn launch_target(
        &self,
        sha: &str,
        file: &GitHubFile,
        id: &DiffHighlightId,
    ) -> NavigationTarget {
        NavigationTarget::CommitDiff {
            repo: self.repo.clone(),
            sha: sha.to_string(),
            path: file.filename.clone(),
            highlight: highlighted_lines(id),
        }
    }

    fn fallback_target(&self, sha: &str) -> NavigationTarget {
        NavigationTarget::Commit {
            repo: self.repo.clone(),
            sha: sha.to_string(),
        }
    }

    fn repo(&self) -> &RepoCoordinates {
        &self.repo
    }
}

/// Files of a pull request, shown at the head commit
pub struct PullRequestDiffSource {
    github: Arc<dyn GitHubProvider>,
    classifier: ErrorClassifier,
    repo: RepoCoordinates,
    number: u64,
}

impl PullRequestDiffSource {
    pub fn new(
        github: Arc<dyn GitHubProvider>,
        classifier: ErrorClassifier,
        repo: RepoCoordinates,
        number: u64,
    ) -> Self {
        Self {
            github,
            classifier,
            repo,
            number,
        }
    }
}

#[async_trait]
impl DiffSource for PullRequestDiffSource {
    async fn files(&self) -> HubrefResult<Vec<GitHubFile>> {
        PageIterator::new(&self.classifier)
            .collect_all(|page| {
                self.github
                    .pull_request_files_page(&self.repo.owner, &self.repo.repo, self.number, page)
            })
            .await
    }

    async fn sha(&self) -> HubrefResult<String> {
        let response = self
            .github
            .pull_request(&self.repo.owner, &self.repo.repo, self.number)
            .await?;
        Ok(self.classifier.strict(response)?.head.sha)
    }

    fn launch_target(
        &self,
        sha: &str,
        file: &GitHubFile,
        id: &DiffHighlightId,
    ) -> NavigationTarget {
        NavigationTarget::PullRequestDiff {
            repo: self.repo.clone(),
            number: self.number,
            sha: sha.to_string(),
            path: file.filename.clone(),
            highlight: highlighted_lines(id),
        }
    }

    fn fallback_target(&self, sha: &str) -> NavigationTarget {
        NavigationTarget::PullRequestFiles {
            repo: self.repo.clone(),
            number: self.number,
            sha: sha.to_string(),
        }
    }

    fn repo(&self) -> &RepoCoordinates {
        &self.repo
    }
}

/// Picks the navigation target for a diff link
pub struct DiffTargetResolver<S> {
    source: S,
}

impl<S: DiffSource> DiffTargetResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch the changeset and its sha concurrently, then match the fingerprint
    pub async fn resolve(&self, id: &DiffHighlightId) -> HubrefResult<NavigationTarget> {
        let (files, sha) = tokio::try_join!(self.source.files(), self.source.sha())?;
        tracing::debug!(files = files.len(), sha = %sha, "changeset loaded");

        let target = match files.iter().find(|file| id.matches_path(&file.filename)) {
            Some(file) if is_image(&file.filename) => NavigationTarget::ImagePreview {
                repo: self.source.repo().clone(),
                sha,
                path: file.filename.clone(),
            },
            Some(file) => self.source.launch_target(&sha, file, id),
            None => {
                tracing::info!(hash = %id.file_hash, "no file matches the diff fingerprint");
                self.source.fallback_target(&sha)
            }
        };

        Ok(target)
    }
}
