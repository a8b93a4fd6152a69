//! Splitting `ref/path` strings into a ref name and a path
//!
//! Ref names may contain slashes, so `release/2.x/docs/index.md` can only be
//! split by asking the API which refs exist. Cheap shortcuts go first:
//!
//! 1. `HEAD` or `HEAD/<path>`
//! 2. a 40-character lowercase hex commit SHA as the first segment
//! 3. the branch list
//! 4. the tag list
//!
//! A list is read until the first page holding a match. On that page an
//! exact name match wins over a `name/` prefix match, and among prefix
//! matches the first one in API order wins. Branches always win over tags.

use crate::classify::ErrorClassifier;
use crate::core::HubrefResult;
use crate::di::traits::GitHubProvider;
use crate::github::types::{ApiResponse, NamedRef, Page};
use crate::pagination::{Match, PageIterator};
use crate::resolver::fragment::parse_line_fragment;
use crate::resolver::target::{NavigationTarget, RepoCoordinates};
use regex::Regex;
use std::future::Future;
use std::sync::{Arc, LazyLock};

static SHA1_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]{40}$").expect("valid sha pattern"));

const HEAD: &str = "HEAD";

/// A ref name and the path that followed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRef {
    pub ref_name: String,
    pub path: Option<String>,
}

impl ResolvedRef {
    fn new(ref_name: &str, path: Option<&str>) -> Self {
        Self {
            ref_name: ref_name.to_string(),
            path: path.map(str::to_string),
        }
    }
}

/// What the caller wants to open once the ref is known
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveMode {
    /// Open a file; `fragment` may carry `L12` or `L12-L14`
    FileView { fragment: Option<String> },
    /// Open the repository browser at the ref
    Browse { initial_page: Option<u32> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Head,
    Sha,
    Branches,
    Tags,
}

const STAGES: [Stage; 4] = [Stage::Head, Stage::Sha, Stage::Branches, Stage::Tags];

pub struct RefPathResolver {
    github: Arc<dyn GitHubProvider>,
    classifier: ErrorClassifier,
}

impl RefPathResolver {
    pub fn new(github: Arc<dyn GitHubProvider>, classifier: ErrorClassifier) -> Self {
        Self { github, classifier }
    }

    /// Split `ref_and_path`, or `None` when no stage recognises the ref
    pub async fn resolve(
        &self,
        repo: &RepoCoordinates,
        ref_and_path: &str,
    ) -> HubrefResult<Option<ResolvedRef>> {
        for stage in STAGES {
            let resolved = match stage {
                Stage::Head => resolve_head(ref_and_path),
                Stage::Sha => resolve_sha(ref_and_path),
                Stage::Branches => {
                    self.search(
                        |page| self.github.branches_page(&repo.owner, &repo.repo, page),
                        ref_and_path,
                    )
                    .await?
                }
                Stage::Tags => {
                    self.search(
                        |page| self.github.tags_page(&repo.owner, &repo.repo, page),
                        ref_and_path,
                    )
                    .await?
                }
            };

            if let Some(resolved) = resolved {
                tracing::info!(
                    ?stage,
                    ref_name = %resolved.ref_name,
                    path = ?resolved.path,
                    "resolved ref and path"
                );
                return Ok(Some(resolved));
            }
            tracing::debug!(?stage, "no match");
        }

        Ok(None)
    }

    /// Resolve and turn the result into a navigation target
    ///
    /// In file view mode a ref without a path has no file to show, so the
    /// result is `None`.
    pub async fn disambiguate(
        &self,
        repo: &RepoCoordinates,
        ref_and_path: &str,
        mode: &ResolveMode,
    ) -> HubrefResult<Option<NavigationTarget>> {
        let Some(resolved) = self.resolve(repo, ref_and_path).await? else {
            return Ok(None);
        };

        let target = match mode {
            ResolveMode::FileView { fragment } => {
                let Some(path) = resolved.path else {
                    return Ok(None);
                };
                NavigationTarget::FileView {
                    repo: repo.clone(),
                    ref_name: resolved.ref_name,
                    path,
                    highlight: fragment.as_deref().and_then(parse_line_fragment),
                }
            }
            ResolveMode::Browse { initial_page } => NavigationTarget::Repository {
                repo: repo.clone(),
                ref_name: resolved.ref_name,
                path: resolved.path,
                initial_page: *initial_page,
            },
        };

        Ok(Some(target))
    }

    async fn search<T, F, Fut>(
        &self,
        producer: F,
        ref_and_path: &str,
    ) -> HubrefResult<Option<ResolvedRef>>
    where
        T: NamedRef,
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = HubrefResult<ApiResponse<Page<T>>>>,
    {
        let found = PageIterator::new(&self.classifier)
            .find_best(producer, |item: &T| rank_ref(item.name(), ref_and_path))
            .await?;
        Ok(found.map(|item| split_at_ref(item.name(), ref_and_path)))
    }
}

fn resolve_head(ref_and_path: &str) -> Option<ResolvedRef> {
    if ref_and_path == HEAD {
        return Some(ResolvedRef::new(HEAD, None));
    }
    let path = ref_and_path.strip_prefix(HEAD)?.strip_prefix('/')?;
    Some(ResolvedRef::new(HEAD, Some(path)))
}

fn resolve_sha(ref_and_path: &str) -> Option<ResolvedRef> {
    let (candidate, path) = match ref_and_path.split_once('/') {
        Some((candidate, rest)) => (candidate, rest),
        None => (ref_and_path, ""),
    };
    SHA1_PATTERN
        .is_match(candidate)
        .then(|| ResolvedRef::new(candidate, Some(path)))
}

fn rank_ref(name: &str, ref_and_path: &str) -> Option<Match> {
    if name.is_empty() {
        return None;
    }
    if ref_and_path == name {
        return Some(Match::Exact);
    }
    ref_and_path
        .strip_prefix(name)
        .is_some_and(|rest| rest.starts_with('/'))
        .then_some(Match::Prefix)
}

fn split_at_ref(name: &str, ref_and_path: &str) -> ResolvedRef {
    let path = ref_and_path
        .strip_prefix(name)
        .and_then(|rest| rest.strip_prefix('/'));
    ResolvedRef::new(name, path)
}
