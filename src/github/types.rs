//! GitHub API type definitions

use serde::{Deserialize, Serialize};

/// One page of a paginated list response
///
/// When every item fits a single page GitHub omits the `Link` header, so all
/// pointers are `None`. That means "exactly one page", not "unknown".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub first: Option<u32>,
    pub prev: Option<u32>,
    pub next: Option<u32>,
    pub last: Option<u32>,
}

impl<T> Page<T> {
    /// A page with no neighbours
    pub fn single(items: Vec<T>) -> Self {
        Self {
            items,
            first: None,
            prev: None,
            next: None,
            last: None,
        }
    }

    pub fn with_next(mut self, next: Option<u32>) -> Self {
        self.next = next;
        self
    }

    /// Number of pages in the whole list
    ///
    /// The last page carries no `last` pointer, so its own number stands in.
    pub fn total_pages(&self) -> u32 {
        self.last
            .or_else(|| self.prev.map(|prev| prev + 1))
            .unwrap_or(1)
    }
}

/// Outcome of an HTTP exchange that reached the server
///
/// Transport failures never produce an `ApiResponse`; they surface as
/// `HubrefError::Transport` before this point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse<T> {
    Success { status: u16, value: T },
    Failure { status: u16, body: Option<String> },
}

impl<T> ApiResponse<T> {
    pub fn ok(value: T) -> Self {
        ApiResponse::Success { status: 200, value }
    }

    pub fn failure(status: u16, body: Option<String>) -> Self {
        ApiResponse::Failure { status, body }
    }

    pub fn status(&self) -> u16 {
        match self {
            ApiResponse::Success { status, .. } | ApiResponse::Failure { status, .. } => *status,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            ApiResponse::Success { status, value } => ApiResponse::Success {
                status,
                value: f(value),
            },
            ApiResponse::Failure { status, body } => ApiResponse::Failure { status, body },
        }
    }
}

/// Anything listed by name under a repository's refs (branches, tags)
pub trait NamedRef {
    fn name(&self) -> &str;
}

/// Commit pointer embedded in branch and tag listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitPointer {
    pub sha: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// GitHub branch information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub commit: CommitPointer,
    #[serde(default)]
    pub protected: bool,
}

impl NamedRef for Branch {
    fn name(&self) -> &str {
        &self.name
    }
}

/// GitHub tag information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub commit: CommitPointer,
    #[serde(default)]
    pub tarball_url: Option<String>,
    #[serde(default)]
    pub zipball_url: Option<String>,
}

impl NamedRef for Tag {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A file entry of a commit or pull request changeset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubFile {
    pub filename: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub additions: u32,
    #[serde(default)]
    pub deletions: u32,
    #[serde(default)]
    pub changes: u32,
    #[serde(default)]
    pub patch: Option<String>,
    #[serde(default)]
    pub previous_filename: Option<String>,
}

/// Commit with its changeset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    #[serde(default)]
    pub files: Vec<GitHubFile>,
}

/// Head or base of a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    pub sha: String,
    #[serde(rename = "ref")]
    pub ref_name: String,
}

/// GitHub pull request information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    #[serde(default)]
    pub title: Option<String>,
    pub head: PullRequestRef,
    pub base: PullRequestRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_without_pointers_is_one() {
        let page = Page::single(vec![1, 2, 3]);
        assert_eq!(page.total_pages(), 1);
        assert_eq!(page.next, None);
    }

    #[test]
    fn test_total_pages_uses_last() {
        let mut page = Page::single(vec!["a"]).with_next(Some(2));
        page.last = Some(7);
        assert_eq!(page.total_pages(), 7);
    }

    #[test]
    fn test_total_pages_on_final_page() {
        let mut page = Page::single(vec!["z"]);
        page.first = Some(1);
        page.prev = Some(4);
        assert_eq!(page.total_pages(), 5);
    }

    #[test]
    fn test_api_response_map_keeps_failure() {
        let failure: ApiResponse<u32> = ApiResponse::failure(404, Some("Not Found".to_string()));
        let mapped = failure.map(|v| v * 2);
        assert_eq!(mapped, ApiResponse::failure(404, Some("Not Found".to_string())));
        assert_eq!(ApiResponse::ok(21).map(|v| v * 2), ApiResponse::ok(42));
    }

    #[test]
    fn test_branch_deserialization() {
        let json = r#"{"name":"main","commit":{"sha":"abc","url":"https://x"},"protected":true}"#;
        let branch: Branch = serde_json::from_str(json).unwrap();
        assert_eq!(branch.name(), "main");
        assert!(branch.protected);
    }

    #[test]
    fn test_pull_request_ref_rename() {
        let json = r#"{
            "number": 7,
            "head": {"sha": "h", "ref": "feature"},
            "base": {"sha": "b", "ref": "main"}
        }"#;
        let pr: PullRequest = serde_json::from_str(json).unwrap();
        assert_eq!(pr.head.ref_name, "feature");
        assert_eq!(pr.base.sha, "b");
        assert_eq!(pr.title, None);
    }
}
