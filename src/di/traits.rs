//! Trait definitions for dependency injection

use crate::core::HubrefResult;
use crate::github::types::{ApiResponse, Branch, Commit, GitHubFile, Page, PullRequest, Tag};
use crate::task::notification::{DismissReason, Notification};
use async_trait::async_trait;
use std::time::Duration;

/// Trait for configuration access
///
/// Provides read-only access to application configuration.
/// Implementations should be thread-safe (Send + Sync).
pub trait ConfigProvider: Send + Sync {
    /// Base URL of the REST API
    fn api_url(&self) -> &str;

    /// Items requested per page
    fn per_page(&self) -> u32;

    /// Transport timeout for a single request
    fn request_timeout(&self) -> Duration;

    /// How long a network-error notification stays up
    fn network_error_timeout(&self) -> Duration;

    /// How long API and application error notifications stay up
    fn api_error_timeout(&self) -> Duration;

    /// Token from the config file, if any
    fn token(&self) -> Option<&str>;
}

/// Trait for GitHub API access
///
/// Every method reports transport failures as `Err` and hands HTTP-level
/// outcomes back unclassified, so callers choose strict or presence mode.
#[async_trait]
pub trait GitHubProvider: Send + Sync {
    /// Fetch one page of a repository's branches
    async fn branches_page(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
    ) -> HubrefResult<ApiResponse<Page<Branch>>>;

    /// Fetch one page of a repository's tags
    async fn tags_page(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
    ) -> HubrefResult<ApiResponse<Page<Tag>>>;

    /// Fetch one page of the files changed by a pull request
    async fn pull_request_files_page(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        page: u32,
    ) -> HubrefResult<ApiResponse<Page<GitHubFile>>>;

    /// Fetch a commit with its changeset
    async fn commit(&self, owner: &str, repo: &str, sha: &str) -> HubrefResult<ApiResponse<Commit>>;

    /// Fetch a pull request
    async fn pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> HubrefResult<ApiResponse<PullRequest>>;

    /// Check whether the authenticated user starred a repository (204 / 404)
    async fn starred(&self, owner: &str, repo: &str) -> HubrefResult<ApiResponse<()>>;
}

/// Hook invoked when the API rejects the current credentials
#[cfg_attr(test, mockall::automock)]
pub trait SessionGuard: Send + Sync {
    /// Log the user out; must not fail
    fn invalidate_session(&self);
}

/// Busy indicator shown while an operation runs
pub trait BusyIndicator: Send + Sync {
    fn show(&self, message: &str);

    fn dismiss(&self);

    /// Whether the context that owns the indicator is still alive
    fn is_attached(&self) -> bool {
        true
    }
}

/// Transient, dismissible notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a notification and wait until it goes away
    async fn notify(&self, notification: &Notification) -> DismissReason;

    /// Hand error details to the user's clipboard (or nearest equivalent)
    fn copy_to_clipboard(&self, label: &str, text: &str);
}
