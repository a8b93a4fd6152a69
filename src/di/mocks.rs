//! Mock implementations of service traits for testing

use super::traits::{BusyIndicator, ConfigProvider, GitHubProvider, Notifier, SessionGuard};
use crate::core::HubrefResult;
use crate::github::types::{
    ApiResponse, Branch, Commit, CommitPointer, GitHubFile, Page, PullRequest, PullRequestRef, Tag,
};
use crate::task::notification::{DismissReason, Notification};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Mock configuration provider for testing
///
/// # Example
///
/// ```
/// use hubref::di::mocks::MockConfigProvider;
/// use hubref::di::ConfigProvider;
///
/// let config = MockConfigProvider::with_api_url("http://127.0.0.1:9999");
/// assert_eq!(config.api_url(), "http://127.0.0.1:9999");
/// assert_eq!(config.per_page(), 100);
/// ```
#[derive(Clone)]
pub struct MockConfigProvider {
    pub api_url: String,
    pub per_page: u32,
    pub request_timeout: Duration,
    pub network_error_timeout: Duration,
    pub api_error_timeout: Duration,
    pub token: Option<String>,
}

impl MockConfigProvider {
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Default::default()
        }
    }
}

impl Default for MockConfigProvider {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            per_page: 100,
            request_timeout: Duration::from_secs(5),
            network_error_timeout: Duration::from_millis(2750),
            api_error_timeout: Duration::from_millis(8000),
            token: None,
        }
    }
}

impl ConfigProvider for MockConfigProvider {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn per_page(&self) -> u32 {
        self.per_page
    }

    fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    fn network_error_timeout(&self) -> Duration {
        self.network_error_timeout
    }

    fn api_error_timeout(&self) -> Duration {
        self.api_error_timeout
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Serves scripted pages and records which page numbers were requested
struct PagedList<T> {
    pages: Vec<Vec<T>>,
    failure: Option<(u32, u16)>,
    fetched: Vec<u32>,
}

impl<T: Clone> PagedList<T> {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            failure: None,
            fetched: Vec::new(),
        }
    }

    fn serve(&mut self, page: u32) -> ApiResponse<Page<T>> {
        self.fetched.push(page);

        if let Some((failing, status)) = self.failure {
            if failing == page {
                let body = format!("scripted failure on page {}", page);
                return ApiResponse::failure(status, Some(body));
            }
        }

        let count = self.pages.len() as u32;
        if count == 0 && page == 1 {
            return ApiResponse::ok(Page::single(Vec::new()));
        }
        match self.pages.get(page as usize - 1) {
            Some(items) => ApiResponse::ok(Page {
                items: items.clone(),
                first: (count > 1).then_some(1),
                prev: (page > 1).then_some(page - 1),
                next: (page < count).then_some(page + 1),
                last: (count > 1).then_some(count),
            }),
            None => ApiResponse::failure(404, None),
        }
    }
}

/// Mock GitHub provider for testing
///
/// Lists are served from in-memory pages chained through `next`, and every
/// page request is logged so tests can assert on fetch order.
///
/// # Example
///
/// ```
/// use hubref::di::mocks::MockGitHubProvider;
///
/// let github = MockGitHubProvider::new()
///     .with_branch_pages(vec![vec!["main"], vec!["release/1.x"]])
///     .with_tag_pages(vec![vec!["v1.0"]]);
/// assert!(github.fetched_branch_pages().is_empty());
/// ```
pub struct MockGitHubProvider {
    branches: Mutex<PagedList<Branch>>,
    tags: Mutex<PagedList<Tag>>,
    pull_files: Mutex<PagedList<GitHubFile>>,
    commits: HashMap<String, Commit>,
    pull_requests: HashMap<u64, PullRequest>,
    starred: HashSet<String>,
}

/// Build a changed-file entry with just a filename
pub fn file_named(filename: &str) -> GitHubFile {
    GitHubFile {
        filename: filename.to_string(),
        status: Some("modified".to_string()),
        additions: 1,
        deletions: 0,
        changes: 1,
        patch: None,
        previous_filename: None,
    }
}

fn pointer(name: &str) -> CommitPointer {
    CommitPointer {
        sha: crate::resolver::fragment::path_fingerprint(name)[..40].to_string(),
        url: None,
    }
}

impl MockGitHubProvider {
    pub fn new() -> Self {
        Self {
            branches: Mutex::new(PagedList::new()),
            tags: Mutex::new(PagedList::new()),
            pull_files: Mutex::new(PagedList::new()),
            commits: HashMap::new(),
            pull_requests: HashMap::new(),
            starred: HashSet::new(),
        }
    }

    /// One inner vector per page, in API order
    pub fn with_branch_pages(self, pages: Vec<Vec<&str>>) -> Self {
        self.branches.lock().unwrap().pages = pages
            .into_iter()
            .map(|names| {
                names
                    .into_iter()
                    .map(|name| Branch {
                        name: name.to_string(),
                        commit: pointer(name),
                        protected: false,
                    })
                    .collect()
            })
            .collect();
        self
    }

    pub fn with_tag_pages(self, pages: Vec<Vec<&str>>) -> Self {
        self.tags.lock().unwrap().pages = pages
            .into_iter()
            .map(|names| {
                names
                    .into_iter()
                    .map(|name| Tag {
                        name: name.to_string(),
                        commit: pointer(name),
                        tarball_url: None,
                        zipball_url: None,
                    })
                    .collect()
            })
            .collect();
        self
    }

    pub fn with_pull_file_pages(self, pages: Vec<Vec<&str>>) -> Self {
        self.pull_files.lock().unwrap().pages = pages
            .into_iter()
            .map(|names| names.into_iter().map(file_named).collect())
            .collect();
        self
    }

    /// Answer `page` of the branch list with HTTP `status`
    pub fn failing_branch_page(self, page: u32, status: u16) -> Self {
        self.branches.lock().unwrap().failure = Some((page, status));
        self
    }

    pub fn failing_tag_page(self, page: u32, status: u16) -> Self {
        self.tags.lock().unwrap().failure = Some((page, status));
        self
    }

    pub fn failing_pull_file_page(self, page: u32, status: u16) -> Self {
        self.pull_files.lock().unwrap().failure = Some((page, status));
        self
    }

    pub fn with_commit(mut self, sha: &str, files: Vec<GitHubFile>) -> Self {
        self.commits.insert(
            sha.to_string(),
            Commit {
                sha: sha.to_string(),
                files,
            },
        );
        self
    }

    pub fn with_pull_request(mut self, number: u64, head_sha: &str) -> Self {
        self.pull_requests.insert(
            number,
            PullRequest {
                number,
                title: Some(format!("Pull request #{}", number)),
                head: PullRequestRef {
                    sha: head_sha.to_string(),
                    ref_name: "feature".to_string(),
                },
                base: PullRequestRef {
                    sha: "0".repeat(40),
                    ref_name: "main".to_string(),
                },
            },
        );
        self
    }

    /// Mark `owner/repo` as starred
    pub fn with_starred(mut self, full_name: &str) -> Self {
        self.starred.insert(full_name.to_string());
        self
    }

    pub fn fetched_branch_pages(&self) -> Vec<u32> {
        self.branches.lock().unwrap().fetched.clone()
    }

    pub fn fetched_tag_pages(&self) -> Vec<u32> {
        self.tags.lock().unwrap().fetched.clone()
    }

    pub fn fetched_pull_file_pages(&self) -> Vec<u32> {
        self.pull_files.lock().unwrap().fetched.clone()
    }
}

impl Default for MockGitHubProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GitHubProvider for MockGitHubProvider {
    async fn branches_page(
        &self,
        _owner: &str,
        _repo: &str,
        page: u32,
    ) -> HubrefResult<ApiResponse<Page<Branch>>> {
        Ok(self.branches.lock().unwrap().serve(page))
    }

    async fn tags_page(
        &self,
        _owner: &str,
        _repo: &str,
        page: u32,
    ) -> HubrefResult<ApiResponse<Page<Tag>>> {
        Ok(self.tags.lock().unwrap().serve(page))
    }

    async fn pull_request_files_page(
        &self,
        _owner: &str,
        _repo: &str,
        _number: u64,
        page: u32,
    ) -> HubrefResult<ApiResponse<Page<GitHubFile>>> {
        Ok(self.pull_files.lock().unwrap().serve(page))
    }

    async fn commit(
        &self,
        _owner: &str,
        _repo: &str,
        sha: &str,
    ) -> HubrefResult<ApiResponse<Commit>> {
        Ok(match self.commits.get(sha) {
            Some(commit) => ApiResponse::ok(commit.clone()),
            None => ApiResponse::failure(404, None),
        })
    }

    async fn pull_request(
        &self,
        _owner: &str,
        _repo: &str,
        number: u64,
    ) -> HubrefResult<ApiResponse<PullRequest>> {
        Ok(match self.pull_requests.get(&number) {
            Some(pr) => ApiResponse::ok(pr.clone()),
            None => ApiResponse::failure(404, None),
        })
    }

    async fn starred(&self, owner: &str, repo: &str) -> HubrefResult<ApiResponse<()>> {
        let full_name = format!("{}/{}", owner, repo);
        Ok(if self.starred.contains(&full_name) {
            ApiResponse::Success {
                status: 204,
                value: (),
            }
        } else {
            ApiResponse::failure(404, None)
        })
    }
}

/// Session guard that counts invalidations
#[derive(Default)]
pub struct RecordingSession {
    invalidations: AtomicUsize,
}

impl RecordingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidations(&self) -> usize {
        self.invalidations.load(Ordering::SeqCst)
    }
}

impl SessionGuard for RecordingSession {
    fn invalidate_session(&self) {
        self.invalidations.fetch_add(1, Ordering::SeqCst);
    }
}

/// Busy indicator that counts show/dismiss calls
pub struct MockBusyIndicator {
    shown: AtomicUsize,
    dismissed: AtomicUsize,
    visible: AtomicBool,
    attached: AtomicBool,
}

impl MockBusyIndicator {
    pub fn new() -> Self {
        Self {
            shown: AtomicUsize::new(0),
            dismissed: AtomicUsize::new(0),
            visible: AtomicBool::new(false),
            attached: AtomicBool::new(true),
        }
    }

    pub fn shown(&self) -> usize {
        self.shown.load(Ordering::SeqCst)
    }

    pub fn dismissed(&self) -> usize {
        self.dismissed.load(Ordering::SeqCst)
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    /// Simulate the owning context going away
    pub fn detach(&self) {
        self.attached.store(false, Ordering::SeqCst);
    }
}

impl Default for MockBusyIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl BusyIndicator for MockBusyIndicator {
    fn show(&self, _message: &str) {
        self.shown.fetch_add(1, Ordering::SeqCst);
        self.visible.store(true, Ordering::SeqCst);
    }

    fn dismiss(&self) {
        self.dismissed.fetch_add(1, Ordering::SeqCst);
        self.visible.store(false, Ordering::SeqCst);
    }

    fn is_attached(&self) -> bool {
        self.attached.load(Ordering::SeqCst)
    }
}

/// Notifier that answers with scripted dismiss reasons
///
/// Once the script runs out every notification times out.
#[derive(Default)]
pub struct MockNotifier {
    reasons: Mutex<VecDeque<DismissReason>>,
    notifications: Mutex<Vec<Notification>>,
    copied: Mutex<Vec<(String, String)>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reasons(self, reasons: Vec<DismissReason>) -> Self {
        *self.reasons.lock().unwrap() = reasons.into();
        self
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    /// `(label, text)` pairs handed to the clipboard
    pub fn copied(&self) -> Vec<(String, String)> {
        self.copied.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(&self, notification: &Notification) -> DismissReason {
        self.notifications.lock().unwrap().push(notification.clone());
        self.reasons
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(DismissReason::Timeout)
    }

    fn copy_to_clipboard(&self, label: &str, text: &str) {
        self.copied
            .lock()
            .unwrap()
            .push((label.to_string(), text.to_string()));
    }
}
