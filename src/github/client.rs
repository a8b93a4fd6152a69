//! GitHub API client implementation

use crate::core::{HubrefError, HubrefResult};
use crate::di::traits::{ConfigProvider, GitHubProvider};
use crate::github::types::{ApiResponse, Branch, Commit, GitHubFile, Page, PullRequest, Tag};
use async_trait::async_trait;
use regex::Regex;
use reqwest::{header, Client as HttpClient, Url};
use serde::de::DeserializeOwned;
use std::sync::{Arc, LazyLock};
use std::time::{Duration, SystemTime};
use tokio::sync::Mutex;

/// Maximum page size the API accepts
pub const MAX_PAGE_SIZE: u32 = 100;

static LINK_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<([^>]+)>;\s*rel="(\w+)""#).expect("valid link pattern"));

/// GitHub API client
pub struct GitHubClient {
    http_client: HttpClient,
    api_url: String,
    per_page: u32,
    token: Option<String>,
    rate_limiter: Arc<RateLimiter>,
}

/// Rate limiter for GitHub API
struct RateLimiter {
    remaining: Mutex<u64>,
    reset_time: Mutex<SystemTime>,
}

/// Page pointers carried by a `Link` response header
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PageLinks {
    pub first: Option<u32>,
    pub prev: Option<u32>,
    pub next: Option<u32>,
    pub last: Option<u32>,
}

impl PageLinks {
    /// Parse `<https://…?page=2>; rel="next", <…?page=5>; rel="last"`
    pub fn parse(header_value: &str) -> Self {
        let mut links = Self::default();
        for captures in LINK_ENTRY.captures_iter(header_value) {
            let page = page_number(&captures[1]);
            match &captures[2] {
                "first" => links.first = page,
                "prev" => links.prev = page,
                "next" => links.next = page,
                "last" => links.last = page,
                _ => {}
            }
        }
        links
    }

    fn into_page<T>(self, items: Vec<T>) -> Page<T> {
        Page {
            items,
            first: self.first,
            prev: self.prev,
            next: self.next,
            last: self.last,
        }
    }
}

fn page_number(url: &str) -> Option<u32> {
    let url = Url::parse(url).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}

fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

impl GitHubClient {
    /// Create a new GitHub client
    ///
    /// `token` is sent as `Authorization: token <t>` on every request.
    pub fn new(config: &dyn ConfigProvider, token: Option<String>) -> HubrefResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("hubref/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        if let Some(ref token) = token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("token {}", token))
                    .map_err(|e| HubrefError::Config(format!("Invalid GitHub token: {}", e)))?,
            );
        }

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .timeout(config.request_timeout())
            .build()?;

        let has_token = token.is_some();
        Ok(Self {
            http_client,
            api_url: config.api_url().trim_end_matches('/').to_string(),
            per_page: config.per_page().clamp(1, MAX_PAGE_SIZE),
            token,
            rate_limiter: Arc::new(RateLimiter {
                remaining: Mutex::new(if has_token { 5000 } else { 60 }),
                reset_time: Mutex::new(SystemTime::now() + Duration::from_secs(3600)),
            }),
        })
    }

    fn repo_url(&self, owner: &str, repo: &str, rest: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.api_url,
            segment(owner),
            segment(repo),
            rest
        )
    }

    /// Get one page of branches
    pub async fn branches_page(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
    ) -> HubrefResult<ApiResponse<Page<Branch>>> {
        let url = self.repo_url(owner, repo, "branches");
        self.api_get_page(&url, page).await
    }

    /// Get one page of tags
    pub async fn tags_page(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
    ) -> HubrefResult<ApiResponse<Page<Tag>>> {
        let url = self.repo_url(owner, repo, "tags");
        self.api_get_page(&url, page).await
    }

    /// Get one page of the files changed by a pull request
    pub async fn pull_request_files_page(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        page: u32,
    ) -> HubrefResult<ApiResponse<Page<GitHubFile>>> {
        let url = self.repo_url(owner, repo, &format!("pulls/{}/files", number));
        self.api_get_page(&url, page).await
    }

    /// Get a commit and its changed files
    pub async fn commit(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
    ) -> HubrefResult<ApiResponse<Commit>> {
        let url = self.repo_url(owner, repo, &format!("commits/{}", segment(sha)));
        self.api_get(&url).await
    }

    /// Get a pull request
    pub async fn pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> HubrefResult<ApiResponse<PullRequest>> {
        let url = self.repo_url(owner, repo, &format!("pulls/{}", number));
        self.api_get(&url).await
    }

    /// Check whether the authenticated user starred a repository
    ///
    /// The API answers 204 when starred and 404 when not.
    pub async fn starred(&self, owner: &str, repo: &str) -> HubrefResult<ApiResponse<()>> {
        let url = format!(
            "{}/user/starred/{}/{}",
            self.api_url,
            segment(owner),
            segment(repo)
        );
        let response = self.api_request(&url, &[]).await?;
        let status = response.status();
        if status.is_success() {
            Ok(ApiResponse::Success {
                status: status.as_u16(),
                value: (),
            })
        } else {
            Self::failure(response).await
        }
    }

    /// Make an API request and handle rate limiting
    ///
    /// Any HTTP status is returned as-is; only transport failures are errors.
    async fn api_request(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> HubrefResult<reqwest::Response> {
        self.check_rate_limit().await?;

        tracing::debug!(url, ?query, "GET");
        let response = self.http_client.get(url).query(query).send().await?;

        self.update_rate_limit(&response).await;
        Ok(response)
    }

    /// Make an API GET request and parse a JSON body on success
    async fn api_get<T: DeserializeOwned>(&self, url: &str) -> HubrefResult<ApiResponse<T>> {
        let response = self.api_request(url, &[]).await?;
        let status = response.status();
        if !status.is_success() {
            return Self::failure(response).await;
        }

        let bytes = response.bytes().await?;
        Ok(ApiResponse::Success {
            status: status.as_u16(),
            value: serde_json::from_slice(&bytes)?,
        })
    }

    /// Fetch one page of a list endpoint, reading page pointers from `Link`
    async fn api_get_page<T: DeserializeOwned>(
        &self,
        url: &str,
        page: u32,
    ) -> HubrefResult<ApiResponse<Page<T>>> {
        let query = [
            ("per_page", self.per_page.to_string()),
            ("page", page.to_string()),
        ];
        let response = self.api_request(url, &query).await?;
        let status = response.status();
        if !status.is_success() {
            return Self::failure(response).await;
        }

        let links = response
            .headers()
            .get(header::LINK)
            .and_then(|v| v.to_str().ok())
            .map(PageLinks::parse)
            .unwrap_or_default();
        let bytes = response.bytes().await?;
        let items: Vec<T> = serde_json::from_slice(&bytes)?;

        Ok(ApiResponse::Success {
            status: status.as_u16(),
            value: links.into_page(items),
        })
    }

    async fn failure<T>(response: reqwest::Response) -> HubrefResult<ApiResponse<T>> {
        let status = response.status().as_u16();
        let body = response.text().await.ok().filter(|b| !b.trim().is_empty());
        Ok(ApiResponse::failure(status, body))
    }

    /// Check if we're within rate limits
    async fn check_rate_limit(&self) -> HubrefResult<()> {
        let remaining = *self.rate_limiter.remaining.lock().await;
        let reset_time = *self.rate_limiter.reset_time.lock().await;

        if remaining == 0 {
            let now = SystemTime::now();
            if now < reset_time {
                let wait_duration = reset_time.duration_since(now).unwrap_or(Duration::ZERO);
                tracing::warn!(
                    reset_in_secs = wait_duration.as_secs(),
                    authenticated = self.token.is_some(),
                    "GitHub API rate limit exhausted"
                );
                return Err(HubrefError::RateLimited {
                    reset_in_secs: wait_duration.as_secs(),
                });
            }
        }

        Ok(())
    }

    /// Update rate limit from response headers
    async fn update_rate_limit(&self, response: &reqwest::Response) {
        if let Some(remaining) = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
        {
            *self.rate_limiter.remaining.lock().await = remaining;
        }

        if let Some(reset) = response
            .headers()
            .get("x-ratelimit-reset")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
        {
            *self.rate_limiter.reset_time.lock().await =
                SystemTime::UNIX_EPOCH + Duration::from_secs(reset);
        }
    }
}

// Implement GitHubProvider trait
#[async_trait]
impl GitHubProvider for GitHubClient {
    async fn branches_page(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
    ) -> HubrefResult<ApiResponse<Page<Branch>>> {
        Self::branches_page(self, owner, repo, page).await
    }

    async fn tags_page(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
    ) -> HubrefResult<ApiResponse<Page<Tag>>> {
        Self::tags_page(self, owner, repo, page).await
    }

    async fn pull_request_files_page(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        page: u32,
    ) -> HubrefResult<ApiResponse<Page<GitHubFile>>> {
        Self::pull_request_files_page(self, owner, repo, number, page).await
    }

    async fn commit(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
    ) -> HubrefResult<ApiResponse<Commit>> {
        Self::commit(self, owner, repo, sha).await
    }

    async fn pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> HubrefResult<ApiResponse<PullRequest>> {
        Self::pull_request(self, owner, repo, number).await
    }

    async fn starred(&self, owner: &str, repo: &str) -> HubrefResult<ApiResponse<()>> {
        Self::starred(self, owner, repo).await
    }
}
