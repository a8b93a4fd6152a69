//! GitHub REST v3 access
//!
//! The client hands back HTTP outcomes as [`types::ApiResponse`] values so
//! callers decide how to classify them. List endpoints return one
//! [`types::Page`] per call with pointers read from the `Link` header.

pub mod client;
pub mod types;

pub use client::{GitHubClient, PageLinks, MAX_PAGE_SIZE};
pub use types::{ApiResponse, Branch, Commit, GitHubFile, NamedRef, Page, PullRequest, Tag};
