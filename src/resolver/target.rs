//! Navigation targets produced by the resolvers

use crate::resolver::fragment::LineRange;
use serde::Serialize;
use std::fmt;

/// Owner and name of a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoCoordinates {
    pub owner: String,
    pub repo: String,
}

impl RepoCoordinates {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parse `owner/repo`
    pub fn parse(full_name: &str) -> Option<Self> {
        let (owner, repo) = full_name.split_once('/')?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return None;
        }
        Some(Self::new(owner, repo))
    }
}

impl fmt::Display for RepoCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Where the caller should navigate next
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationTarget {
    /// A single file at a ref, optionally with highlighted lines
    FileView {
        repo: RepoCoordinates,
        ref_name: String,
        path: String,
        highlight: Option<LineRange>,
    },
    /// The repository browser at a ref, optionally inside a directory
    Repository {
        repo: RepoCoordinates,
        ref_name: String,
        path: Option<String>,
        initial_page: Option<u32>,
    },
    /// An image file rendered instead of diffed
    ImagePreview {
        repo: RepoCoordinates,
        sha: String,
        path: String,
    },
    /// One file of a commit diff
    CommitDiff {
        repo: RepoCoordinates,
        sha: String,
        path: String,
        highlight: Option<DiffLines>,
    },
    /// One file of a pull request diff
    PullRequestDiff {
        repo: RepoCoordinates,
        number: u64,
        sha: String,
        path: String,
        highlight: Option<DiffLines>,
    },
    /// The whole commit, when the addressed file was not found
    Commit { repo: RepoCoordinates, sha: String },
    /// The pull request's file list, when the addressed file was not found
    PullRequestFiles {
        repo: RepoCoordinates,
        number: u64,
        sha: String,
    },
}

/// Highlighted lines on one side of a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffLines {
    pub start: u32,
    pub end: Option<u32>,
    pub right: bool,
}
