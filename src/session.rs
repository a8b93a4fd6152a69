//! Session guards matched to where the GitHub token came from

use crate::core::credentials::GITHUB_TOKEN_KEY;
use crate::core::CredentialStore;
use crate::di::traits::SessionGuard;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Where the token sent to GitHub came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    /// `GITHUB_TOKEN` or the config file
    Configured(String),
    /// The keychain entry written by `hubref login`
    Keychain(String),
    Anonymous,
}

impl TokenSource {
    /// A configured token wins; the keychain is only read without one
    pub fn select(configured: Option<String>, stored: impl FnOnce() -> Option<String>) -> Self {
        match configured {
            Some(token) => TokenSource::Configured(token),
            None => stored().map_or(TokenSource::Anonymous, TokenSource::Keychain),
        }
    }

    pub fn token(&self) -> Option<String> {
        match self {
            TokenSource::Configured(token) | TokenSource::Keychain(token) => Some(token.clone()),
            TokenSource::Anonymous => None,
        }
    }

    /// Guard that invalidates exactly the token this source supplied
    pub fn session(&self) -> Arc<dyn SessionGuard> {
        match self {
            TokenSource::Keychain(_) => Arc::new(KeyringSession::new()),
            TokenSource::Configured(_) => Arc::new(ConfiguredTokenSession::new()),
            TokenSource::Anonymous => Arc::new(NoopSession),
        }
    }
}

/// Logs the user out by deleting the stored GitHub token
///
/// Only the first invalidation touches the keychain; a traversal that keeps
/// hitting 401 does not delete the entry repeatedly.
pub struct KeyringSession {
    key: &'static str,
    invalidated: AtomicBool,
}

impl KeyringSession {
    pub fn new() -> Self {
        Self::for_key(GITHUB_TOKEN_KEY)
    }

    /// Guard a keychain entry other than the default token
    pub fn for_key(key: &'static str) -> Self {
        Self {
            key,
            invalidated: AtomicBool::new(false),
        }
    }

    /// Token saved by `hubref login`, if any
    pub fn stored_token() -> Option<String> {
        CredentialStore::retrieve(GITHUB_TOKEN_KEY).ok()
    }

    pub fn is_invalidated(&self) -> bool {
        self.invalidated.load(Ordering::SeqCst)
    }
}

impl Default for KeyringSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionGuard for KeyringSession {
    fn invalidate_session(&self) {
        if self.invalidated.swap(true, Ordering::SeqCst) {
            return;
        }
        match CredentialStore::delete(self.key) {
            Ok(()) => tracing::warn!("stored GitHub token was rejected and has been removed"),
            Err(e) => tracing::warn!(error = %e, "could not remove the rejected GitHub token"),
        }
    }
}

/// Guard for a token from the environment or config file
///
/// hubref cannot remove that token, so a rejection is reported once and the
/// keychain is left alone.
#[derive(Default)]
pub struct ConfiguredTokenSession {
    rejected: AtomicBool,
}

impl ConfiguredTokenSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_rejected(&self) -> bool {
        self.rejected.load(Ordering::SeqCst)
    }
}

impl SessionGuard for ConfiguredTokenSession {
    fn invalidate_session(&self) {
        if self.rejected.swap(true, Ordering::SeqCst) {
            return;
        }
        tracing::warn!(
            "GitHub rejected the token from GITHUB_TOKEN or the config file; update or remove it"
        );
    }
}

/// Session guard for anonymous use; nothing to log out of
pub struct NoopSession;

impl SessionGuard for NoopSession {
    fn invalidate_session(&self) {
        tracing::debug!("unauthenticated session, nothing to invalidate");
    }
}
