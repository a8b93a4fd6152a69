//! Hubref: paginated GitHub traversal and ref/path disambiguation
//!
//! This crate provides the main Hubref library, re-exporting core functionality
//! from `hubref-core` and organizing the engine that turns GitHub links into
//! navigation targets.

pub use hubref_core::{
    format_error_with_help, CredentialStore, ErrorHelp, HubrefError, HubrefResult,
};

/// Core module re-exported from hubref-core.
pub mod core {
    pub use hubref_core::core::*;
    pub use hubref_core::*;
}

/// Configuration management.
pub mod config;

/// GitHub REST client and API types.
pub mod github;

/// Dependency injection infrastructure.
pub mod di;

/// HTTP outcome classification and session guarding.
pub mod classify;

/// Sequential page traversal.
pub mod pagination;

/// Busy indicator and retry protocol around user-triggered operations.
pub mod task;

/// Ref/path and diff link resolution.
pub mod resolver;

/// Keychain-backed session guards.
pub mod session;
