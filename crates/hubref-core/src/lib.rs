//! Core utilities shared by the Hubref library and binary
//!
//! - the error taxonomy (`HubrefError`) and its help text
//! - platform-specific config paths
//! - OS keychain credential storage

pub mod core;

pub use core::credentials::CredentialStore;
pub use core::error::{ErrorCategory, HubrefError, HubrefResult};
pub use core::error_help::{format_error_with_help, ErrorHelp};
