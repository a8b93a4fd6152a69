//! Dependency injection infrastructure for Hubref
//!
//! The engine talks to the outside world only through the traits in
//! [`traits`]: configuration, the GitHub API, the session, the busy
//! indicator and notifications.
//!
//! # Example (Testing)
//! ```
//! use hubref::di::{ServiceContainer, mocks::*};
//! use std::sync::Arc;
//!
//! let github = Arc::new(MockGitHubProvider::new().with_branch_pages(vec![vec!["main"]]));
//! let container = ServiceContainer::with_providers(
//!     Arc::new(MockConfigProvider::default()),
//!     github,
//!     Arc::new(RecordingSession::new()),
//!     Arc::new(MockBusyIndicator::new()),
//!     Arc::new(MockNotifier::new()),
//! );
//! let _resolver = container.ref_resolver();
//! ```

pub mod container;
pub mod mocks;
pub mod traits;

// Re-export key types
pub use container::ServiceContainer;
pub use traits::{BusyIndicator, ConfigProvider, GitHubProvider, Notifier, SessionGuard};
