//! Service container for dependency injection

use super::traits::{BusyIndicator, ConfigProvider, GitHubProvider, Notifier, SessionGuard};
use crate::classify::ErrorClassifier;
use crate::resolver::diff::{CommitDiffSource, DiffTargetResolver, PullRequestDiffSource};
use crate::resolver::ref_path::RefPathResolver;
use crate::resolver::target::RepoCoordinates;
use crate::task::notification::NotificationDurations;
use crate::task::retry::RetryableTask;
use std::sync::Arc;

/// Service container for dependency injection
///
/// Holds every collaborator behind a trait object so the CLI can wire real
/// terminal and network implementations while tests inject the doubles from
/// [`crate::di::mocks`].
///
/// # Example (Testing)
///
/// ```
/// use hubref::di::{ServiceContainer, mocks::*};
/// use std::sync::Arc;
///
/// let container = ServiceContainer::with_providers(
///     Arc::new(MockConfigProvider::default()),
///     Arc::new(MockGitHubProvider::new()),
///     Arc::new(RecordingSession::new()),
///     Arc::new(MockBusyIndicator::new()),
///     Arc::new(MockNotifier::new()),
/// );
/// assert_eq!(container.config().per_page(), 100);
/// ```
#[derive(Clone)]
pub struct ServiceContainer {
    pub config: Arc<dyn ConfigProvider>,
    pub github: Arc<dyn GitHubProvider>,
    pub session: Arc<dyn SessionGuard>,
    pub busy: Arc<dyn BusyIndicator>,
    pub notifier: Arc<dyn Notifier>,
}

impl ServiceContainer {
    pub fn with_providers(
        config: Arc<dyn ConfigProvider>,
        github: Arc<dyn GitHubProvider>,
        session: Arc<dyn SessionGuard>,
        busy: Arc<dyn BusyIndicator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            github,
            session,
            busy,
            notifier,
        }
    }

    /// Get the configuration provider
    pub fn config(&self) -> &dyn ConfigProvider {
        self.config.as_ref()
    }

    /// Get the GitHub provider
    pub fn github(&self) -> &dyn GitHubProvider {
        self.github.as_ref()
    }

    pub fn classifier(&self) -> ErrorClassifier {
        ErrorClassifier::new(self.session.clone())
    }

    pub fn ref_resolver(&self) -> RefPathResolver {
        RefPathResolver::new(self.github.clone(), self.classifier())
    }

    pub fn commit_diff_resolver(
        &self,
        repo: RepoCoordinates,
        sha: &str,
    ) -> DiffTargetResolver<CommitDiffSource> {
        DiffTargetResolver::new(CommitDiffSource::new(
            self.github.clone(),
            self.classifier(),
            repo,
            sha,
        ))
    }

    pub fn pull_request_diff_resolver(
        &self,
        repo: RepoCoordinates,
        number: u64,
    ) -> DiffTargetResolver<PullRequestDiffSource> {
        DiffTargetResolver::new(PullRequestDiffSource::new(
            self.github.clone(),
            self.classifier(),
            repo,
            number,
        ))
    }

    /// Retry wrapper using the container's busy indicator, notifier and timeouts
    pub fn retryable(&self, busy_message: &str, error_context: &str) -> RetryableTask {
        RetryableTask::new(
            self.busy.clone(),
            self.notifier.clone(),
            busy_message,
            error_context,
        )
        .with_durations(NotificationDurations {
            network: self.config.network_error_timeout(),
            long: self.config.api_error_timeout(),
        })
    }
}
