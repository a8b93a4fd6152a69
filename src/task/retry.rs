use crate::core::HubrefResult;
use crate::di::traits::{BusyIndicator, Notifier};
use crate::task::busy::BusyGuard;
use crate::task::notification::{
    DismissReason, Notification, NotificationAction, NotificationDurations,
};
use std::future::Future;
use std::sync::Arc;

/// What to do after a failed attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    Retry,
    Abandon,
}

impl RetryDecision {
    fn from_dismissal(action: Option<&NotificationAction>, reason: DismissReason) -> Self {
        match (action, reason) {
            (Some(NotificationAction::Retry), DismissReason::Action) => RetryDecision::Retry,
            _ => RetryDecision::Abandon,
        }
    }
}

/// Runs an operation behind a busy indicator and offers a retry on failure
///
/// Attempts never overlap: the next attempt starts only after the previous
/// attempt's indicator was dismissed and its notification went away.
pub struct RetryableTask {
    busy: Arc<dyn BusyIndicator>,
    notifier: Arc<dyn Notifier>,
    busy_message: String,
    error_context: String,
    durations: NotificationDurations,
}

impl RetryableTask {
    pub fn new(
        busy: Arc<dyn BusyIndicator>,
        notifier: Arc<dyn Notifier>,
        busy_message: impl Into<String>,
        error_context: impl Into<String>,
    ) -> Self {
        Self {
            busy,
            notifier,
            busy_message: busy_message.into(),
            error_context: error_context.into(),
            durations: NotificationDurations::default(),
        }
    }

    pub fn with_durations(mut self, durations: NotificationDurations) -> Self {
        self.durations = durations;
        self
    }

    /// Run `op` until it succeeds or the user stops retrying
    ///
    /// Each retry calls `op` again from scratch. When the user does not ask
    /// for a retry the error of the last attempt is returned unchanged.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> HubrefResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = HubrefResult<T>>,
    {
        let mut attempt = 1u32;
        loop {
            let guard = BusyGuard::show(self.busy.as_ref(), &self.busy_message);
            let outcome = op().await;
            guard.dismiss();

            let error = match outcome {
                Ok(value) => return Ok(value),
                Err(error) => error,
            };

            tracing::debug!(attempt, error = %error, "attempt failed");
            let notification = Notification::for_error(&error, &self.error_context, self.durations);
            let reason = self.notifier.notify(&notification).await;

            match RetryDecision::from_dismissal(notification.action.as_ref(), reason) {
                RetryDecision::Retry => {
                    attempt += 1;
                    continue;
                }
                RetryDecision::Abandon => {
                    if reason == DismissReason::Action {
                        self.copy_details(notification.action.as_ref());
                    }
                    return Err(error);
                }
            }
        }
    }

    fn copy_details(&self, action: Option<&NotificationAction>) {
        match action {
            Some(NotificationAction::CopyErrorMessage { text }) => {
                self.notifier.copy_to_clipboard("GitHub error", text)
            }
            Some(NotificationAction::CopyStackTrace { text }) => {
                self.notifier.copy_to_clipboard("hubref error", text)
            }
            _ => {}
        }
    }
}
