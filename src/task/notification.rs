//! Error notifications shown by the retry wrapper

use crate::core::{ErrorCategory, HubrefError};
use std::error::Error as _;
use std::time::Duration;

/// Action attached to a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationAction {
    /// Run the failed operation again
    Retry,
    /// Copy the server-provided error message
    CopyErrorMessage { text: String },
    /// Copy the full error chain for a bug report
    CopyStackTrace { text: String },
}

impl NotificationAction {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationAction::Retry => "Retry",
            NotificationAction::CopyErrorMessage { .. } => "Copy error",
            NotificationAction::CopyStackTrace { .. } => "Copy stack trace",
        }
    }
}

/// Why a notification went away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The user invoked the notification's action
    Action,
    /// The user dismissed it without acting
    Swipe,
    /// Nobody reacted before its duration ran out
    Timeout,
}

/// A transient, dismissible message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub action: Option<NotificationAction>,
    pub duration: Duration,
}

/// Display durations per error category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationDurations {
    pub network: Duration,
    pub long: Duration,
}

impl Default for NotificationDurations {
    fn default() -> Self {
        Self {
            network: Duration::from_millis(2750),
            long: Duration::from_millis(8000),
        }
    }
}

impl Notification {
    /// Build the notification for a failed operation
    ///
    /// `context` describes what was being attempted, e.g.
    /// "Could not resolve the link".
    pub fn for_error(error: &HubrefError, context: &str, durations: NotificationDurations) -> Self {
        match error.category() {
            ErrorCategory::Network => Self {
                message: format!("{}: network error, check your connection", context),
                action: Some(NotificationAction::Retry),
                duration: durations.network,
            },
            ErrorCategory::Api => {
                let detail = error.api_detail().unwrap_or_else(|| error.to_string());
                Self {
                    message: format!("{}: GitHub reported an error: {}", context, detail),
                    action: Some(NotificationAction::CopyErrorMessage { text: detail }),
                    duration: durations.long,
                }
            }
            ErrorCategory::Application => Self {
                message: format!("{}: an application error occurred", context),
                action: Some(NotificationAction::CopyStackTrace {
                    text: error_chain(error),
                }),
                duration: durations.long,
            },
        }
    }
}

/// The error followed by each of its sources, one per line
pub fn error_chain(error: &HubrefError) -> String {
    let mut text = format!("{:?}", error);
    let mut source = error.source();
    while let Some(cause) = source {
        text.push_str("\ncaused by: ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
