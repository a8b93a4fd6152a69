//! Retryable background tasks
//!
//! [`RetryableTask`] wraps one unit of async work with a busy indicator and
//! turns failures into notifications. Network failures offer a retry; API
//! and application failures offer to copy the error details.

pub mod busy;
pub mod notification;
pub mod retry;

pub use busy::BusyGuard;
pub use notification::{DismissReason, Notification, NotificationAction, NotificationDurations};
pub use retry::{RetryDecision, RetryableTask};
