//! HTTP outcome classification
//!
//! Two modes cover the two kinds of call sites:
//! - strict: any non-2xx status is an `HubrefError::Api`
//! - presence: 2xx is `true`, 404 is `false`, anything else is an error
//!
//! In both modes a 401 first invalidates the session through the injected
//! [`SessionGuard`].

use crate::core::{HubrefError, HubrefResult};
use crate::di::traits::SessionGuard;
use crate::github::types::ApiResponse;
use std::sync::Arc;

pub const HTTP_UNAUTHORIZED: u16 = 401;
pub const HTTP_NOT_FOUND: u16 = 404;

/// Translates API responses into results, guarding the session on 401
#[derive(Clone)]
pub struct ErrorClassifier {
    session: Arc<dyn SessionGuard>,
}

impl ErrorClassifier {
    pub fn new(session: Arc<dyn SessionGuard>) -> Self {
        Self { session }
    }

    /// Strict mode: the value on 2xx, `HubrefError::Api` otherwise
    pub fn strict<T>(&self, response: ApiResponse<T>) -> HubrefResult<T> {
        match response {
            ApiResponse::Success { value, .. } => Ok(value),
            ApiResponse::Failure { status, body } => {
                self.guard_session(status);
                Err(HubrefError::Api { status, body })
            }
        }
    }

    /// Strict mode for endpoints without a meaningful body
    pub fn map_to_true_on_success<T>(&self, response: ApiResponse<T>) -> HubrefResult<bool> {
        self.strict(response).map(|_| true)
    }

    /// Presence mode: `true` on 2xx, `false` on 404
    pub fn presence<T>(&self, response: ApiResponse<T>) -> HubrefResult<bool> {
        map_failure_to_value(self.map_to_true_on_success(response), HTTP_NOT_FOUND, false)
    }

    fn guard_session(&self, status: u16) {
        if status == HTTP_UNAUTHORIZED {
            tracing::warn!("GitHub rejected the credentials (HTTP 401), invalidating session");
            self.session.invalidate_session();
        }
    }
}

/// Replace an API failure with `status` by `value`; other results pass through
pub fn map_failure_to_value<T>(result: HubrefResult<T>, status: u16, value: T) -> HubrefResult<T> {
    match result {
        Err(HubrefError::Api { status: actual, .. }) if actual == status => Ok(value),
        other => other,
    }
}
