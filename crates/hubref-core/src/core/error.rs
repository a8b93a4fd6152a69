use thiserror::Error;

pub type HubrefResult<T> = Result<T, HubrefError>;

#[derive(Error, Debug)]
pub enum HubrefError {
    /// The request never produced an HTTP status (connect, TLS, timeout, body read).
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The server answered with a non-2xx status.
    #[error("GitHub API error: HTTP {status}{}", body_suffix(.body))]
    Api { status: u16, body: Option<String> },

    #[error("GitHub API rate limit exceeded. Reset in {reset_in_secs} seconds")]
    RateLimited { reset_in_secs: u64 },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Application error: {0}")]
    Application(String),
}

fn body_suffix(body: &Option<String>) -> String {
    match body.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => format!(": {}", text),
        _ => String::new(),
    }
}

/// Coarse grouping used when an error has to be shown to a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Application,
}

impl HubrefError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HubrefError::Transport(_) | HubrefError::Io(_) => ErrorCategory::Network,
            HubrefError::Api { .. } | HubrefError::RateLimited { .. } => ErrorCategory::Api,
            _ => ErrorCategory::Application,
        }
    }

    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            HubrefError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided detail for API errors.
    ///
    /// GitHub error bodies are JSON objects with a `message` field; when the
    /// body parses that way only the message is returned.
    pub fn api_detail(&self) -> Option<String> {
        match self {
            HubrefError::Api { status, body } => {
                let detail = body
                    .as_deref()
                    .and_then(|raw| serde_json::from_str::<serde_json::Value>(raw).ok())
                    .and_then(|value| value.get("message")?.as_str().map(str::to_string))
                    .or_else(|| body.clone().filter(|b| !b.trim().is_empty()));
                Some(detail.unwrap_or_else(|| format!("HTTP {}", status)))
            }
            HubrefError::RateLimited { .. } => Some(self.to_string()),
            _ => None,
        }
    }
}
