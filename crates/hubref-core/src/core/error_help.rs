use crate::core::error::{ErrorCategory, HubrefError};

/// Human-oriented follow-up for an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorHelp {
    pub suggestions: Vec<String>,
}

impl ErrorHelp {
    pub fn for_error(error: &HubrefError) -> Self {
        let mut suggestions = Vec::new();

        match error {
            HubrefError::Api { status: 401, .. } => {
                suggestions.push("Your session has expired. Run `hubref login` again.".to_string());
            }
            HubrefError::Api { status: 403, .. } => {
                suggestions.push(
                    "The token may lack the required scopes for this repository.".to_string(),
                );
            }
            HubrefError::Api { status: 404, .. } => {
                suggestions.push("Check the spelling of the owner and repository.".to_string());
                suggestions.push("Private repositories require `hubref login` first.".to_string());
            }
            HubrefError::RateLimited { .. } => {
                suggestions.push(
                    "Set GITHUB_TOKEN or run `hubref login` to raise the limit to 5000/hour."
                        .to_string(),
                );
            }
            HubrefError::Config(_) | HubrefError::Yaml(_) => {
                suggestions.push(
                    "Check ~/.config/hubref/config.yaml (or delete it to restore defaults)."
                        .to_string(),
                );
            }
            HubrefError::Credential(_) => {
                suggestions.push(
                    "The OS keychain is unavailable; set GITHUB_TOKEN instead.".to_string(),
                );
            }
            _ => {}
        }

        if error.category() == ErrorCategory::Network {
            suggestions.push("Check your network connection and try again.".to_string());
        }

        Self { suggestions }
    }
}

/// Render an error followed by its suggestions, one per line
pub fn format_error_with_help(error: &HubrefError) -> String {
    let help = ErrorHelp::for_error(error);
    let mut out = format!("Error: {}", error);
    for suggestion in &help.suggestions {
        out.push_str("\n  help: ");
        out.push_str(suggestion);
    }
    out
}
