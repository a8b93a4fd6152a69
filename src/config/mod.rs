use crate::core::path::{config_file, ensure_dir};
use crate::core::{HubrefError, HubrefResult};
use crate::di::ConfigProvider;
use crate::github::MAX_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Overrides `api_url`
pub const API_URL_ENV: &str = "HUBREF_API_URL";
/// Overrides `token`
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the REST API (GitHub Enterprise uses `https://host/api/v3`)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Personal access token; the OS keychain entry from `hubref login` is
    /// used when this is unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Items per list page, capped at the API maximum of 100
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// How long network errors stay on screen
    #[serde(default = "default_network_error_timeout_ms")]
    pub network_error_timeout_ms: u64,

    /// How long API and application errors stay on screen
    #[serde(default = "default_api_error_timeout_ms")]
    pub api_error_timeout_ms: u64,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_per_page() -> u32 {
    MAX_PAGE_SIZE
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_network_error_timeout_ms() -> u64 {
    2750
}

fn default_api_error_timeout_ms() -> u64 {
    8000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: None,
            per_page: default_per_page(),
            request_timeout_secs: default_request_timeout_secs(),
            network_error_timeout_ms: default_network_error_timeout_ms(),
            api_error_timeout_ms: default_api_error_timeout_ms(),
        }
    }
}

impl Config {
    /// Load config from platform-specific config directory, creating default if it doesn't exist
    ///
    /// Config locations:
    /// - Windows: %APPDATA%\hubref\config.yaml
    /// - Linux: ~/.config/hubref/config.yaml
    /// - macOS: ~/Library/Application Support/hubref/config.yaml
    ///
    /// `HUBREF_API_URL` and `GITHUB_TOKEN` take precedence over the file.
    pub fn load() -> HubrefResult<Self> {
        let mut config = Self::load_from(&config_file()?)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load config from `path`, writing the defaults there if it doesn't exist
    pub fn load_from(path: &Path) -> HubrefResult<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| HubrefError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save config to platform-specific config directory
    pub fn save(&self) -> HubrefResult<()> {
        self.save_to(&config_file()?)
    }

    pub fn save_to(&self, path: &Path) -> HubrefResult<()> {
        let config_dir = path
            .parent()
            .ok_or_else(|| HubrefError::Path("Invalid config path".to_string()))?;

        ensure_dir(config_dir)?;

        let content = serde_yaml::to_string(self)
            .map_err(|e| HubrefError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Some(api_url) = non_empty_env(API_URL_ENV) {
            self.api_url = api_url;
        }
        if let Some(token) = non_empty_env(TOKEN_ENV) {
            self.token = Some(token);
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

// Implement ConfigProvider trait
impl ConfigProvider for Config {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn per_page(&self) -> u32 {
        self.per_page.clamp(1, MAX_PAGE_SIZE)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn network_error_timeout(&self) -> Duration {
        Duration::from_millis(self.network_error_timeout_ms)
    }

    fn api_error_timeout(&self) -> Duration {
        Duration::from_millis(self.api_error_timeout_ms)
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
