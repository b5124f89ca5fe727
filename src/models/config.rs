//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client and page rendering settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Poll target and pacing settings
    #[serde(default)]
    pub monitor: MonitorConfig,

    /// Webhook presentation settings
    #[serde(default)]
    pub webhook: WebhookConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.http.render_wait_secs == 0 {
            return Err(AppError::validation("http.render_wait_secs must be > 0"));
        }
        if self.monitor.poll_interval_secs == 0 {
            return Err(AppError::validation("monitor.poll_interval_secs must be > 0"));
        }
        if Url::parse(&self.monitor.base_url).is_err() {
            return Err(AppError::validation(format!(
                "monitor.base_url is not a valid URL: {}",
                self.monitor.base_url
            )));
        }
        if self.webhook.username.trim().is_empty() {
            return Err(AppError::validation("webhook.username is empty"));
        }
        Ok(())
    }
}

/// HTTP client and page rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Settle window between navigation and content capture, in seconds.
    /// The catalog populates seat data with client-side API calls after
    /// the page itself loads.
    #[serde(default = "defaults::render_wait")]
    pub render_wait_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            render_wait_secs: defaults::render_wait(),
        }
    }
}

/// Poll target and pacing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Class list endpoint queried each cycle
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Seconds between poll cycles (the CLI --sleep-time flag overrides)
    #[serde(default = "defaults::poll_interval")]
    pub poll_interval_secs: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            poll_interval_secs: defaults::poll_interval(),
        }
    }
}

/// Webhook presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Display name attached to delivered messages
    #[serde(default = "defaults::webhook_username")]
    pub username: String,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            username: defaults::webhook_username(),
        }
    }
}

mod defaults {
    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; redtail/1.0)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn render_wait() -> u64 {
        5
    }

    // Monitor defaults
    pub fn base_url() -> String {
        "https://catalog.apps.asu.edu/catalog/classes/classlist".into()
    }
    pub fn poll_interval() -> u64 {
        10
    }

    // Webhook defaults
    pub fn webhook_username() -> String {
        "RedTail - Seat Monitor".into()
    }
}
