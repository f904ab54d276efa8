//! Client configuration
//!
//! Where the records endpoint lives and how the transport behaves. Loadable
//! from YAML; every field has a default so an empty document is valid.
//!
//! ```yaml
//! base_url: http://localhost:3000
//! records_path: /records
//! http:
//!   timeout_secs: 10
//!   max_retries: 0
//!   rate_limit:
//!     requests_per_second: 5
//!     burst_size: 5
//! ```

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordsConfig {
    /// Scheme, host and optional path prefix of the API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the records listing, relative to `base_url`
    #[serde(default = "default_records_path")]
    pub records_path: String,

    /// Transport settings
    #[serde(default)]
    pub http: HttpConfig,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_records_path() -> String {
    "/records".to_string()
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            records_path: default_records_path(),
            http: HttpConfig::default(),
        }
    }
}

impl RecordsConfig {
    /// Parse a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Replace the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Check values serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::invalid_config("base_url", "must not be empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(Error::invalid_config("http.timeout_secs", "must be positive"));
        }
        if self.http.initial_backoff_ms > self.http.max_backoff_ms {
            return Err(Error::invalid_config(
                "http.initial_backoff_ms",
                "must not exceed http.max_backoff_ms",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// HTTP Config
// ============================================================================

/// Transport settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retries on transient failures; 0 sends each request once
    #[serde(default)]
    pub max_retries: u32,

    /// Backoff between retries
    #[serde(default)]
    pub backoff: BackoffType,

    /// First backoff delay in milliseconds
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// Backoff ceiling in milliseconds
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,

    /// Optional client-side rate limit
    #[serde(default)]
    pub rate_limit: Option<RateLimiterConfig>,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_initial_backoff_ms() -> u64 {
    100
}

fn default_max_backoff_ms() -> u64 {
    10_000
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_retries: 0,
            backoff: BackoffType::default(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
            rate_limit: None,
            user_agent: None,
        }
    }
}

impl HttpConfig {
    /// Build the transport configuration
    pub fn to_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .max_retries(self.max_retries)
            .backoff(
                self.backoff,
                Duration::from_millis(self.initial_backoff_ms),
                Duration::from_millis(self.max_backoff_ms),
            );

        builder = match &self.rate_limit {
            Some(limit) => builder.rate_limit(limit.clone()),
            None => builder.no_rate_limit(),
        };

        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }

        builder.build()
    }
}
