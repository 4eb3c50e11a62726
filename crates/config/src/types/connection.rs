//! Connection configuration types for the Tableau client.
//!
//! Responsibilities:
//! - Define connection settings (server URL, API version, site, timeout).
//! - Define the main `Config` structure combining connection and auth.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - `api_version` and `site_id` fall back to their defaults when absent from serialized input.

use crate::constants::{DEFAULT_API_VERSION, DEFAULT_SITE_ID, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::AuthConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for a Tableau Server site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the Tableau server (e.g., https://tableau.example.com)
    pub server_url: String,
    /// REST API version used in every versioned path.
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Site identifier substituted into `sites/{site_id}/...` paths.
    #[serde(default = "default_site_id")]
    pub site_id: String,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds", default = "default_timeout")]
    pub timeout: Duration,
}

pub(crate) fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

pub(crate) fn default_site_id() -> String {
    DEFAULT_SITE_ID.to_string()
}

pub(crate) fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}

impl ConnectionConfig {
    /// Connection settings for `server_url` with every other field defaulted.
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            api_version: default_api_version(),
            site_id: default_site_id(),
            timeout: default_timeout(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config for a server, admin account and site.
    pub fn new(
        server_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        site_id: impl Into<String>,
    ) -> Self {
        let mut connection = ConnectionConfig::new(server_url);
        connection.site_id = site_id.into();
        Self {
            connection,
            auth: AuthConfig::new(username, password),
        }
    }
}
