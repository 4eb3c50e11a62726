//! Client builder for constructing [`TableauClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (server_url, admin credentials)
//! - Normalizing the server URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirect policy)
//!
//! # Invariants
//! - `server_url`, `admin_user` and `admin_password` must be provided before calling `build()`
//! - The server URL is always normalized to have no trailing slashes
//! - Building never performs network I/O

use std::time::Duration;

use secrecy::SecretString;
use tableau_config::Config;
use tableau_config::constants::{
    DEFAULT_API_VERSION, DEFAULT_MAX_REDIRECTS, DEFAULT_SITE_ID, DEFAULT_TIMEOUT_SECS,
};

use crate::auth::{AdminCredentials, SessionManager};
use crate::client::TableauClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`TableauClient`].
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use tableau_client::TableauClient;
///
/// let client = TableauClient::builder()
///     .server_url("https://tableau.example.com")
///     .admin_user("admin")
///     .admin_password("password")
///     .site_id("mysite")
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct TableauClientBuilder {
    server_url: Option<String>,
    admin_user: Option<String>,
    admin_password: Option<SecretString>,
    site_id: String,
    api_version: String,
    timeout: Duration,
}

impl Default for TableauClientBuilder {
    fn default() -> Self {
        Self {
            server_url: None,
            admin_user: None,
            admin_password: None,
            site_id: DEFAULT_SITE_ID.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl TableauClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Tableau server, e.g. `https://tableau.example.com`.
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    pub fn admin_user(mut self, user: impl Into<String>) -> Self {
        self.admin_user = Some(user.into());
        self
    }

    pub fn admin_password(mut self, password: impl Into<String>) -> Self {
        self.admin_password = Some(SecretString::new(password.into().into()));
        self
    }

    /// Set the site used in `sites/{site_id}/...` paths. Defaults to `""`.
    pub fn site_id(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = site_id.into();
        self
    }

    /// Set the REST API version. Defaults to `2.5`.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.server_url = Some(config.connection.server_url.clone());
        self.admin_user = Some(config.auth.username.clone());
        self.admin_password = Some(config.auth.password.clone());
        self.site_id = config.connection.site_id.clone();
        self.api_version = config.connection.api_version.clone();
        self.timeout = config.connection.timeout;
        self
    }

    /// Build the [`TableauClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `server_url` is missing or blank.
    /// Returns [`ClientError::AuthFailed`] if the admin user or password is missing.
    /// Returns [`ClientError::Transport`] if the HTTP client fails to build.
    pub fn build(self) -> Result<TableauClient> {
        let server_url = self
            .server_url
            .map(normalize_server_url)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ClientError::InvalidUrl("server_url is required".to_string()))?;

        let username = self
            .admin_user
            .ok_or_else(|| ClientError::AuthFailed("admin_user is required".to_string()))?;
        let password = self
            .admin_password
            .ok_or_else(|| ClientError::AuthFailed("admin_password is required".to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        Ok(TableauClient {
            http,
            server_url,
            api_version: self.api_version,
            site_id: self.site_id,
            session_manager: SessionManager::new(AdminCredentials { username, password }),
            last_ticket: None,
        })
    }
}

/// Trim whitespace and trailing slashes so paths can be appended with `/`.
pub(crate) fn normalize_server_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}
