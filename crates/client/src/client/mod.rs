//! Main Tableau REST API client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Sign-in and sign-out
//! - `users`: User provisioning
//! - `groups`: Groups and group membership
//! - `trusted`: Trusted authentication tickets
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Session token storage (delegated to [`crate::auth::SessionManager`])
//!
//! # Invariants
//! - `auth_token()` is `Some` iff the latest successful `sign_in` has not been
//!   followed by a successful `sign_out`.
//! - Operations other than `sign_in` do not require a session: without one they
//!   are sent without `X-Tableau-Auth` and the server decides.
//! - A failed call never changes the session or the last ticket.

pub mod builder;
mod groups;
mod session;
mod trusted;
mod users;

use secrecy::{ExposeSecret, SecretString};

use crate::auth::{AdminCredentials, SessionManager};
use crate::error::Result;

/// Tableau REST API client bound to one server and site.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use tableau_client::TableauClient;
///
/// let mut client = TableauClient::new(
///     "https://tableau.example.com",
///     "admin",
///     "password",
///     "mysite",
/// )?;
/// client.sign_in().await?;
/// let user = client.add_user("alice", "Viewer").await?;
/// client.sign_out().await?;
/// ```
#[derive(Debug)]
pub struct TableauClient {
    pub(crate) http: reqwest::Client,
    pub(crate) server_url: String,
    pub(crate) api_version: String,
    pub(crate) site_id: String,
    pub(crate) session_manager: SessionManager,
    pub(crate) last_ticket: Option<SecretString>,
}

impl TableauClient {
    /// Create a client with the default API version and timeout.
    ///
    /// No network call is made.
    pub fn new(
        server_url: impl Into<String>,
        admin_user: impl Into<String>,
        admin_password: impl Into<String>,
        site_id: impl Into<String>,
    ) -> Result<Self> {
        Self::builder()
            .server_url(server_url)
            .admin_user(admin_user)
            .admin_password(admin_password)
            .site_id(site_id)
            .build()
    }

    /// Create a new client builder.
    pub fn builder() -> builder::TableauClientBuilder {
        builder::TableauClientBuilder::new()
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Point the client at another server. Trailing slashes are removed.
    pub fn set_server_url(&mut self, url: impl Into<String>) {
        self.server_url = builder::normalize_server_url(url.into());
    }

    pub fn admin_user(&self) -> &str {
        &self.session_manager.credentials().username
    }

    pub fn set_admin_user(&mut self, user: impl Into<String>) {
        self.session_manager.set_username(user.into());
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn set_api_version(&mut self, version: impl Into<String>) {
        self.api_version = version.into();
    }

    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    pub fn set_site_id(&mut self, site_id: impl Into<String>) {
        self.site_id = site_id.into();
    }

    /// The current session token, if signed in.
    pub fn auth_token(&self) -> Option<&str> {
        self.session_manager.bearer_token()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session_manager.is_authenticated()
    }

    /// Site LUID reported by the last successful sign-in.
    pub fn signed_in_site_luid(&self) -> Option<&str> {
        self.session_manager.site_luid()
    }

    /// User LUID of the admin reported by the last successful sign-in.
    pub fn signed_in_user_id(&self) -> Option<&str> {
        self.session_manager.user_luid()
    }

    /// The ticket issued by the most recent trusted ticket request.
    pub fn last_ticket(&self) -> Option<&str> {
        self.last_ticket.as_ref().map(|t| t.expose_secret())
    }

    pub(crate) fn credentials(&self) -> &AdminCredentials {
        self.session_manager.credentials()
    }
}
