//! Admin credentials and session state.

use secrecy::{ExposeSecret, SecretString};

/// Admin credentials used for REST API sign-in.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: SecretString,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password.into().into()),
        }
    }
}

/// Token issued by a successful sign-in.
#[derive(Debug, Clone)]
pub struct SessionToken {
    value: SecretString,
    site_luid: Option<String>,
    user_luid: Option<String>,
}

impl SessionToken {
    pub fn new(value: String, site_luid: Option<String>, user_luid: Option<String>) -> Self {
        Self {
            value: SecretString::new(value.into()),
            site_luid,
            user_luid,
        }
    }
}

/// Whether the client currently holds a session token.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated(SessionToken),
}

/// Owns the admin credentials and the current session state.
#[derive(Debug)]
pub struct SessionManager {
    credentials: AdminCredentials,
    state: SessionState,
}

impl SessionManager {
    /// Create an unauthenticated session manager.
    pub fn new(credentials: AdminCredentials) -> Self {
        Self {
            credentials,
            state: SessionState::Unauthenticated,
        }
    }

    pub fn credentials(&self) -> &AdminCredentials {
        &self.credentials
    }

    pub fn set_username(&mut self, username: String) {
        self.credentials.username = username;
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// The value for the `X-Tableau-Auth` header, if signed in.
    pub fn bearer_token(&self) -> Option<&str> {
        match &self.state {
            SessionState::Authenticated(token) => Some(token.value.expose_secret()),
            SessionState::Unauthenticated => None,
        }
    }

    /// Site LUID reported by the server at sign-in.
    pub fn site_luid(&self) -> Option<&str> {
        match &self.state {
            SessionState::Authenticated(token) => token.site_luid.as_deref(),
            SessionState::Unauthenticated => None,
        }
    }

    /// User LUID of the signed-in admin reported by the server at sign-in.
    pub fn user_luid(&self) -> Option<&str> {
        match &self.state {
            SessionState::Authenticated(token) => token.user_luid.as_deref(),
            SessionState::Unauthenticated => None,
        }
    }

    /// Replace the current state with an authenticated session.
    pub fn set_authenticated(&mut self, token: SessionToken) {
        self.state = SessionState::Authenticated(token);
    }

    /// Drop the current session token.
    pub fn clear_session(&mut self) {
        self.state = SessionState::Unauthenticated;
    }
}
