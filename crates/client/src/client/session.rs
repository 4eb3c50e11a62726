//! Sign-in and sign-out for [`TableauClient`].
//!
//! # Invariants
//! - `sign_in` replaces the session only after a token has been extracted
//! - `sign_out` clears the session only after the server call succeeded

use secrecy::ExposeSecret;
use tracing::info;

use crate::client::TableauClient;
use crate::endpoints;
use crate::error::Result;

impl TableauClient {
    /// Sign in with the admin credentials and store the session token.
    ///
    /// The request targets the server's default site (empty `contentUrl`)
    /// regardless of [`TableauClient::site_id`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError::AuthFailed`] if the response has no
    /// `credentials.token`; the session is left unchanged.
    pub async fn sign_in(&mut self) -> Result<()> {
        let credentials = self.credentials();
        let token = endpoints::sign_in(
            &self.http,
            &self.server_url,
            &self.api_version,
            self.auth_token(),
            &credentials.username,
            credentials.password.expose_secret(),
        )
        .await?;

        self.session_manager.set_authenticated(token);
        info!(
            user = %self.admin_user(),
            site_luid = self.signed_in_site_luid().unwrap_or_default(),
            "Signed in to Tableau"
        );
        Ok(())
    }

    /// Invalidate the session on the server and drop the local token.
    pub async fn sign_out(&mut self) -> Result<()> {
        endpoints::sign_out(
            &self.http,
            &self.server_url,
            &self.api_version,
            self.auth_token(),
        )
        .await?;

        self.session_manager.clear_session();
        info!(user = %self.admin_user(), "Signed out of Tableau");
        Ok(())
    }
}
