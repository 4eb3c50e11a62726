//! Sign-in and sign-out endpoints.

use reqwest::{Client, Method};
use tracing::debug;

use crate::auth::SessionToken;
use crate::endpoints::request::{api_url, send_api_request};
use crate::error::{ClientError, Result};
use crate::models::{SignInRequest, SignInResponse};

/// Site content URL sent in every sign-in body.
///
/// Sign-in always targets the server's default site; the configured site id
/// is only used to build resource paths afterwards.
pub const DEFAULT_SITE_CONTENT_URL: &str = "";

/// Sign in with admin credentials and return the issued session token.
///
/// `auth_token` is the token currently held by the caller, if any; it is
/// attached like on every other API request.
///
/// # Errors
///
/// Returns [`ClientError::AuthFailed`] if a successful response carries no
/// `credentials.token`, including bodies that are not JSON at all.
pub async fn sign_in(
    client: &Client,
    server_url: &str,
    api_version: &str,
    auth_token: Option<&str>,
    username: &str,
    password: &str,
) -> Result<SessionToken> {
    debug!("Signing in to Tableau as {}", username);

    let url = api_url(server_url, api_version, "auth/signin");
    let body = SignInRequest::new(username, password, DEFAULT_SITE_CONTENT_URL);
    let result = send_api_request(client, Method::POST, &url, auth_token, Some(&body)).await;
    let value = match result {
        Ok(value) => value,
        Err(ClientError::InvalidResponse(_)) => return Err(token_missing()),
        Err(e) => return Err(e),
    };

    let resp: SignInResponse = serde_json::from_value(value).unwrap_or_default();
    let token = resp.token().ok_or_else(token_missing)?.to_string();

    Ok(SessionToken::new(
        token,
        resp.site_luid().map(str::to_string),
        resp.user_luid().map(str::to_string),
    ))
}

fn token_missing() -> ClientError {
    ClientError::AuthFailed("Token is missing".to_string())
}

/// Invalidate the session token on the server.
pub async fn sign_out(
    client: &Client,
    server_url: &str,
    api_version: &str,
    auth_token: Option<&str>,
) -> Result<()> {
    let url = api_url(server_url, api_version, "auth/signout");
    send_api_request::<()>(client, Method::POST, &url, auth_token, None).await?;
    Ok(())
}
