//! Sign-in request and response bodies.

use serde::{Deserialize, Serialize};

/// Body of `POST auth/signin`.
#[derive(Debug, Serialize)]
pub struct SignInRequest<'a> {
    pub credentials: SignInRequestCredentials<'a>,
}

#[derive(Debug, Serialize)]
pub struct SignInRequestCredentials<'a> {
    pub name: &'a str,
    pub password: &'a str,
    pub site: SiteContentUrl<'a>,
}

#[derive(Debug, Serialize)]
pub struct SiteContentUrl<'a> {
    #[serde(rename = "contentUrl")]
    pub content_url: &'a str,
}

impl<'a> SignInRequest<'a> {
    /// Sign-in body targeting the site with the given content URL.
    pub fn new(name: &'a str, password: &'a str, content_url: &'a str) -> Self {
        Self {
            credentials: SignInRequestCredentials {
                name,
                password,
                site: SiteContentUrl { content_url },
            },
        }
    }
}

/// Body returned by `POST auth/signin`.
///
/// Every field is optional so that a response missing the token surfaces as
/// an authentication failure rather than a decode error.
#[derive(Debug, Default, Deserialize)]
pub struct SignInResponse {
    #[serde(default)]
    pub credentials: Option<SignInCredentials>,
}

#[derive(Debug, Deserialize)]
pub struct SignInCredentials {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub site: Option<SignInSite>,
    #[serde(default)]
    pub user: Option<SignInUser>,
}

#[derive(Debug, Deserialize)]
pub struct SignInSite {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "contentUrl", default)]
    pub content_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SignInUser {
    #[serde(default)]
    pub id: Option<String>,
}

impl SignInResponse {
    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref()?.token.as_deref()
    }

    pub fn site_luid(&self) -> Option<&str> {
        self.credentials.as_ref()?.site.as_ref()?.id.as_deref()
    }

    pub fn user_luid(&self) -> Option<&str> {
        self.credentials.as_ref()?.user.as_ref()?.id.as_deref()
    }
}
