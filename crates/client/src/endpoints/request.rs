//! Shared request execution for the versioned REST API.
//!
//! Every authenticated endpoint goes through [`send_api_request`]:
//! fixed JSON headers, `X-Tableau-Auth` when a token is present, an optional
//! JSON body, and uniform classification of the outcome.

use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Header carrying the session token.
pub const AUTH_HEADER: &str = "X-Tableau-Auth";

/// Compose `{server_url}/api/{api_version}/{action_path}`.
pub fn api_url(server_url: &str, api_version: &str, action_path: &str) -> String {
    format!("{}/api/{}/{}", server_url, api_version, action_path)
}

/// Send a request to the versioned API and decode the JSON response.
///
/// The auth header is attached only when `auth_token` is `Some`; requests
/// without a token are still sent and left for the server to reject.
///
/// # Errors
///
/// - [`ClientError::Transport`] if no response was received (including timeouts)
/// - [`ClientError::Http`] for any status of 400 or above
/// - [`ClientError::InvalidResponse`] if a non-empty success body is not JSON
pub async fn send_api_request<B>(
    client: &Client,
    method: Method,
    url: &str,
    auth_token: Option<&str>,
    body: Option<&B>,
) -> Result<Value>
where
    B: Serialize + ?Sized,
{
    debug!(
        method = %method,
        url,
        authenticated = auth_token.is_some(),
        "Sending Tableau API request"
    );

    let mut builder = client
        .request(method, url)
        .header(ACCEPT, "application/json")
        .header(CACHE_CONTROL, "no-cache")
        .header(CONTENT_TYPE, "application/json");

    if let Some(token) = auth_token {
        builder = builder.header(AUTH_HEADER, token);
    }
    if let Some(body) = body {
        builder = builder.json(body);
    }

    let response = send(builder).await?;
    let text = response.text().await?;
    decode_json_body(&text)
}

/// Execute a request, turning connection failures and error statuses into errors.
pub(crate) async fn send(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await.map_err(|e| {
        debug!(error = %e, "Request failed before a response was received");
        ClientError::Transport(e.to_string())
    })?;

    let status = response.status();
    if status.as_u16() >= 400 {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());
        debug!(status = status.as_u16(), "Tableau API returned an error status");
        return Err(ClientError::Http {
            status: status.as_u16(),
            body,
        });
    }

    Ok(response)
}

/// Decode a response body; an empty body (e.g. 204 No Content) decodes to `Value::Null`.
pub(crate) fn decode_json_body(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text)
        .map_err(|e| ClientError::InvalidResponse(format!("Response is not valid JSON: {}", e)))
}

/// Convert a decoded body into a typed resource.
pub(crate) fn decode_resource<T: DeserializeOwned>(value: Value, resource: &str) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse {}: {}", resource, e)))
}
