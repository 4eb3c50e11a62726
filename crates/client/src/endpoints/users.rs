//! User provisioning endpoints.

use reqwest::{Client, Method};
use serde_json::Value;

use crate::endpoints::request::{api_url, decode_resource, send_api_request};
use crate::endpoints::{encode_path_segment, site_path};
use crate::error::Result;
use crate::models::{AddUserRequest, NewUser, UserResponse};

/// Add a user to the site with the given site role.
pub async fn add_user(
    client: &Client,
    server_url: &str,
    api_version: &str,
    auth_token: Option<&str>,
    site_id: &str,
    username: &str,
    site_role: &str,
) -> Result<UserResponse> {
    let url = api_url(server_url, api_version, &site_path(site_id, "users"));
    let body = AddUserRequest {
        user: NewUser {
            name: username,
            site_role,
        },
    };

    let value = send_api_request(client, Method::POST, &url, auth_token, Some(&body)).await?;
    decode_resource(value, "user")
}

/// Remove a user from the site.
///
/// Returns the decoded body, which is `Value::Null` for the usual empty response.
pub async fn remove_user(
    client: &Client,
    server_url: &str,
    api_version: &str,
    auth_token: Option<&str>,
    site_id: &str,
    user_id: &str,
) -> Result<Value> {
    let path = site_path(site_id, &format!("users/{}", encode_path_segment(user_id)));
    let url = api_url(server_url, api_version, &path);
    send_api_request::<()>(client, Method::DELETE, &url, auth_token, None).await
}
