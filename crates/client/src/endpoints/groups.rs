//! Group and group membership endpoints.

use reqwest::{Client, Method};
use serde_json::Value;

use crate::endpoints::request::{api_url, decode_resource, send_api_request};
use crate::endpoints::{encode_path_segment, site_path};
use crate::error::Result;
use crate::models::{
    CreateGroupRequest, GroupMembershipRequest, GroupResponse, NewGroup, UserIdRef, UserResponse,
};

fn group_path(site_id: &str, group_id: &str, rest: &str) -> String {
    site_path(
        site_id,
        &format!("groups/{}{}", encode_path_segment(group_id), rest),
    )
}

/// Add an existing user to a group.
pub async fn add_user_to_group(
    client: &Client,
    server_url: &str,
    api_version: &str,
    auth_token: Option<&str>,
    site_id: &str,
    user_id: &str,
    group_id: &str,
) -> Result<UserResponse> {
    let url = api_url(
        server_url,
        api_version,
        &group_path(site_id, group_id, "/users"),
    );
    let body = GroupMembershipRequest {
        user: UserIdRef { id: user_id },
    };

    let value = send_api_request(client, Method::POST, &url, auth_token, Some(&body)).await?;
    decode_resource(value, "group membership")
}

/// Remove a user from a group.
pub async fn remove_user_from_group(
    client: &Client,
    server_url: &str,
    api_version: &str,
    auth_token: Option<&str>,
    site_id: &str,
    user_id: &str,
    group_id: &str,
) -> Result<Value> {
    let rest = format!("/users/{}", encode_path_segment(user_id));
    let url = api_url(server_url, api_version, &group_path(site_id, group_id, &rest));
    send_api_request::<()>(client, Method::DELETE, &url, auth_token, None).await
}

/// Create a local group on the site.
pub async fn create_group(
    client: &Client,
    server_url: &str,
    api_version: &str,
    auth_token: Option<&str>,
    site_id: &str,
    name: &str,
) -> Result<GroupResponse> {
    let url = api_url(server_url, api_version, &site_path(site_id, "groups"));
    let body = CreateGroupRequest {
        group: NewGroup { name },
    };

    let value = send_api_request(client, Method::POST, &url, auth_token, Some(&body)).await?;
    decode_resource(value, "group")
}

/// Delete a group from the site.
pub async fn delete_group(
    client: &Client,
    server_url: &str,
    api_version: &str,
    auth_token: Option<&str>,
    site_id: &str,
    group_id: &str,
) -> Result<Value> {
    let url = api_url(server_url, api_version, &group_path(site_id, group_id, ""));
    send_api_request::<()>(client, Method::DELETE, &url, auth_token, None).await
}
