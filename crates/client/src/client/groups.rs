//! Group methods for [`TableauClient`].

use serde_json::Value;

use crate::client::TableauClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{GroupResponse, UserResponse};

impl TableauClient {
    /// Add an existing user to a group.
    pub async fn add_user_to_group(&self, user_id: &str, group_id: &str) -> Result<UserResponse> {
        endpoints::add_user_to_group(
            &self.http,
            &self.server_url,
            &self.api_version,
            self.auth_token(),
            &self.site_id,
            user_id,
            group_id,
        )
        .await
    }

    pub async fn remove_user_from_group(&self, user_id: &str, group_id: &str) -> Result<Value> {
        endpoints::remove_user_from_group(
            &self.http,
            &self.server_url,
            &self.api_version,
            self.auth_token(),
            &self.site_id,
            user_id,
            group_id,
        )
        .await
    }

    /// Create a local group; the returned group carries the new group id.
    pub async fn create_group(&self, name: &str) -> Result<GroupResponse> {
        endpoints::create_group(
            &self.http,
            &self.server_url,
            &self.api_version,
            self.auth_token(),
            &self.site_id,
            name,
        )
        .await
    }

    pub async fn delete_group(&self, group_id: &str) -> Result<Value> {
        endpoints::delete_group(
            &self.http,
            &self.server_url,
            &self.api_version,
            self.auth_token(),
            &self.site_id,
            group_id,
        )
        .await
    }
}
