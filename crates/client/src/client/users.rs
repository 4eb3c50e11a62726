//! User provisioning methods for [`TableauClient`].

use serde_json::Value;

use crate::client::TableauClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::UserResponse;

impl TableauClient {
    /// Add a user to the configured site, e.g. `add_user("alice", "Viewer")`.
    pub async fn add_user(&self, username: &str, site_role: &str) -> Result<UserResponse> {
        endpoints::add_user(
            &self.http,
            &self.server_url,
            &self.api_version,
            self.auth_token(),
            &self.site_id,
            username,
            site_role,
        )
        .await
    }

    /// Remove a user from the configured site.
    pub async fn remove_user(&self, user_id: &str) -> Result<Value> {
        endpoints::remove_user(
            &self.http,
            &self.server_url,
            &self.api_version,
            self.auth_token(),
            &self.site_id,
            user_id,
        )
        .await
    }
}
