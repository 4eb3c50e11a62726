//! User resource bodies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST sites/{site}/users`.
#[derive(Debug, Serialize)]
pub struct AddUserRequest<'a> {
    pub user: NewUser<'a>,
}

#[derive(Debug, Serialize)]
pub struct NewUser<'a> {
    pub name: &'a str,
    #[serde(rename = "siteRole")]
    pub site_role: &'a str,
}

/// Body of `POST sites/{site}/groups/{group}/users`.
#[derive(Debug, Serialize)]
pub struct GroupMembershipRequest<'a> {
    pub user: UserIdRef<'a>,
}

#[derive(Debug, Serialize)]
pub struct UserIdRef<'a> {
    pub id: &'a str,
}

/// Response wrapping a single user resource.
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub user: TableauUser,
}

/// A Tableau user as returned by the users and group membership endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct TableauUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "siteRole", default)]
    pub site_role: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
