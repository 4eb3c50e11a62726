//! Group resource bodies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST sites/{site}/groups`.
#[derive(Debug, Serialize)]
pub struct CreateGroupRequest<'a> {
    pub group: NewGroup<'a>,
}

#[derive(Debug, Serialize)]
pub struct NewGroup<'a> {
    pub name: &'a str,
}

/// Response wrapping a single group resource.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupResponse {
    pub group: TableauGroup,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableauGroup {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
