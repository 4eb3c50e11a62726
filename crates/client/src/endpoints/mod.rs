//! REST API endpoint implementations.
//!
//! Each function performs exactly one HTTP call. Session state lives in
//! [`crate::TableauClient`]; these functions only receive the token to send.

mod auth;
mod groups;
pub mod request;
mod trusted;
pub mod url_encoding;
mod users;

pub use auth::{DEFAULT_SITE_CONTENT_URL, sign_in, sign_out};
pub use groups::{add_user_to_group, create_group, delete_group, remove_user_from_group};
pub use request::{AUTH_HEADER, api_url, send_api_request};
pub use trusted::request_ticket;
pub use url_encoding::encode_path_segment;
pub use users::{add_user, remove_user};

/// Action path for a resource scoped to a site: `sites/{site_id}/{rest}`.
pub(crate) fn site_path(site_id: &str, rest: &str) -> String {
    format!("sites/{}/{}", encode_path_segment(site_id), rest)
}
