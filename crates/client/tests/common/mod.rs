//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients built here point at a wiremock server and use API version 2.5
//!
//! # What this does NOT handle
//! - Mock setup for individual endpoints (use wiremock directly in tests)

use std::time::Duration;

#[allow(unused_imports)]
pub use tableau_client::testing::load_fixture;

#[allow(unused_imports)]
pub use tableau_client::{ClientError, TableauClient, TicketOutcome};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use wiremock::matchers::{method, path};

#[allow(dead_code)]
pub const AUTH_HEADER: &str = "X-Tableau-Auth";
#[allow(dead_code)]
pub const SIGNIN_PATH: &str = "/api/2.5/auth/signin";

/// A client for `mock_server` that has not signed in.
#[allow(dead_code)]
pub fn client_for(mock_server: &MockServer, site_id: &str) -> TableauClient {
    TableauClient::builder()
        .server_url(mock_server.uri())
        .admin_user("admin")
        .admin_password("pw")
        .site_id(site_id)
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build")
}

/// Mount a sign-in mock returning `token` and sign a fresh client in.
#[allow(dead_code)]
pub async fn signed_in_client(
    mock_server: &MockServer,
    site_id: &str,
    token: &str,
) -> TableauClient {
    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "credentials": { "token": token, "site": { "id": "site-luid" } }
        })))
        .mount(mock_server)
        .await;

    let mut client = client_for(mock_server, site_id);
    client.sign_in().await.expect("sign in should succeed");
    client
}

/// Requests received by `mock_server` whose path ends with `suffix`.
#[allow(dead_code)]
pub async fn requests_to(mock_server: &MockServer, suffix: &str) -> Vec<wiremock::Request> {
    mock_server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|req| req.url.path().ends_with(suffix))
        .collect()
}
