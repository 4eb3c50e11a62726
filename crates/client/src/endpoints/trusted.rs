//! Trusted authentication ticket endpoint.
//!
//! This is not part of the versioned REST API: it lives at `{server}/trusted`,
//! takes a form-encoded body, needs no session token and answers in plain text.

use reqwest::Client;
use tracing::{debug, warn};

use crate::endpoints::request::send;
use crate::error::Result;
use crate::models::{TicketOutcome, TicketRequest};

/// Request a trusted ticket for `request.username`.
///
/// A `-1` body is reported as [`TicketOutcome::Refused`], not as an error.
pub async fn request_ticket(
    client: &Client,
    server_url: &str,
    request: &TicketRequest,
) -> Result<TicketOutcome> {
    let url = format!("{}/trusted", server_url);
    debug!(url = %url, username = %request.username, "Requesting trusted ticket");

    let response = send(client.post(&url).form(request)).await?;
    let body = response.text().await?;

    let outcome = TicketOutcome::from_body(body);
    if outcome.is_refused() {
        warn!(
            username = %request.username,
            "Trusted ticket refused; check trusted hosts and the requesting user"
        );
    }
    Ok(outcome)
}
