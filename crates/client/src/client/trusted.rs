//! Trusted ticket methods for [`TableauClient`].
//!
//! Tickets do not depend on the REST session; they can be requested before
//! `sign_in` or after `sign_out`.

use secrecy::SecretString;

use crate::client::TableauClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{TicketOutcome, TicketRequest};

impl TableauClient {
    /// Request a trusted ticket for `username` on the default site.
    pub async fn get_new_ticket(&mut self, username: &str) -> Result<TicketOutcome> {
        self.request_ticket(&TicketRequest::new(username)).await
    }

    /// Request a trusted ticket with optional target site and client IP.
    ///
    /// On success the last ticket is replaced by the issued ticket, or
    /// cleared when the server refuses. Errors leave it untouched.
    pub async fn request_ticket(&mut self, request: &TicketRequest) -> Result<TicketOutcome> {
        let outcome = endpoints::request_ticket(&self.http, &self.server_url, request).await?;

        self.last_ticket = outcome
            .ticket()
            .map(|ticket| SecretString::new(ticket.into()));
        Ok(outcome)
    }
}
