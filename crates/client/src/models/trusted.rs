//! Trusted authentication ticket bodies.

use serde::Serialize;

/// Body the trusted endpoint returns when it refuses to issue a ticket.
pub const TICKET_REFUSED_SENTINEL: &str = "-1";

/// Form fields of `POST {server}/trusted`.
#[derive(Debug, Clone, Serialize)]
pub struct TicketRequest {
    pub username: String,
    /// Content URL of the site the ticket is valid for; omitted for the default site.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_site: Option<String>,
    /// Client IP the ticket is bound to, when the server enforces client IP matching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
}

impl TicketRequest {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            target_site: None,
            client_ip: None,
        }
    }

    pub fn target_site(mut self, site: impl Into<String>) -> Self {
        self.target_site = Some(site.into());
        self
    }

    pub fn client_ip(mut self, ip: impl Into<String>) -> Self {
        self.client_ip = Some(ip.into());
        self
    }
}

/// Result of a trusted ticket request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketOutcome {
    /// The raw ticket string returned by the server.
    Issued(String),
    /// The server answered with the `-1` sentinel.
    Refused,
}

impl TicketOutcome {
    /// Classify a raw response body from the trusted endpoint.
    pub fn from_body(body: String) -> Self {
        if body == TICKET_REFUSED_SENTINEL {
            Self::Refused
        } else {
            Self::Issued(body)
        }
    }

    pub fn ticket(&self) -> Option<&str> {
        match self {
            Self::Issued(ticket) => Some(ticket),
            Self::Refused => None,
        }
    }

    pub fn is_refused(&self) -> bool {
        matches!(self, Self::Refused)
    }
}
