//! Tableau REST API client.
//!
//! This crate provides a typed async client for the Tableau Server REST API
//! and the trusted authentication endpoint. It signs in with admin
//! credentials, provisions users and groups on one site, and requests
//! trusted tickets.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod logging;
pub mod models;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::{AdminCredentials, SessionManager, SessionState, SessionToken};
pub use client::TableauClient;
pub use client::builder::TableauClientBuilder;
pub use error::{ClientError, Result};
pub use logging::{LogFormat, init_logging};
pub use models::{
    AddUserRequest, CreateGroupRequest, GroupMembershipRequest, GroupResponse, NewGroup, NewUser,
    SignInRequest, SignInResponse, TICKET_REFUSED_SENTINEL, TableauGroup, TableauUser,
    TicketOutcome, TicketRequest, UserIdRef, UserResponse,
};
