//! Typed request and response bodies for the Tableau REST API.
//!
//! Request bodies borrow from the caller; response bodies keep any field
//! they do not model in a flattened `extra` map.

mod auth;
mod groups;
mod trusted;
mod users;

pub use auth::{
    SignInCredentials, SignInRequest, SignInRequestCredentials, SignInResponse, SignInSite,
    SignInUser, SiteContentUrl,
};
pub use groups::{CreateGroupRequest, GroupResponse, NewGroup, TableauGroup};
pub use trusted::{TICKET_REFUSED_SENTINEL, TicketOutcome, TicketRequest};
pub use users::{
    AddUserRequest, GroupMembershipRequest, NewUser, TableauUser, UserIdRef, UserResponse,
};
