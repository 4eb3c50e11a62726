//! Configuration types for the Tableau client.
//!
//! Responsibilities:
//! - Re-export authentication and connection types.
//!
//! Does NOT handle:
//! - Loading configuration from the environment (see `loader`).

mod auth;
mod connection;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};
