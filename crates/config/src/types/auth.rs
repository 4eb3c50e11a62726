//! Authentication types for Tableau client configuration.
//!
//! Responsibilities:
//! - Define the admin credentials used for REST API sign-in.
//! - Handle serialization of secret values.
//!
//! Does NOT handle:
//! - The actual sign-in exchange (see the client crate).
//!
//! Invariants:
//! - The password is held as `secrecy::SecretString` so it never shows up in `Debug` output.
//! - Serialization includes the password for config persistence by the embedding application.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Admin credentials for signing in to Tableau Server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Admin user name.
    pub username: String,
    /// Admin password.
    #[serde(with = "secret_string")]
    pub password: SecretString,
}

impl AuthConfig {
    /// Create credentials from a user name and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password.into().into()),
        }
    }
}
