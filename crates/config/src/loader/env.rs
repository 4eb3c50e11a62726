//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_ADMIN_PASSWORD, ENV_ADMIN_USER, ENV_API_VERSION, ENV_SERVER_URL, ENV_SITE_ID, ENV_TIMEOUT,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_SERVER_URL) {
        loader.set_server_url(Some(url));
    }
    if let Some(username) = env_var_or_none(ENV_ADMIN_USER) {
        loader.set_username(Some(username));
    }
    // Passwords are taken verbatim; surrounding whitespace may be significant.
    if let Ok(password) = std::env::var(ENV_ADMIN_PASSWORD)
        && !password.is_empty()
    {
        loader.set_password(Some(password));
    }
    if let Some(site_id) = env_var_or_none(ENV_SITE_ID) {
        loader.set_site_id(Some(site_id));
    }
    if let Some(version) = env_var_or_none(ENV_API_VERSION) {
        loader.set_api_version(Some(version));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        let key1 = "_TABLEAU_TEST_UNSET_VAR";
        assert!(env_var_or_none(key1).is_none(), "Unset env var should return None");

        temp_env::with_vars([(key1, Some(""))], || {
            assert!(env_var_or_none(key1).is_none());
        });

        temp_env::with_vars([(key1, Some("   "))], || {
            assert!(env_var_or_none(key1).is_none());
        });

        let key2 = "_TABLEAU_TEST_SET_VAR";
        temp_env::with_vars([(key2, Some(" test-value "))], || {
            assert_eq!(env_var_or_none(key2), Some("test-value".to_string()));
        });
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_rejected() {
        temp_env::with_vars([(ENV_TIMEOUT, Some("soon"))], || {
            let mut loader = ConfigLoader::new();
            let err = apply_env(&mut loader).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidValue { ref var, .. } if var == ENV_TIMEOUT),
                "unexpected error: {err:?}"
            );
        });
    }
}
