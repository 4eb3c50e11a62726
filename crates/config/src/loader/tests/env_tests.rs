//! Environment variable loading tests.

use std::time::Duration;

use secrecy::ExposeSecret;
use serial_test::serial;

use super::env_lock;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

#[test]
#[serial]
fn test_from_env_reads_all_variables() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("TABLEAU_SERVER_URL", Some("https://tableau.example.com/")),
            ("TABLEAU_ADMIN_USER", Some("admin")),
            ("TABLEAU_ADMIN_PASSWORD", Some("pw")),
            ("TABLEAU_SITE_ID", Some("mysite")),
            ("TABLEAU_API_VERSION", Some("3.4")),
            ("TABLEAU_TIMEOUT", Some("60")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();

            assert_eq!(config.connection.server_url, "https://tableau.example.com");
            assert_eq!(config.connection.site_id, "mysite");
            assert_eq!(config.connection.api_version, "3.4");
            assert_eq!(config.connection.timeout, Duration::from_secs(60));
            assert_eq!(config.auth.username, "admin");
            assert_eq!(config.auth.password.expose_secret(), "pw");
        },
    );
}

#[test]
#[serial]
fn test_builder_overrides_env_when_called_later() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("TABLEAU_SERVER_URL", Some("https://env.example.com")),
            ("TABLEAU_ADMIN_USER", Some("env-admin")),
            ("TABLEAU_ADMIN_PASSWORD", Some("pw")),
            ("TABLEAU_SITE_ID", None),
            ("TABLEAU_API_VERSION", None),
            ("TABLEAU_TIMEOUT", None),
        ],
        || {
            let config = ConfigLoader::new()
                .from_env()
                .unwrap()
                .with_server_url("https://override.example.com".to_string())
                .build()
                .unwrap();

            assert_eq!(config.connection.server_url, "https://override.example.com");
            assert_eq!(config.auth.username, "env-admin");
        },
    );
}

#[test]
#[serial]
fn test_blank_env_vars_are_unset() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("TABLEAU_SERVER_URL", Some("   ")),
            ("TABLEAU_ADMIN_USER", Some("admin")),
            ("TABLEAU_ADMIN_PASSWORD", Some("pw")),
            ("TABLEAU_SITE_ID", None),
            ("TABLEAU_API_VERSION", None),
            ("TABLEAU_TIMEOUT", None),
        ],
        || {
            let result = ConfigLoader::new().from_env().unwrap().build();
            assert!(matches!(result, Err(ConfigError::MissingServerUrl)));
        },
    );
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_loading() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("DOTENV_DISABLED", Some("1"))], || {
        assert!(ConfigLoader::new().load_dotenv().is_ok());
    });
}
