//! Centralized constants for the Tableau client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// REST API Defaults
// =============================================================================

/// REST API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "2.5";

/// Site identifier used when none is configured (the server's default site).
pub const DEFAULT_SITE_ID: &str = "";

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_SERVER_URL: &str = "TABLEAU_SERVER_URL";
pub const ENV_ADMIN_USER: &str = "TABLEAU_ADMIN_USER";
pub const ENV_ADMIN_PASSWORD: &str = "TABLEAU_ADMIN_PASSWORD";
pub const ENV_SITE_ID: &str = "TABLEAU_SITE_ID";
pub const ENV_API_VERSION: &str = "TABLEAU_API_VERSION";
pub const ENV_TIMEOUT: &str = "TABLEAU_TIMEOUT";
