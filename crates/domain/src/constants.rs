//! Wire-level constants
//!
//! Endpoint paths, header values and defaults shared by every crate.

// Provider environments
pub const API_BASE_LIVE: &str = "https://api-m.paypal.com";
pub const API_BASE_SANDBOX: &str = "https://api-m.sandbox.paypal.com";

// Endpoint paths (relative to the API base)
pub const TOKEN_PATH: &str = "/v1/oauth2/token";
pub const SUBSCRIPTIONS_PATH: &str = "/v1/billing/subscriptions";
pub const WEBHOOKS_PATH: &str = "/v1/notifications/webhooks";

// Header values applied to every request
pub const ACCEPT_JSON: &str = "application/json";
pub const ACCEPT_LANGUAGE: &str = "en_US";
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";
pub const PREFER_REPRESENTATION: &str = "return=representation";

// OAuth
pub const CLIENT_CREDENTIALS_GRANT: &str = "client_credentials";
pub const BEARER_SCHEME: &str = "Bearer";

/// Refresh the access token this many seconds before it expires.
pub const DEFAULT_TOKEN_REFRESH_MARGIN_SECS: u64 = 300;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("paypal-sdk-rs/", env!("CARGO_PKG_VERSION"));
