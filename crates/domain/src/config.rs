//! Client configuration structures

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    API_BASE_LIVE, API_BASE_SANDBOX, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_REFRESH_MARGIN_SECS,
};
use crate::errors::{PayPalError, Result};

/// PayPal deployment the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Live,
    Sandbox,
}

crate::impl_wire_enum_conversions!(Environment {
    Live => "live",
    Sandbox => "sandbox",
});

impl Environment {
    /// Documented API base URL for this environment.
    pub fn api_base(&self) -> &'static str {
        match self {
            Self::Live => API_BASE_LIVE,
            Self::Sandbox => API_BASE_SANDBOX,
        }
    }
}

/// Everything needed to construct a client.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    pub client_id: String,
    pub secret: String,
    /// Base URL, e.g. [`API_BASE_SANDBOX`]
    pub api_base: String,
    #[serde(default = "default_refresh_margin")]
    pub token_refresh_margin_secs: u64,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

fn default_refresh_margin() -> u64 {
    DEFAULT_TOKEN_REFRESH_MARGIN_SECS
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    /// Create a configuration with default margin and timeout.
    pub fn new(
        client_id: impl Into<String>,
        secret: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            secret: secret.into(),
            api_base: api_base.into(),
            token_refresh_margin_secs: DEFAULT_TOKEN_REFRESH_MARGIN_SECS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }

    /// Configuration pointing at one of the documented environments.
    pub fn for_environment(
        client_id: impl Into<String>,
        secret: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Self::new(client_id, secret, environment.api_base())
    }

    /// Check that credentials and base URL are present.
    ///
    /// # Errors
    /// Returns `PayPalError::Config` naming the first missing field.
    pub fn validate(&self) -> Result<()> {
        if self.client_id.trim().is_empty() {
            return Err(PayPalError::Config("client id is required".into()));
        }
        if self.secret.trim().is_empty() {
            return Err(PayPalError::Config("client secret is required".into()));
        }
        if self.api_base.trim().is_empty() {
            return Err(PayPalError::Config("API base URL is required".into()));
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &self.client_id)
            .field("secret", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("token_refresh_margin_secs", &self.token_refresh_margin_secs)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
