//! OAuth2 access token types
//!
//! PayPal issues short-lived bearer tokens through the client-credentials
//! grant. [`TokenResponse`] is the wire shape of `/v1/oauth2/token`;
//! [`TokenSet`] is the cached form that also knows when it expires.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::BEARER_SCHEME;

/// Token endpoint response body.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    /// Lifetime in seconds
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}

/// Cached bearer token with absolute expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    pub access_token: String,

    /// Scheme used in the Authorization header ("Bearer")
    pub token_type: String,

    /// Access token lifetime in seconds as reported by the provider
    pub expires_in: i64,

    /// Absolute expiration timestamp (UTC). `None` means the expiry is
    /// unknown and the token is used until the provider rejects it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

impl TokenSet {
    /// Build a token from an endpoint response received at `now`.
    ///
    /// A missing or non-positive lifetime expires at `now`, so the token is
    /// replaced on the next call.
    pub fn issued_at(response: TokenResponse, now: DateTime<Utc>) -> Self {
        let expires_at = Duration::try_seconds(response.expires_in.max(0))
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(now);
        let token_type = if response.token_type.is_empty() {
            BEARER_SCHEME.to_string()
        } else {
            response.token_type
        };

        Self {
            access_token: response.access_token,
            token_type,
            expires_in: response.expires_in,
            expires_at: Some(expires_at),
            scope: response.scope,
            app_id: response.app_id,
        }
    }

    /// Wrap an externally obtained token whose lifetime is unknown.
    pub fn without_expiry(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: BEARER_SCHEME.to_string(),
            expires_in: 0,
            expires_at: None,
            scope: None,
            app_id: None,
        }
    }

    /// Check if the token is expired or will expire within `threshold_seconds`.
    ///
    /// Tokens without an expiry timestamp are never considered expired.
    pub fn is_expired(&self, threshold_seconds: i64) -> bool {
        self.is_expired_at(Utc::now(), threshold_seconds)
    }

    /// Same as [`is_expired`](Self::is_expired) against an explicit clock.
    pub fn is_expired_at(&self, now: DateTime<Utc>, threshold_seconds: i64) -> bool {
        match self.expires_at {
            Some(expires_at) => Duration::try_seconds(threshold_seconds)
                .and_then(|margin| now.checked_add_signed(margin))
                .map_or(true, |deadline| deadline >= expires_at),
            None => false,
        }
    }

    /// Seconds until expiry, `None` if no expiry is known.
    pub fn seconds_until_expiry(&self) -> Option<i64> {
        self.expires_at.map(|expires_at| (expires_at - Utc::now()).num_seconds())
    }

    /// Value for the `Authorization` header. PayPal always issues bearer
    /// tokens, so the scheme is normalized to `Bearer`.
    pub fn authorization_value(&self) -> String {
        format!("{BEARER_SCHEME} {}", self.access_token)
    }
}

impl From<TokenResponse> for TokenSet {
    fn from(response: TokenResponse) -> Self {
        Self::issued_at(response, Utc::now())
    }
}
