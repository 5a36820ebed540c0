//! Error types used throughout the SDK

use http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::LinkDescription;

/// Main error type for PayPal operations
#[derive(Error, Debug)]
pub enum PayPalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Authorization error: {0}")]
    Authorization(Box<IdentityError>),

    #[error("Provider error: {0}")]
    Provider(Box<ResponseError>),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PayPalError {
    /// HTTP status of the response that produced this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Authorization(err) => Some(err.status),
            Self::Provider(err) => Some(err.status),
            _ => None,
        }
    }

    /// Stable label suitable for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Serialization(_) => "serialization",
            Self::Network(_) => "network",
            Self::Decode(_) => "decode",
            Self::Authorization(_) => "authorization",
            Self::Provider(_) => "provider",
            Self::InvalidInput(_) => "invalid_input",
        }
    }
}

/// Result type alias for PayPal operations
pub type Result<T> = std::result::Result<T, PayPalError>;

/// Error body returned by the identity (OAuth) endpoints, typically on 401.
///
/// `status` and `headers` come from the HTTP response; the remaining fields
/// are filled from the JSON body when one is present.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IdentityError {
    #[serde(skip)]
    pub status: StatusCode,
    #[serde(skip)]
    pub headers: HeaderMap,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error_description: String,
}

impl std::fmt::Display for IdentityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.status)?;
        if !self.error.is_empty() {
            write!(f, " {}", self.error)?;
        }
        if !self.error_description.is_empty() {
            write!(f, ": {}", self.error_description)?;
        }
        Ok(())
    }
}

/// Standard REST error body returned for non-success statuses.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResponseError {
    #[serde(skip)]
    pub status: StatusCode,
    #[serde(skip)]
    pub headers: HeaderMap,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub debug_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub information_link: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetail>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkDescription>,
}

impl ResponseError {
    /// Correlation id PayPal attaches to every response, taken from the
    /// `Paypal-Debug-Id` header when the body did not carry one.
    pub fn debug_id(&self) -> Option<&str> {
        if !self.debug_id.is_empty() {
            return Some(&self.debug_id);
        }
        self.headers.get("paypal-debug-id").and_then(|value| value.to_str().ok())
    }
}

impl std::fmt::Display for ResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.status)?;
        if !self.name.is_empty() {
            write!(f, " {}", self.name)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(debug_id) = self.debug_id() {
            write!(f, " (debug id {debug_id})")?;
        }
        Ok(())
    }
}

/// One entry of [`ResponseError::details`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorDetail {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub field: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub issue: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    #[test]
    fn response_error_parses_provider_body() {
        let body = r#"{
            "name": "RESOURCE_NOT_FOUND",
            "message": "The specified resource does not exist.",
            "debug_id": "b1d1f06c7246c",
            "details": [{"issue": "INVALID_RESOURCE_ID", "description": "Requested resource ID was not found."}]
        }"#;

        let parsed: ResponseError = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.name, "RESOURCE_NOT_FOUND");
        assert_eq!(parsed.details.len(), 1);
        assert_eq!(parsed.details[0].issue, "INVALID_RESOURCE_ID");
        assert_eq!(parsed.debug_id(), Some("b1d1f06c7246c"));
    }

    #[test]
    fn debug_id_falls_back_to_header() {
        let mut err = ResponseError { status: StatusCode::BAD_REQUEST, ..Default::default() };
        err.headers.insert("paypal-debug-id", HeaderValue::from_static("f00ba4"));

        assert_eq!(err.debug_id(), Some("f00ba4"));
        assert_eq!(err.to_string(), "400 Bad Request (debug id f00ba4)");
    }

    #[test]
    fn identity_error_display() {
        let err = IdentityError {
            status: StatusCode::UNAUTHORIZED,
            error: "invalid_client".into(),
            error_description: "Client Authentication failed".into(),
            ..Default::default()
        };

        let wrapped = PayPalError::Authorization(Box::new(err));
        assert_eq!(wrapped.status(), Some(StatusCode::UNAUTHORIZED));
        assert_eq!(
            wrapped.to_string(),
            "Authorization error: 401 Unauthorized invalid_client: Client Authentication failed"
        );
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(PayPalError::Config("x".into()).label(), "config");
        assert_eq!(PayPalError::Decode("x".into()).label(), "decode");
        assert_eq!(PayPalError::Network("x".into()).status(), None);
    }
}
