//! Response classification and decoding
//!
//! Status codes are demultiplexed exactly once, in [`classify`]:
//!
//! | status      | outcome                                  |
//! |-------------|------------------------------------------|
//! | 200, 201    | success, body decoded by [`decode`]      |
//! | 204         | success, nothing to decode               |
//! | 401         | `PayPalError::Authorization`             |
//! | anything else | `PayPalError::Provider`                |

use std::borrow::Cow;

use http::{HeaderMap, StatusCode};
use paypal_sdk_domain::{IdentityError, PayPalError, ResponseError, Result};
use serde::de::DeserializeOwned;
use tracing::warn;

/// A response whose body has been read in full.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Vec<u8>>) -> Self {
        Self { status, headers, body: body.into() }
    }

    /// Body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// Turn non-success statuses into typed errors.
///
/// Error bodies are parsed best-effort: an empty body yields an error with
/// only status and headers, a non-empty body must parse.
///
/// # Errors
/// `Authorization` for 401, `Provider` for every status other than
/// 200/201/204, `Decode` when a non-empty error body is not valid JSON.
pub fn classify(response: ApiResponse) -> Result<ApiResponse> {
    match response.status {
        StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT => Ok(response),
        StatusCode::UNAUTHORIZED => {
            let mut err: IdentityError = parse_error_body(&response.body)?;
            err.status = response.status;
            err.headers = response.headers;
            Err(PayPalError::Authorization(Box::new(err)))
        }
        _ => {
            let mut err: ResponseError = parse_error_body(&response.body)?;
            err.status = response.status;
            err.headers = response.headers;
            Err(PayPalError::Provider(Box::new(err)))
        }
    }
}

fn parse_error_body<E: DeserializeOwned + Default>(body: &[u8]) -> Result<E> {
    if body.is_empty() {
        return Ok(E::default());
    }
    serde_json::from_slice(body).map_err(|err| PayPalError::Decode(format!("error body: {err}")))
}

/// Decode a successful response body into `T`.
///
/// A 204 yields `T::default()` without touching the body. A body whose only
/// problem is a number where a string was expected also yields
/// `T::default()`; PayPal occasionally sends numeric values for string
/// members.
///
/// # Errors
/// Returns `PayPalError::Decode` for any other parse failure.
pub fn decode<T: DeserializeOwned + Default>(response: &ApiResponse) -> Result<T> {
    if response.status == StatusCode::NO_CONTENT {
        return Ok(T::default());
    }

    match serde_json::from_slice(&response.body) {
        Ok(value) => Ok(value),
        Err(err) if is_number_for_string(&err) => {
            warn!(
                status = %response.status,
                error = %err,
                "Ignoring numeric value in string field; returning empty result"
            );
            Ok(T::default())
        }
        Err(err) => Err(PayPalError::Decode(err.to_string())),
    }
}

/// Whether `err` is serde_json's "number where a string was expected".
pub fn is_number_for_string(err: &serde_json::Error) -> bool {
    if !err.is_data() {
        return false;
    }
    let message = err.to_string();
    (message.starts_with("invalid type: integer")
        || message.starts_with("invalid type: floating point"))
        && message.contains("expected a string")
}
