//! Transport-level request values and the request builder

use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method};
use paypal_sdk_domain::{PayPalError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

/// A fully prepared HTTP request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Request without a body or headers.
    pub fn new(method: Method, url: Url) -> Self {
        Self { method, url, headers: HeaderMap::new(), body: None }
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set `name`, replacing any previous value.
    ///
    /// # Errors
    /// Returns `PayPalError::InvalidInput` if `value` is not a valid header
    /// value.
    pub fn set_header(&mut self, name: HeaderName, value: &str) -> Result<()> {
        let value = HeaderValue::from_str(value).map_err(|err| {
            PayPalError::InvalidInput(format!("invalid value for header {name}: {err}"))
        })?;
        self.headers.insert(name, value);
        Ok(())
    }

    /// Set `name` only when the request does not carry it yet.
    pub fn set_header_if_absent(&mut self, name: HeaderName, value: &'static str) {
        if !self.headers.contains_key(&name) {
            self.headers.insert(name, HeaderValue::from_static(value));
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// URL path without query, e.g. `/v1/oauth2/token`.
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Decode the JSON body back into a value; `None` when there is no body.
    ///
    /// # Errors
    /// Returns `PayPalError::Decode` if the body is not valid JSON for `T`.
    pub fn json_body<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        self.body
            .as_deref()
            .map(|body| {
                serde_json::from_slice(body)
                    .map_err(|err| PayPalError::Decode(format!("request body: {err}")))
            })
            .transpose()
    }
}

/// Build a request for `method` and `url`, serializing `payload` as the JSON
/// body when present.
///
/// No headers are set; the dispatcher adds them.
///
/// # Errors
/// Returns `PayPalError::Serialization` if the payload cannot be encoded.
pub fn build_request<P>(method: Method, url: Url, payload: Option<&P>) -> Result<ApiRequest>
where
    P: Serialize + ?Sized,
{
    let request = ApiRequest::new(method, url);
    match payload {
        Some(payload) => {
            let body = serde_json::to_vec(payload)
                .map_err(|err| PayPalError::Serialization(err.to_string()))?;
            Ok(request.with_body(body))
        }
        None => Ok(request),
    }
}
