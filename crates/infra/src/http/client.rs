use std::time::Duration;

use paypal_sdk_core::{ApiRequest, ApiResponse, HttpTransport};
use paypal_sdk_domain::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use paypal_sdk_domain::{PayPalError, Result};
use reqwest::blocking::Client as ReqwestClient;
use reqwest::header::HeaderMap;
use tracing::debug;

use crate::errors::InfraError;

/// Blocking HTTP transport with a per-request timeout.
///
/// Each call is a single round trip: there is no retry, and status codes are
/// left for the dispatcher to interpret.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Wrap a caller-configured reqwest client (proxies, custom TLS roots).
    pub fn from_reqwest(client: ReqwestClient) -> Self {
        Self { client }
    }
}

impl HttpTransport for HttpClient {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let method = request.method.clone();
        let url = request.url.clone();
        debug!(%method, %url, "sending HTTP request");

        let mut builder =
            self.client.request(method.clone(), url.clone()).headers(request.headers.clone());
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().map_err(|err| {
            debug!(%method, %url, error = %err, "HTTP request failed");
            PayPalError::from(InfraError::from(err))
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().map_err(|err| PayPalError::from(InfraError::from(err)))?;
        debug!(%method, %url, %status, bytes = body.len(), "received HTTP response");

        Ok(ApiResponse::new(status, headers, body.to_vec()))
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
    default_headers: Option<HeaderMap>,
    no_proxy: bool,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
            default_headers: None,
            no_proxy: false,
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    /// Bypass proxies from the environment and system settings. Proxies are
    /// honored unless this is set.
    pub fn no_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let agent = self.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let mut builder = ReqwestClient::builder().timeout(self.timeout).user_agent(agent);
        if self.no_proxy {
            builder = builder.no_proxy();
        }

        if let Some(headers) = self.default_headers {
            builder = builder.default_headers(headers);
        }

        let client = builder.build().map_err(|err| PayPalError::from(InfraError::from(err)))?;

        Ok(HttpClient { client })
    }
}
