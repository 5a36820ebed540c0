//! PayPal REST client
//!
//! Owns the credentials, the cached access token, the transport and the
//! optional exchange recorder. Every operation is a single blocking round
//! trip; the client takes `&mut self` because a call may refresh the token.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;
use http::header::{HeaderValue, ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE};
use http::Method;
use paypal_sdk_core::{
    build_request, classify, decode, ApiRequest, ApiResponse, ExchangeRecorder, HttpTransport,
};
use paypal_sdk_domain::constants::{self, CLIENT_CREDENTIALS_GRANT, TOKEN_PATH};
use paypal_sdk_domain::{ClientConfig, PayPalError, Result, TokenResponse, TokenSet};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument};
use url::{form_urlencoded, Url};

use crate::errors::InfraError;
use crate::http::HttpClient;

const REDACTED: &str = "<redacted>";

/// Blocking client for the PayPal REST API.
///
/// Not internally synchronized: share it across threads only behind a lock.
pub struct PayPalClient {
    config: ClientConfig,
    api_base: String,
    token: Option<TokenSet>,
    transport: Box<dyn HttpTransport>,
    recorder: Option<Box<dyn ExchangeRecorder>>,
}

impl PayPalClient {
    /// Create a client with the default reqwest transport.
    ///
    /// # Errors
    /// Returns `PayPalError::Config` if any argument is empty or the base URL
    /// does not parse. No network call is made.
    pub fn new(
        client_id: impl Into<String>,
        secret: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Result<Self> {
        Self::from_config(ClientConfig::new(client_id, secret, api_base))
    }

    /// Create a client from a loaded configuration, building the transport
    /// with its timeout and user agent.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Self::builder(config).build()
    }

    pub fn builder(config: ClientConfig) -> PayPalClientBuilder {
        PayPalClientBuilder { config, transport: None, recorder: None }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Replace the transport, e.g. with a caller-tuned [`HttpClient`].
    pub fn set_transport(&mut self, transport: impl HttpTransport + 'static) {
        self.transport = Box::new(transport);
    }

    /// Attach or detach the exchange recorder.
    pub fn set_recorder(&mut self, recorder: Option<Box<dyn ExchangeRecorder>>) {
        self.recorder = recorder;
    }

    /* ---------------------------------------------------------------------- */
    /* Token management */
    /* ---------------------------------------------------------------------- */

    /// Currently cached token, if any.
    pub fn access_token(&self) -> Option<&TokenSet> {
        self.token.as_ref()
    }

    /// Install a token obtained elsewhere. Its lifetime is unknown, so it is
    /// used until replaced.
    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.token = Some(TokenSet::without_expiry(access_token));
    }

    /// Make sure a token outside the refresh margin is cached.
    ///
    /// # Errors
    /// Propagates the token request failure; the previously cached token is
    /// kept in that case.
    pub fn ensure_valid_token(&mut self) -> Result<()> {
        let margin = self.refresh_margin_secs();
        if let Some(token) = &self.token {
            if !token.is_expired(margin) {
                debug!(expires_in = ?token.seconds_until_expiry(), "Cached access token is valid");
                return Ok(());
            }
            debug!(margin_secs = margin, "Access token inside refresh margin, refreshing");
        } else {
            debug!("No cached access token, requesting one");
        }

        self.get_access_token().map(|_| ())
    }

    /// Request a new token with the client-credentials grant and cache it.
    ///
    /// # Errors
    /// Any transport, status or decode failure, or `PayPalError::Decode` if
    /// the response carries no access token. The cached token is untouched
    /// on failure.
    #[instrument(skip(self))]
    pub fn get_access_token(&mut self) -> Result<TokenSet> {
        let url = self.url_for(TOKEN_PATH)?;
        let body = form_urlencoded::Serializer::new(String::new())
            .append_pair("grant_type", CLIENT_CREDENTIALS_GRANT)
            .finish();

        let mut request = ApiRequest::new(Method::POST, url).with_body(body);
        request.set_header(CONTENT_TYPE, constants::CONTENT_TYPE_FORM)?;

        let response = self.send_with_basic_auth(request)?;
        let payload: TokenResponse = decode(&response)?;
        if payload.access_token.is_empty() {
            return Err(PayPalError::Decode("token response carried no access token".into()));
        }

        let token = TokenSet::issued_at(payload, Utc::now());
        info!(expires_in = token.expires_in, app_id = ?token.app_id, "Obtained PayPal access token");
        self.token = Some(token.clone());
        Ok(token)
    }

    fn refresh_margin_secs(&self) -> i64 {
        i64::try_from(self.config.token_refresh_margin_secs).unwrap_or(i64::MAX)
    }

    /* ---------------------------------------------------------------------- */
    /* Request construction */
    /* ---------------------------------------------------------------------- */

    /// Absolute URL for an API path such as `/v1/billing/subscriptions`.
    ///
    /// # Errors
    /// Returns `PayPalError::Config` if the result is not a valid URL.
    pub fn url_for(&self, path: &str) -> Result<Url> {
        Url::parse(&format!("{}{}", self.api_base, path))
            .map_err(|err| PayPalError::from(InfraError::from(err)))
    }

    /// URL of one resource in `collection`, with optional trailing action
    /// segments. The id is percent-encoded as a single path segment.
    ///
    /// # Errors
    /// Returns `PayPalError::InvalidInput` for an empty id.
    pub(crate) fn resource_url(&self, collection: &str, id: &str, action: &[&str]) -> Result<Url> {
        if id.trim().is_empty() {
            return Err(PayPalError::InvalidInput("resource id must not be empty".into()));
        }

        let mut url = self.url_for(collection)?;
        url.path_segments_mut()
            .map_err(|()| PayPalError::Config("API base URL cannot carry a path".into()))?
            .pop_if_empty()
            .push(id)
            .extend(action);
        Ok(url)
    }

    /// Build a request for `path`, serializing `payload` as JSON.
    pub fn new_request<P>(&self, method: Method, path: &str, payload: Option<&P>) -> Result<ApiRequest>
    where
        P: Serialize + ?Sized,
    {
        build_request(method, self.url_for(path)?, payload)
    }

    /* ---------------------------------------------------------------------- */
    /* Dispatch */
    /* ---------------------------------------------------------------------- */

    /// Send without credentials and classify the response.
    ///
    /// Sets `Accept`, `Accept-Language` and, unless already present,
    /// `Content-Type`.
    ///
    /// # Errors
    /// Transport failures, `Authorization` for 401 and `Provider` for any
    /// status other than 200, 201 and 204.
    pub fn send(&mut self, mut request: ApiRequest) -> Result<ApiResponse> {
        request.headers.insert(ACCEPT, HeaderValue::from_static(constants::ACCEPT_JSON));
        request
            .headers
            .insert(ACCEPT_LANGUAGE, HeaderValue::from_static(constants::ACCEPT_LANGUAGE));
        request.set_header_if_absent(CONTENT_TYPE, constants::CONTENT_TYPE_JSON);

        let response = self.transport.execute(&request)?;
        debug!(
            method = %request.method,
            url = %request.url,
            status = %response.status,
            "PayPal request completed"
        );

        if let Some(recorder) = self.recorder.as_mut() {
            if !is_token_request(&request) {
                recorder.record(&redacted(&request), &response);
            }
        }

        classify(response).inspect_err(|err| {
            debug!(error = %err, kind = err.label(), "PayPal request failed");
        })
    }

    /// Send with HTTP Basic credentials built from the client id and secret.
    pub fn send_with_basic_auth(&mut self, mut request: ApiRequest) -> Result<ApiResponse> {
        let credentials =
            STANDARD.encode(format!("{}:{}", self.config.client_id, self.config.secret));
        request.headers.insert(AUTHORIZATION, sensitive_header(&format!("Basic {credentials}"))?);
        self.send(request)
    }

    /// Send with a bearer token, refreshing it first when needed.
    ///
    /// # Errors
    /// A failed refresh aborts the call and is returned as is.
    pub fn send_with_auth(&mut self, mut request: ApiRequest) -> Result<ApiResponse> {
        self.ensure_valid_token()?;
        let token = self
            .token
            .as_ref()
            .ok_or_else(|| PayPalError::Config("no access token available".into()))?;
        request.headers.insert(AUTHORIZATION, sensitive_header(&token.authorization_value())?);
        self.send(request)
    }

    /// Bearer-authenticated call decoding the body into `T`.
    pub fn send_json<T>(&mut self, request: ApiRequest) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let response = self.send_with_auth(request)?;
        decode(&response)
    }

    /// Bearer-authenticated call whose body, if any, is ignored.
    pub fn send_no_content(&mut self, request: ApiRequest) -> Result<()> {
        self.send_with_auth(request).map(|_| ())
    }
}

impl std::fmt::Debug for PayPalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayPalClient")
            .field("config", &self.config)
            .field("has_token", &self.token.is_some())
            .field("has_recorder", &self.recorder.is_some())
            .finish_non_exhaustive()
    }
}

fn sensitive_header(value: &str) -> Result<HeaderValue> {
    let mut header = HeaderValue::from_str(value)
        .map_err(|err| PayPalError::InvalidInput(format!("invalid authorization header: {err}")))?;
    header.set_sensitive(true);
    Ok(header)
}

fn is_token_request(request: &ApiRequest) -> bool {
    request.path().ends_with(TOKEN_PATH)
}

fn redacted(request: &ApiRequest) -> ApiRequest {
    let mut copy = request.clone();
    if copy.headers.contains_key(AUTHORIZATION) {
        copy.headers.insert(AUTHORIZATION, HeaderValue::from_static(REDACTED));
    }
    copy
}

/// Builder for [`PayPalClient`].
pub struct PayPalClientBuilder {
    config: ClientConfig,
    transport: Option<Box<dyn HttpTransport>>,
    recorder: Option<Box<dyn ExchangeRecorder>>,
}

impl PayPalClientBuilder {
    /// Use this transport instead of building an [`HttpClient`].
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    pub fn recorder(mut self, recorder: impl ExchangeRecorder + 'static) -> Self {
        self.recorder = Some(Box::new(recorder));
        self
    }

    pub fn token_refresh_margin(mut self, margin: Duration) -> Self {
        self.config.token_refresh_margin_secs = margin.as_secs();
        self
    }

    /// # Errors
    /// Returns `PayPalError::Config` for missing credentials or base URL, an
    /// unparsable base URL, or a transport that cannot be built.
    pub fn build(self) -> Result<PayPalClient> {
        self.config.validate()?;

        let api_base = self.config.api_base.trim().trim_end_matches('/').to_string();
        let base = Url::parse(&api_base).map_err(|err| PayPalError::from(InfraError::from(err)))?;
        if base.cannot_be_a_base() {
            return Err(PayPalError::Config(format!("API base is not a base URL: {api_base}")));
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let mut http = HttpClient::builder()
                    .timeout(Duration::from_secs(self.config.timeout_secs));
                if let Some(agent) = &self.config.user_agent {
                    http = http.user_agent(agent.clone());
                }
                Box::new(http.build()?)
            }
        };

        debug!(api_base = %api_base, client_id = %self.config.client_id, "PayPal client created");

        Ok(PayPalClient {
            config: self.config,
            api_base,
            token: None,
            transport,
            recorder: self.recorder,
        })
    }
}
