#![allow(dead_code)]

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use paypal_sdk_domain::ClientConfig;
use paypal_sdk_infra::PayPalClient;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CLIENT_ID: &str = "AeA1QIZXiflr1_-r0U2UbWTziOWX1GRQer5j4JLhlaN";
pub const SECRET: &str = "ECYYrrSHdKfk_Q0EdvzdGkzj58a66kKaUQ5dZAEv4HvvtDId";

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(CLIENT_ID, SECRET, server.uri())
}

pub fn basic_auth_value() -> String {
    format!("Basic {}", STANDARD.encode(format!("{CLIENT_ID}:{SECRET}")))
}

/// Mount the token endpoint, answering `times` requests with `access_token`.
pub async fn mount_token(server: &MockServer, access_token: &str, expires_in: i64, times: u64) {
    Mock::given(method("POST"))
        .and(path("/v1/oauth2/token"))
        .and(header("authorization", basic_auth_value().as_str()))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "scope": "https://uri.paypal.com/services/subscriptions",
            "access_token": access_token,
            "token_type": "Bearer",
            "app_id": "APP-80W284485P519543T",
            "expires_in": expires_in,
            "nonce": "2020-04-03T15:35:36ZaYZlGvEkV4yVSz8g6bAKFoGSEzuy3CQcz3ljhibkOHg"
        })))
        .expect(times)
        .mount(server)
        .await;
}

/// Run `f` against a client for `server` on a blocking thread.
///
/// The reqwest blocking client owns its own runtime, so it must be built and
/// dropped outside the async test body.
pub async fn with_client<T, F>(server: &MockServer, f: F) -> T
where
    T: Send + 'static,
    F: FnOnce(&mut PayPalClient) -> T + Send + 'static,
{
    let config = config_for(server);
    tokio::task::spawn_blocking(move || {
        let mut client = PayPalClient::from_config(config).expect("client should build");
        f(&mut client)
    })
    .await
    .expect("blocking task should not panic")
}
