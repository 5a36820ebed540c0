//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files and
//! building a client from it.

use std::io::Write;

use paypal_sdk_domain::constants::DEFAULT_TOKEN_REFRESH_MARGIN_SECS;
use paypal_sdk_domain::PayPalError;
use paypal_sdk_infra::{config, PayPalClient};
use tempfile::NamedTempFile;

fn write_config(contents: &str, extension: &str) -> (NamedTempFile, std::path::PathBuf) {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");
    let path = temp_file.path().with_extension(extension);
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");
    (temp_file, path)
}

#[test]
fn test_load_config_from_json_file() {
    let (_temp, path) = write_config(
        r#"{
            "client_id": "integration-client",
            "secret": "integration-secret",
            "api_base": "https://api-m.sandbox.paypal.com/",
            "timeout_secs": 10,
            "user_agent": "integration-tests/1.0"
        }"#,
        "json",
    );

    let config = config::load_from_file(Some(path.clone())).expect("JSON config should load");
    std::fs::remove_file(path).ok();

    assert_eq!(config.client_id, "integration-client");
    assert_eq!(config.timeout_secs, 10);
    assert_eq!(config.token_refresh_margin_secs, DEFAULT_TOKEN_REFRESH_MARGIN_SECS);

    let client = PayPalClient::from_config(config).expect("client should build from config");
    assert_eq!(
        client.url_for("/v1/billing/subscriptions").unwrap().as_str(),
        "https://api-m.sandbox.paypal.com/v1/billing/subscriptions"
    );
}

#[test]
fn test_load_config_from_toml_file() {
    let (_temp, path) = write_config(
        r#"
client_id = "integration-client"
secret = "integration-secret"
api_base = "https://api-m.paypal.com"
token_refresh_margin_secs = 600
"#,
        "toml",
    );

    let config = config::load_from_file(Some(path.clone())).expect("TOML config should load");
    std::fs::remove_file(path).ok();

    assert_eq!(config.api_base, "https://api-m.paypal.com");
    assert_eq!(config.token_refresh_margin_secs, 600);
}

#[test]
fn test_load_config_missing_credentials() {
    let (_temp, path) = write_config(r#"api_base = "https://api-m.paypal.com""#, "toml");

    let result = config::load_from_file(Some(path.clone()));
    std::fs::remove_file(path).ok();

    assert!(matches!(result, Err(PayPalError::Config(_))));
}
