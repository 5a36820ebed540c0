//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If credentials are missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `PAYPAL_CLIENT_ID`: OAuth client id (required)
//! - `PAYPAL_SECRET`: OAuth client secret (required)
//! - `PAYPAL_API_BASE`: API base URL; takes precedence over the environment
//! - `PAYPAL_ENVIRONMENT`: `live` or `sandbox` (default `sandbox`)
//! - `PAYPAL_TIMEOUT_SECS`: HTTP request timeout in seconds
//! - `PAYPAL_TOKEN_REFRESH_MARGIN_SECS`: refresh tokens this long before expiry
//! - `PAYPAL_USER_AGENT`: `User-Agent` header value
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./paypal.json` or `./paypal.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use paypal_sdk_domain::{ClientConfig, Environment, PayPalError, Result};

const CONFIG_FILE_NAMES: [&str; 4] = ["paypal.json", "paypal.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `PayPalError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<ClientConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `PayPalError::Config` if credentials are missing or a numeric
/// or environment value does not parse.
pub fn load_from_env() -> Result<ClientConfig> {
    let client_id = env_var("PAYPAL_CLIENT_ID")?;
    let secret = env_var("PAYPAL_SECRET")?;

    let api_base = match std::env::var("PAYPAL_API_BASE") {
        Ok(base) if !base.trim().is_empty() => base,
        _ => {
            let environment = match std::env::var("PAYPAL_ENVIRONMENT") {
                Ok(raw) => raw.parse::<Environment>().map_err(PayPalError::Config)?,
                Err(_) => Environment::Sandbox,
            };
            environment.api_base().to_string()
        }
    };

    let mut config = ClientConfig::new(client_id, secret, api_base);
    if let Some(timeout) = env_u64("PAYPAL_TIMEOUT_SECS")? {
        config.timeout_secs = timeout;
    }
    if let Some(margin) = env_u64("PAYPAL_TOKEN_REFRESH_MARGIN_SECS")? {
        config.token_refresh_margin_secs = margin;
    }
    config.user_agent = std::env::var("PAYPAL_USER_AGENT").ok().filter(|ua| !ua.is_empty());

    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `PayPalError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(PayPalError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            PayPalError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| PayPalError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| PayPalError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| PayPalError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(PayPalError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// First existing config file in the working directory, then next to the
/// executable.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        dirs.push(exe_dir);
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(PayPalError::Config(format!("Missing required environment variable: {key}"))),
    }
}

fn env_u64(key: &str) -> Result<Option<u64>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| PayPalError::Config(format!("Invalid {key}: {e}"))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use paypal_sdk_domain::constants::{
        API_BASE_LIVE, API_BASE_SANDBOX, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_REFRESH_MARGIN_SECS,
    };
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const VARS: [&str; 7] = [
        "PAYPAL_CLIENT_ID",
        "PAYPAL_SECRET",
        "PAYPAL_API_BASE",
        "PAYPAL_ENVIRONMENT",
        "PAYPAL_TIMEOUT_SECS",
        "PAYPAL_TOKEN_REFRESH_MARGIN_SECS",
        "PAYPAL_USER_AGENT",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    fn write_temp(contents: &str, extension: &str) -> (NamedTempFile, PathBuf) {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(contents.as_bytes()).unwrap();
        let path = temp_file.path().with_extension(extension);
        std::fs::copy(temp_file.path(), &path).unwrap();
        (temp_file, path)
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("PAYPAL_CLIENT_ID", "client");
        std::env::set_var("PAYPAL_SECRET", "secret");
        std::env::set_var("PAYPAL_API_BASE", "http://127.0.0.1:9000");
        std::env::set_var("PAYPAL_TIMEOUT_SECS", "5");
        std::env::set_var("PAYPAL_TOKEN_REFRESH_MARGIN_SECS", "60");
        std::env::set_var("PAYPAL_USER_AGENT", "billing-worker/2.1");

        let result = load_from_env();
        clear_env();

        let config = result.expect("config from env");
        assert_eq!(config.client_id, "client");
        assert_eq!(config.api_base, "http://127.0.0.1:9000");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.token_refresh_margin_secs, 60);
        assert_eq!(config.user_agent.as_deref(), Some("billing-worker/2.1"));
    }

    #[test]
    fn test_load_from_env_environment_selects_base() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("PAYPAL_CLIENT_ID", "client");
        std::env::set_var("PAYPAL_SECRET", "secret");
        let sandbox = load_from_env();
        std::env::set_var("PAYPAL_ENVIRONMENT", "LIVE");
        let live = load_from_env();
        std::env::set_var("PAYPAL_ENVIRONMENT", "staging");
        let unknown = load_from_env();
        clear_env();

        let sandbox = sandbox.unwrap();
        assert_eq!(sandbox.api_base, API_BASE_SANDBOX);
        assert_eq!(sandbox.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(sandbox.token_refresh_margin_secs, DEFAULT_TOKEN_REFRESH_MARGIN_SECS);
        assert_eq!(live.unwrap().api_base, API_BASE_LIVE);
        assert!(matches!(unknown, Err(PayPalError::Config(_))));
    }

    #[test]
    fn test_load_from_env_missing_var() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("PAYPAL_CLIENT_ID", "client");
        let result = load_from_env();
        clear_env();

        assert!(matches!(result, Err(PayPalError::Config(msg)) if msg.contains("PAYPAL_SECRET")));
    }

    #[test]
    fn test_load_from_env_invalid_number() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("PAYPAL_CLIENT_ID", "client");
        std::env::set_var("PAYPAL_SECRET", "secret");
        std::env::set_var("PAYPAL_TIMEOUT_SECS", "soon");
        let result = load_from_env();
        clear_env();

        assert!(matches!(result, Err(PayPalError::Config(_))), "Should be a Config error");
    }

    #[test]
    fn test_load_from_file_json() {
        let (_temp, path) = write_temp(
            r#"{
                "client_id": "client",
                "secret": "secret",
                "api_base": "https://api-m.sandbox.paypal.com",
                "timeout_secs": 12
            }"#,
            "json",
        );

        let config = load_from_file(Some(path.clone())).expect("config from JSON file");
        std::fs::remove_file(path).ok();

        assert_eq!(config.client_id, "client");
        assert_eq!(config.timeout_secs, 12);
        assert_eq!(config.token_refresh_margin_secs, DEFAULT_TOKEN_REFRESH_MARGIN_SECS);
    }

    #[test]
    fn test_load_from_file_toml() {
        let (_temp, path) = write_temp(
            r#"
client_id = "client"
secret = "secret"
api_base = "https://api-m.paypal.com"
token_refresh_margin_secs = 120
user_agent = "billing-worker/2.1"
"#,
            "toml",
        );

        let config = load_from_file(Some(path.clone())).expect("config from TOML file");
        std::fs::remove_file(path).ok();

        assert_eq!(config.api_base, API_BASE_LIVE);
        assert_eq!(config.token_refresh_margin_secs, 120);
        assert_eq!(config.user_agent.as_deref(), Some("billing-worker/2.1"));
    }

    #[test]
    fn test_load_from_file_rejects_empty_credentials() {
        let (_temp, path) = write_temp(
            r#"{"client_id": "", "secret": "secret", "api_base": "https://api-m.paypal.com"}"#,
            "json",
        );

        let result = load_from_file(Some(path.clone()));
        std::fs::remove_file(path).ok();

        assert!(matches!(result, Err(PayPalError::Config(msg)) if msg.contains("client id")));
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/paypal.json")));
        assert!(matches!(result, Err(PayPalError::Config(_))), "Should be a Config error");
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let (_temp, path) = write_temp(r#"{ "client_id": "not valid json" "#, "json");

        let result = load_from_file(Some(path.clone()));
        std::fs::remove_file(path).ok();

        assert!(matches!(result, Err(PayPalError::Config(msg)) if msg.contains("JSON")));
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("client_id: x", &PathBuf::from("paypal.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }
}
