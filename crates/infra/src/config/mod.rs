//! Configuration loading
//!
//! Builds a [`ClientConfig`](paypal_sdk_domain::ClientConfig) from
//! environment variables or files.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths};
