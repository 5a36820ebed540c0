//! PayPal REST API client
//!
//! [`PayPalClient`] holds credentials and the cached token and dispatches
//! requests. Resource operations live in per-resource modules as further
//! `impl PayPalClient` blocks.

pub mod client;
mod subscriptions;
mod webhooks;

pub use client::{PayPalClient, PayPalClientBuilder};
