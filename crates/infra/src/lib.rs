//! # PayPal SDK Infrastructure
//!
//! Infrastructure implementations of the core ports and the client itself.
//!
//! This crate contains:
//! - The reqwest blocking transport
//! - `PayPalClient` with token management and the resource operations
//! - Configuration loading from environment variables and files
//! - Exchange recorders
//!
//! ## Architecture
//! - Implements traits defined in `paypal-sdk-core`
//! - Contains all "impure" code (network and file I/O)
//!
//! ## Example
//! ```no_run
//! use paypal_sdk_domain::{ClientConfig, CreateSubscriptionRequest, Environment};
//! use paypal_sdk_infra::PayPalClient;
//!
//! # fn main() -> paypal_sdk_domain::Result<()> {
//! let config = ClientConfig::for_environment("client-id", "secret", Environment::Sandbox);
//! let mut client = PayPalClient::from_config(config)?;
//! let subscription =
//!     client.create_subscription(&CreateSubscriptionRequest::new("P-5ML4271244454362WXNWU5NQ"))?;
//! println!("approve at {:?}", subscription.approval_link());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use api::{PayPalClient, PayPalClientBuilder};
pub use errors::InfraError;
pub use self::http::{HttpClient, HttpClientBuilder};
pub use observability::{MemoryRecorder, TracingRecorder, WriterRecorder};
