//! # PayPal SDK Domain
//!
//! Wire types and shared definitions for the PayPal REST client.
//!
//! This crate contains:
//! - Resource types (subscriptions, webhooks, events, tokens)
//! - The error taxonomy and `Result` alias
//! - Client configuration and environment selection
//! - JSON-Patch documents for partial updates
//! - Endpoint paths and header constants
//!
//! ## Architecture
//! - No dependencies on other SDK crates
//! - No I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod patch;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use patch::*;
pub use types::*;
