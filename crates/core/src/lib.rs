//! # PayPal SDK Core
//!
//! Request pipeline logic with no HTTP stack attached.
//!
//! This crate contains:
//! - Port interfaces for the transport and the exchange recorder
//! - Transport-level request and response values
//! - The request builder
//! - Response classification and body decoding
//!
//! ## Architecture Principles
//! - Only depends on `paypal-sdk-domain`
//! - No network code; transports are injected through [`HttpTransport`]

pub mod ports;
pub mod request;
pub mod response;

pub use ports::{ExchangeRecorder, HttpTransport};
pub use request::{build_request, ApiRequest};
pub use response::{classify, decode, ApiResponse};
