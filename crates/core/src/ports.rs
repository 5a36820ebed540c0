//! Port interfaces for the request pipeline
//!
//! These traits define the boundary between the dispatch logic and the
//! concrete HTTP stack. The infrastructure crate ships a reqwest-backed
//! transport; tests substitute scripted ones.

use std::sync::Arc;

use paypal_sdk_domain::Result;

use crate::request::ApiRequest;
use crate::response::ApiResponse;

/// Executes one HTTP exchange.
///
/// Implementations must read the whole response body before returning and
/// report connection-level failures as `PayPalError::Network`. Status codes
/// are not interpreted here.
pub trait HttpTransport: Send {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for Box<T> {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse> {
        (**self).execute(request)
    }
}

impl<T: HttpTransport + Sync + ?Sized> HttpTransport for Arc<T> {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse> {
        (**self).execute(request)
    }
}

/// Optional sink for completed request/response pairs.
///
/// Called after the transport returns and before the response is classified,
/// so error responses are recorded too.
pub trait ExchangeRecorder: Send {
    fn record(&mut self, request: &ApiRequest, response: &ApiResponse);
}
