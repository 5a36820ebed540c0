//! Exchange recorders
//!
//! Implementations of [`ExchangeRecorder`] that the client can be given to
//! dump request/response pairs. The client redacts `Authorization` before a
//! recorder sees the request and never records the token endpoint.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use http::HeaderMap;
use paypal_sdk_core::{ApiRequest, ApiResponse, ExchangeRecorder};
use tracing::{debug, warn};

/// Emits one `debug` event per exchange.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRecorder;

impl ExchangeRecorder for TracingRecorder {
    fn record(&mut self, request: &ApiRequest, response: &ApiResponse) {
        debug!(
            method = %request.method,
            url = %request.url,
            status = response.status.as_u16(),
            request_body = %request.body.as_deref().map(String::from_utf8_lossy).unwrap_or_default(),
            response_body = %response.text(),
            "PayPal exchange"
        );
    }
}

/// Writes a human-readable dump of each exchange to `W`.
///
/// Write failures are logged and otherwise ignored so that a broken log sink
/// never fails an API call.
#[derive(Debug)]
pub struct WriterRecorder<W> {
    writer: W,
}

impl<W: Write + Send> WriterRecorder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_exchange(&mut self, request: &ApiRequest, response: &ApiResponse) -> std::io::Result<()> {
        let w = &mut self.writer;
        writeln!(w, "{} {} {}", request.method, response.status.as_u16(), request.url)?;
        writeln!(w, "Request headers:")?;
        write_headers(w, &request.headers)?;
        if let Some(body) = request.body.as_deref() {
            writeln!(w, "Request body: {}", String::from_utf8_lossy(body))?;
        }
        writeln!(w, "Response headers:")?;
        write_headers(w, &response.headers)?;
        writeln!(w, "Response body: {}", response.text())?;
        writeln!(w)?;
        w.flush()
    }
}

fn write_headers(w: &mut impl Write, headers: &HeaderMap) -> std::io::Result<()> {
    for (name, value) in headers {
        let value = if value.is_sensitive() {
            "<redacted>".into()
        } else {
            String::from_utf8_lossy(value.as_bytes())
        };
        writeln!(w, "  {name}: {value}")?;
    }
    Ok(())
}

impl<W: Write + Send> ExchangeRecorder for WriterRecorder<W> {
    fn record(&mut self, request: &ApiRequest, response: &ApiResponse) {
        if let Err(err) = self.write_exchange(request, response) {
            warn!(error = %err, "failed to write exchange dump");
        }
    }
}

/// Keeps exchanges in memory for tests and diagnostics. Clones share the
/// same buffer, which grows until drained with [`take`](Self::take) or
/// [`clear`](Self::clear).
#[derive(Debug, Clone, Default)]
pub struct MemoryRecorder {
    exchanges: Arc<Mutex<Vec<(ApiRequest, ApiResponse)>>>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exchanges(&self) -> Vec<(ApiRequest, ApiResponse)> {
        self.exchanges.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Remove and return every recorded exchange.
    pub fn take(&self) -> Vec<(ApiRequest, ApiResponse)> {
        std::mem::take(&mut *self.exchanges.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn clear(&self) {
        self.exchanges.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl ExchangeRecorder for MemoryRecorder {
    fn record(&mut self, request: &ApiRequest, response: &ApiResponse) {
        self.exchanges
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((request.clone(), response.clone()));
    }
}
