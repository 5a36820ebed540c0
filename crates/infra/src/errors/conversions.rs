//! Conversions from external infrastructure errors into domain errors.

use paypal_sdk_domain::PayPalError;
use reqwest::Error as HttpError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub PayPalError);

impl From<InfraError> for PayPalError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<PayPalError> for InfraError {
    fn from(value: PayPalError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoPayPalError {
    fn into_paypal(self) -> PayPalError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → PayPalError */
/* -------------------------------------------------------------------------- */

impl IntoPayPalError for HttpError {
    fn into_paypal(self) -> PayPalError {
        if self.is_builder() {
            return PayPalError::Config(format!("invalid HTTP client setup: {self}"));
        }

        if self.is_timeout() {
            return PayPalError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return PayPalError::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_body() || self.is_decode() {
            return PayPalError::Network(format!("failed to read HTTP response body: {self}"));
        }

        if let Some(status) = self.status() {
            return PayPalError::Network(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        PayPalError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_paypal())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → PayPalError */
/* -------------------------------------------------------------------------- */

impl IntoPayPalError for UrlError {
    fn into_paypal(self) -> PayPalError {
        PayPalError::Config(format!("invalid API URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_paypal())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use reqwest::{Client, StatusCode};
    use tokio::runtime::Runtime;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn url_parse_failure_maps_to_config_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let mapped: PayPalError = InfraError::from(err).into();
        match mapped {
            PayPalError::Config(msg) => assert!(msg.contains("invalid API URL")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn connection_refused_maps_to_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener); // release the port so that requests fail with ECONNREFUSED

        Runtime::new().unwrap().block_on(async {
            let client = Client::builder().no_proxy().build().unwrap();
            let error = client.get(format!("http://{addr}")).send().await.unwrap_err();

            let mapped: PayPalError = InfraError::from(error).into();
            match mapped {
                PayPalError::Network(msg) => assert!(msg.contains("connection")),
                other => panic!("expected network error, got {:?}", other),
            }
        });
    }

    #[test]
    fn http_status_error_maps_to_network_error() {
        Runtime::new().unwrap().block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(StatusCode::BAD_GATEWAY))
                .mount(&server)
                .await;

            let client = Client::builder().no_proxy().build().unwrap();
            let error =
                client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

            let mapped: PayPalError = InfraError::from(error).into();
            match mapped {
                PayPalError::Network(msg) => assert!(msg.contains("502")),
                other => panic!("expected network error, got {:?}", other),
            }
        });
    }
}
