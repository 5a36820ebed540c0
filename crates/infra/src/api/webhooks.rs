//! Webhook operations under `/v1/notifications/webhooks`

use http::Method;
use paypal_sdk_core::ApiRequest;
use paypal_sdk_domain::constants::WEBHOOKS_PATH;
use paypal_sdk_domain::{AnchorType, CreateWebhookRequest, Result, Webhook, WebhookList};
use tracing::instrument;

use super::client::PayPalClient;

impl PayPalClient {
    /// Register a webhook listener for the given event types.
    #[instrument(skip(self, request), fields(url = %request.url))]
    pub fn create_webhook(&mut self, request: &CreateWebhookRequest) -> Result<Webhook> {
        let api_request = self.new_request(Method::POST, WEBHOOKS_PATH, Some(request))?;
        self.send_json(api_request)
    }

    /// List webhooks. Without an anchor type the provider lists the calling
    /// application's webhooks.
    #[instrument(skip(self))]
    pub fn list_webhooks(&mut self, anchor_type: Option<AnchorType>) -> Result<WebhookList> {
        let mut url = self.url_for(WEBHOOKS_PATH)?;
        if let Some(anchor_type) = anchor_type {
            url.query_pairs_mut().append_pair("anchor_type", anchor_type.as_str());
        }
        self.send_json(ApiRequest::new(Method::GET, url))
    }

    /// Delete a webhook; expects 204.
    #[instrument(skip(self))]
    pub fn delete_webhook(&mut self, webhook_id: &str) -> Result<()> {
        let url = self.resource_url(WEBHOOKS_PATH, webhook_id, &[])?;
        self.send_no_content(ApiRequest::new(Method::DELETE, url))
    }
}

#[cfg(test)]
mod tests {
    use paypal_sdk_domain::{ClientConfig, PayPalError};
    use serde_json::json;

    use super::*;
    use crate::testing::ScriptedTransport;

    fn authorized_client(transport: &ScriptedTransport) -> PayPalClient {
        let mut client =
            PayPalClient::builder(ClientConfig::new("id", "secret", "https://api-m.paypal.com"))
                .transport(transport.clone())
                .build()
                .unwrap();
        client.set_access_token("token");
        client
    }

    #[test]
    fn list_with_account_anchor_adds_query() {
        let transport = ScriptedTransport::new();
        transport.push_json(200, &json!({"webhooks": []}));
        let mut client = authorized_client(&transport);

        client.list_webhooks(Some(AnchorType::Account)).unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path(), "/v1/notifications/webhooks");
        assert_eq!(request.url.query(), Some("anchor_type=ACCOUNT"));
    }

    #[test]
    fn list_without_anchor_has_no_query() {
        let transport = ScriptedTransport::new();
        transport.push_json(200, &json!({}));
        let mut client = authorized_client(&transport);

        let list = client.list_webhooks(None).unwrap();
        assert!(list.webhooks.is_empty());
        assert_eq!(transport.requests()[0].url.query(), None);
    }

    #[test]
    fn create_posts_event_types() {
        let transport = ScriptedTransport::new();
        transport.push_json(
            201,
            &json!({
                "id": "0EH40505U7160970P",
                "url": "https://example.com/hooks",
                "event_types": [{"name": "PAYMENT.SALE.COMPLETED", "description": "A sale completed."}]
            }),
        );
        let mut client = authorized_client(&transport);

        let webhook = client
            .create_webhook(&CreateWebhookRequest::new(
                "https://example.com/hooks",
                ["PAYMENT.SALE.COMPLETED"],
            ))
            .unwrap();

        assert_eq!(webhook.id, "0EH40505U7160970P");
        assert_eq!(webhook.event_types[0].name, "PAYMENT.SALE.COMPLETED");
    }

    #[test]
    fn delete_uses_id_path_and_rejects_empty_id() {
        let transport = ScriptedTransport::new();
        transport.push_response(204, "");
        let mut client = authorized_client(&transport);

        client.delete_webhook("5GP028458E2496506").unwrap();
        assert_eq!(transport.requests()[0].method, Method::DELETE);
        assert_eq!(transport.requests()[0].path(), "/v1/notifications/webhooks/5GP028458E2496506");

        assert!(matches!(client.delete_webhook(""), Err(PayPalError::InvalidInput(_))));
        assert_eq!(transport.request_count(), 1);
    }
}
