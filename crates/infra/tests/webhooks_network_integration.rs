//! Integration tests for webhook operations over real HTTP

#[path = "support.rs"]
mod support;

use paypal_sdk_domain::{AnchorType, CreateWebhookRequest};
use serde_json::json;
use support::{mount_token, with_client};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn list_webhooks_sends_anchor_type() {
    let server = MockServer::start().await;
    mount_token(&server, "webhook-token", 32400, 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/notifications/webhooks"))
        .and(query_param("anchor_type", "ACCOUNT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "webhooks": [{
                "id": "40Y916089Y8324740",
                "url": "https://example.com/example_webhook",
                "event_types": [{"name": "PAYMENT.SALE.COMPLETED", "description": "A sale completed."}]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let list = with_client(&server, |client| client.list_webhooks(Some(AnchorType::Account)))
        .await
        .expect("webhooks should be listed");

    assert_eq!(list.webhooks.len(), 1);
    assert_eq!(list.webhooks[0].event_types[0].name, "PAYMENT.SALE.COMPLETED");
}

#[tokio::test(flavor = "multi_thread")]
async fn list_webhooks_without_anchor_sends_no_query() {
    let server = MockServer::start().await;
    mount_token(&server, "webhook-token", 32400, 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/notifications/webhooks"))
        .and(|request: &Request| request.url.query().is_none())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"webhooks": []})))
        .expect(1)
        .mount(&server)
        .await;

    let list = with_client(&server, |client| client.list_webhooks(None)).await.unwrap();
    assert!(list.webhooks.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn create_and_delete_webhook() {
    let server = MockServer::start().await;
    mount_token(&server, "webhook-token", 32400, 1).await;
    Mock::given(method("POST"))
        .and(path("/v1/notifications/webhooks"))
        .and(body_json(json!({
            "url": "https://example.com/hooks/paypal",
            "event_types": [{"name": "BILLING.SUBSCRIPTION.CANCELLED"}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "0EH40505U7160970P",
            "url": "https://example.com/hooks/paypal",
            "event_types": [{"name": "BILLING.SUBSCRIPTION.CANCELLED"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/notifications/webhooks/0EH40505U7160970P"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let (created, deleted) = with_client(&server, |client| {
        let created = client.create_webhook(&CreateWebhookRequest::new(
            "https://example.com/hooks/paypal",
            ["BILLING.SUBSCRIPTION.CANCELLED"],
        ));
        let deleted = match &created {
            Ok(hook) => Some(client.delete_webhook(&hook.id)),
            Err(_) => None,
        };
        (created, deleted)
    })
    .await;

    assert_eq!(created.unwrap().id, "0EH40505U7160970P");
    assert!(matches!(deleted, Some(Ok(()))));
}
