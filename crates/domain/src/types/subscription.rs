//! Subscription resources
//!
//! Covers `/v1/billing/subscriptions`: the create request, the subscription
//! itself, status-change bodies and the transaction listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::billing::BillingInfo;
use super::common::{ApplicationContext, LinkDescription, Money, Subscriber};

/// Body of `POST /v1/billing/subscriptions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSubscriptionRequest {
    pub plan_id: String,
    /// Defaults to the current time on the provider side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    /// Numeric string, 1 to 32 characters
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub quantity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriber: Option<Subscriber>,
    /// Renew automatically once the billing cycles complete
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub auto_renewal: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_context: Option<ApplicationContext>,
}

impl CreateSubscriptionRequest {
    pub fn new(plan_id: impl Into<String>) -> Self {
        Self { plan_id: plan_id.into(), ..Self::default() }
    }
}

/// Lifecycle state of a subscription.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    /// Created, waiting for buyer approval
    ApprovalPending,
    /// Approved by the buyer
    Approved,
    Active,
    Suspended,
    Cancelled,
    Expired,
    #[default]
    #[serde(other)]
    Unknown,
}

impl SubscriptionStatus {
    /// Whether the subscriber is currently being billed.
    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}

/// A billing subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub status: SubscriptionStatus,
    /// Reason or note for the last status change, at most 128 characters
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status_change_note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_update_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub plan_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub quantity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriber: Option<Subscriber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_info: Option<BillingInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkDescription>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub auto_renewal: bool,
}

impl Subscription {
    /// The `approve` link the buyer must visit, if the provider returned one.
    pub fn approval_link(&self) -> Option<&str> {
        self.links.iter().find(|link| link.rel == "approve").map(|link| link.href.as_str())
    }
}

/// Body of the activate, cancel and suspend endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChangeRequest {
    /// 1 to 128 characters
    pub reason: String,
}

impl StatusChangeRequest {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Completed,
    Declined,
    PartiallyRefunded,
    Pending,
    Refunded,
    #[serde(other)]
    Unknown,
}

/// Gross, fee and net amounts of one transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountWithBreakdown {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_amount: Option<Money>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_with_breakdown: Option<AmountWithBreakdown>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_name: Option<super::common::Name>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub payer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
}

/// Response of `GET /v1/billing/subscriptions/{id}/transactions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTransactionsResponse {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkDescription>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_request_omits_empty_fields() {
        let request = CreateSubscriptionRequest::new("P-5ML4271244454362WXNWU5NQ");
        let encoded = serde_json::to_value(&request).unwrap();

        assert_eq!(encoded, json!({"plan_id": "P-5ML4271244454362WXNWU5NQ"}));
    }

    #[test]
    fn subscription_decodes_minimal_body() {
        let subscription: Subscription =
            serde_json::from_str(r#"{"id":"I-BW452GLLEP1G","status":"APPROVAL_PENDING"}"#).unwrap();

        assert_eq!(subscription.id, "I-BW452GLLEP1G");
        assert_eq!(subscription.status, SubscriptionStatus::ApprovalPending);
        assert!(subscription.billing_info.is_none());
        assert!(subscription.links.is_empty());
    }

    #[test]
    fn unknown_status_does_not_fail_decoding() {
        let subscription: Subscription =
            serde_json::from_str(r#"{"id":"I-1","status":"ON_HOLD"}"#).unwrap();

        assert_eq!(subscription.status, SubscriptionStatus::Unknown);
        assert!(!subscription.status.is_active());
        assert!(SubscriptionStatus::Active.is_active());
    }

    #[test]
    fn approval_link_is_found_by_rel() {
        let subscription: Subscription = serde_json::from_value(json!({
            "id": "I-1",
            "status": "APPROVAL_PENDING",
            "links": [
                {"href": "https://www.paypal.com/webapps/billing/subscriptions?ba_token=BA-1", "rel": "approve", "method": "GET"},
                {"href": "https://api-m.paypal.com/v1/billing/subscriptions/I-1", "rel": "self", "method": "GET"}
            ]
        }))
        .unwrap();

        assert_eq!(
            subscription.approval_link(),
            Some("https://www.paypal.com/webapps/billing/subscriptions?ba_token=BA-1")
        );
    }

    #[test]
    fn transaction_list_decodes() {
        let list: ListTransactionsResponse = serde_json::from_value(json!({
            "transactions": [{
                "id": "TRFGHNJKOIIOJKNB",
                "status": "COMPLETED",
                "amount_with_breakdown": {
                    "gross_amount": {"currency_code": "USD", "value": "10.00"},
                    "fee_amount": {"currency_code": "USD", "value": "1.00"},
                    "net_amount": {"currency_code": "USD", "value": "9.00"}
                },
                "payer_name": {"given_name": "John", "surname": "Doe"},
                "payer_email": "customer@example.com",
                "time": "2018-03-16T07:40:20.940Z"
            }],
            "total_items": 1,
            "total_pages": 1
        }))
        .unwrap();

        assert_eq!(list.transactions.len(), 1);
        let tx = &list.transactions[0];
        assert_eq!(tx.status, Some(TransactionStatus::Completed));
        assert_eq!(
            tx.amount_with_breakdown.as_ref().and_then(|a| a.net_amount.as_ref()).map(|m| m.value.as_str()),
            Some("9.00")
        );
    }
}
