//! Webhook event notifications
//!
//! The `resource` member of an event changes shape with `resource_type`.
//! [`EventResource`] carries the decoded payload for the resource types this
//! crate models and keeps anything else as raw JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::LinkDescription;
use super::subscription::Subscription;

/// Event type names delivered in `event_type`.
pub mod event_types {
    pub const PAYMENT_SALE_COMPLETED: &str = "PAYMENT.SALE.COMPLETED";
    pub const PAYMENT_SALE_REFUNDED: &str = "PAYMENT.SALE.REFUNDED";
    pub const PAYMENT_SALE_DENIED: &str = "PAYMENT.SALE.DENIED";
    pub const PAYMENT_SALE_PENDING: &str = "PAYMENT.SALE.PENDING";

    pub const BILLING_PLAN_CREATED: &str = "BILLING.PLAN.CREATED";

    pub const BILLING_SUBSCRIPTION_CREATED: &str = "BILLING.SUBSCRIPTION.CREATED";
    pub const BILLING_SUBSCRIPTION_SUSPENDED: &str = "BILLING.SUBSCRIPTION.SUSPENDED";
    pub const BILLING_SUBSCRIPTION_UPDATED: &str = "BILLING.SUBSCRIPTION.UPDATED";
    pub const BILLING_SUBSCRIPTION_CANCELLED: &str = "BILLING.SUBSCRIPTION.CANCELLED";
    pub const BILLING_SUBSCRIPTION_ACTIVATED: &str = "BILLING.SUBSCRIPTION.ACTIVATED";
    pub const BILLING_SUBSCRIPTION_PAYMENT_FAILED: &str = "BILLING.SUBSCRIPTION.PAYMENT.FAILED";
    pub const BILLING_SUBSCRIPTION_RENEWED: &str = "BILLING.SUBSCRIPTION.RENEWED";
}

/// `resource_type` values with a typed payload.
pub const RESOURCE_TYPE_SUBSCRIPTION: &str = "subscription";
pub const RESOURCE_TYPE_SALE: &str = "sale";

/// Amount as reported on a sale: `total` is a decimal string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleAmount {
    #[serde(default)]
    pub total: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<SaleAmountDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleAmountDetails {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subtotal: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tax: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub shipping: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub handling_fee: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFee {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub currency: String,
}

/// A completed, refunded, denied or pending payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    #[serde(default)]
    pub id: String,
    /// completed, partially_refunded, pending, refunded or denied
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<SaleAmount>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub payment_mode: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub protection_eligibility: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub protection_eligibility_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_fee: Option<TransactionFee>,
    /// Subscription id when the sale was made by a subscription
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub billing_agreement_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent_payment: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub invoice_number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub custom: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub soft_descriptor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkDescription>,
}

/// Payload of an event, selected by its `resource_type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventResource {
    Subscription(Box<Subscription>),
    Sale(Box<Sale>),
    /// A resource type without a typed model
    Other(Value),
    #[default]
    None,
}

impl EventResource {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    fn decode(resource_type: &str, resource: Option<Value>) -> serde_json::Result<Self> {
        let Some(resource) = resource.filter(|value| !value.is_null()) else {
            return Ok(Self::None);
        };

        if resource_type.eq_ignore_ascii_case(RESOURCE_TYPE_SUBSCRIPTION) {
            Ok(Self::Subscription(Box::new(serde_json::from_value(resource)?)))
        } else if resource_type.eq_ignore_ascii_case(RESOURCE_TYPE_SALE) {
            Ok(Self::Sale(Box::new(serde_json::from_value(resource)?)))
        } else {
            Ok(Self::Other(resource))
        }
    }
}

/// A webhook notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEvent")]
pub struct Event {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub event_version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub event_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(skip_serializing_if = "EventResource::is_none")]
    pub resource: EventResource,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkDescription>,
}

impl Event {
    /// The sale carried by this event, if its resource is a sale.
    pub fn sale(&self) -> Option<&Sale> {
        match &self.resource {
            EventResource::Sale(sale) => Some(&**sale),
            _ => None,
        }
    }

    /// The subscription carried by this event, if its resource is one.
    pub fn subscription(&self) -> Option<&Subscription> {
        match &self.resource {
            EventResource::Subscription(subscription) => Some(&**subscription),
            _ => None,
        }
    }

    pub fn is_type(&self, event_type: &str) -> bool {
        self.event_type == event_type
    }
}

/// Wire shape of [`Event`] before the resource is interpreted.
#[derive(Deserialize)]
struct RawEvent {
    #[serde(default)]
    id: String,
    #[serde(default)]
    create_time: Option<DateTime<Utc>>,
    #[serde(default)]
    resource_type: String,
    #[serde(default)]
    event_version: String,
    #[serde(default)]
    event_type: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    resource: Option<Value>,
    #[serde(default)]
    status: String,
    #[serde(default)]
    links: Vec<LinkDescription>,
}

impl TryFrom<RawEvent> for Event {
    type Error = serde_json::Error;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let resource = EventResource::decode(&raw.resource_type, raw.resource)?;
        Ok(Self {
            id: raw.id,
            create_time: raw.create_time,
            resource_type: raw.resource_type,
            event_version: raw.event_version,
            event_type: raw.event_type,
            summary: raw.summary,
            resource,
            status: raw.status,
            links: raw.links,
        })
    }
}
