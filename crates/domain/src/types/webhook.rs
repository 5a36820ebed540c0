//! Webhook registration resources under `/v1/notifications/webhooks`

use serde::{Deserialize, Serialize};

use super::common::LinkDescription;

/// Which webhooks a listing returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorType {
    /// Webhooks of the calling application (provider default)
    Application,
    /// Every webhook on the merchant account
    Account,
}

crate::impl_wire_enum_conversions!(AnchorType {
    Application => "APPLICATION",
    Account => "ACCOUNT",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceVersion {
    pub resource_version: String,
}

/// An event a webhook subscribes to. Use `"*"` as the name for all events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventType {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_versions: Vec<ResourceVersion>,
}

impl EventType {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }
}

/// Body of `POST /v1/notifications/webhooks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWebhookRequest {
    pub url: String,
    pub event_types: Vec<EventType>,
}

impl CreateWebhookRequest {
    pub fn new<I, S>(url: impl Into<String>, event_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            url: url.into(),
            event_types: event_types.into_iter().map(EventType::named).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub event_types: Vec<EventType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkDescription>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub webhooks: Vec<Webhook>,
}
