//! Shared schema objects referenced by several resources

use serde::{Deserialize, Serialize};

/// Currency amount. `value` is a decimal string, e.g. `"123.45"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// ISO 4217 code, e.g. `USD`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub currency_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}

impl Money {
    pub fn new(currency_code: impl Into<String>, value: impl Into<String>) -> Self {
        Self { currency_code: currency_code.into(), value: value.into() }
    }
}

/// HATEOAS link attached to most responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDescription {
    pub href: String,
    pub rel: String,
    /// GET, POST, PUT, DELETE, HEAD, CONNECT, OPTIONS or PATCH
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, rename = "encType", skip_serializing_if = "Option::is_none")]
    pub enc_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub given_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub surname: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub middle_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub suffix: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alternate_full_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub full_name: String,
}

/// The subscriber of a subscription. Only `given_name` and `surname` of the
/// name are honored by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Name>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email_address: String,
    /// Assigned by PayPal, read only
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub payer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<ShippingDetailName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressPortable>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDetailName {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub full_name: String,
}

/// Portable postal address. Subscriptions accept the two address lines, the
/// two admin areas, postal code and country code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPortable {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address_line_1: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address_line_2: String,
    /// City, town or village
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub admin_area_2: String,
    /// Highest-level subdivision: state, province, prefecture
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub admin_area_1: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub postal_code: String,
    /// Two-letter country code, e.g. `GB`
    pub country_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingPreference {
    /// Use the customer-provided address on file
    GetFromFile,
    /// Redact the address; recommended for digital goods
    NoShipping,
    /// Use the merchant-provided address
    SetProvidedAddress,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserAction {
    /// Show a "Continue" button; the merchant activates the subscription
    Continue,
    SubscribeNow,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayeePreferred {
    Unrestricted,
    ImmediatePaymentRequired,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Defaults to `PAYPAL` on the provider side
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub payer_selected: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee_preferred: Option<PayeePreferred>,
}

/// Customizes the payer experience during subscription approval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationContext {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub brand_name: String,
    /// BCP 47 tag such as `da-DK` or `zh-CN`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub locale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_preference: Option<ShippingPreference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_action: Option<UserAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    pub return_url: String,
    pub cancel_url: String,
}
