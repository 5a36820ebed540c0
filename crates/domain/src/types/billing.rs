//! Billing schedule and payment state of a subscription

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenureType {
    Regular,
    Trial,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntervalUnit {
    Day,
    Week,
    Month,
    Year,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    PaymentDenied,
    ComplianceViolation,
    PayeeAccountLockedOrClosed,
    #[serde(other)]
    Unknown,
}

/// Current billing status of a subscription. Read only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outstanding_balance: Option<Money>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cycle_executions: Vec<CycleExecution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_payment: Option<LastPaymentDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_billing_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_payment_time: Option<DateTime<Utc>>,
    /// Consecutive failed payments; resets to 0 after a successful one
    #[serde(default)]
    pub failed_payments_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_failed_payment: Option<FailedPaymentDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleExecution {
    pub tenure_type: TenureType,
    /// Order in which this cycle runs among the other cycles
    pub sequence: u32,
    pub cycles_completed: u32,
    /// 0 for infinite cycles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycles_remaining: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_pricing_scheme_version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cycles: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastPaymentDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedPaymentDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<ReasonCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_payment_retry_time: Option<DateTime<Utc>>,
}

/// One billing cycle of a plan: trial cycles run before regular ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingCycle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_scheme: Option<PricingScheme>,
    pub frequency: Frequency,
    pub tenure_type: TenureType,
    pub sequence: u32,
    /// 0 means infinite; trial cycles allow only 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cycles: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingScheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_price: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frequency {
    pub interval_unit: IntervalUnit,
    /// Defaults to 1 on the provider side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxes {
    /// Percentage of the billing amount
    pub percentage: String,
    /// Whether the tax is already included in the billing amount
    pub inclusive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPreferences {
    pub auto_bill_outstanding: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup_fee: Option<Money>,
    /// `CONTINUE` or `CANCEL`
    pub setup_fee_failure_action: String,
    /// Failed payments tolerated before the subscription is suspended
    pub payment_failure_threshold: u32,
}
