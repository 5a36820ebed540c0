//! Subscription operations under `/v1/billing/subscriptions`

use chrono::{DateTime, SecondsFormat, Utc};
use http::header::HeaderName;
use http::Method;
use paypal_sdk_core::{build_request, ApiRequest};
use paypal_sdk_domain::constants::{PREFER_REPRESENTATION, SUBSCRIPTIONS_PATH};
use paypal_sdk_domain::{
    CreateSubscriptionRequest, ListTransactionsResponse, PatchDocument, PayPalError, Result,
    StatusChangeRequest, Subscription,
};
use tracing::instrument;

use super::client::PayPalClient;

impl PayPalClient {
    /// Create a subscription. The provider returns the full representation.
    ///
    /// Triggers `BILLING.SUBSCRIPTION.CREATED`.
    #[instrument(skip(self, request), fields(plan_id = %request.plan_id))]
    pub fn create_subscription(
        &mut self,
        request: &CreateSubscriptionRequest,
    ) -> Result<Subscription> {
        let mut api_request = self.new_request(Method::POST, SUBSCRIPTIONS_PATH, Some(request))?;
        api_request.set_header(HeaderName::from_static("prefer"), PREFER_REPRESENTATION)?;
        self.send_json(api_request)
    }

    #[instrument(skip(self))]
    pub fn show_subscription_details(&mut self, subscription_id: &str) -> Result<Subscription> {
        let url = self.resource_url(SUBSCRIPTIONS_PATH, subscription_id, &[])?;
        self.send_json(ApiRequest::new(Method::GET, url))
    }

    /// Apply a JSON-Patch document. Only `subscriber.shipping_address`,
    /// `shipping_amount`, `billing_info.outstanding_balance` and a few other
    /// members are patchable on the provider side.
    ///
    /// PayPal answers 204 on success, in which case the returned subscription
    /// is empty; call [`show_subscription_details`](Self::show_subscription_details)
    /// to read the new state.
    #[instrument(skip(self, patch), fields(operations = patch.len()))]
    pub fn update_subscription(
        &mut self,
        subscription_id: &str,
        patch: &PatchDocument,
    ) -> Result<Subscription> {
        let url = self.resource_url(SUBSCRIPTIONS_PATH, subscription_id, &[])?;
        self.send_json(build_request(Method::PATCH, url, Some(patch))?)
    }

    /// Triggers `BILLING.SUBSCRIPTION.ACTIVATED`; expects 204.
    #[instrument(skip(self))]
    pub fn activate_subscription(&mut self, subscription_id: &str, reason: &str) -> Result<()> {
        self.change_status(subscription_id, "activate", reason)
    }

    /// Triggers `BILLING.SUBSCRIPTION.CANCELLED`; expects 204.
    #[instrument(skip(self))]
    pub fn cancel_subscription(&mut self, subscription_id: &str, reason: &str) -> Result<()> {
        self.change_status(subscription_id, "cancel", reason)
    }

    /// Triggers `BILLING.SUBSCRIPTION.SUSPENDED`; expects 204.
    #[instrument(skip(self))]
    pub fn suspend_subscription(&mut self, subscription_id: &str, reason: &str) -> Result<()> {
        self.change_status(subscription_id, "suspend", reason)
    }

    fn change_status(&mut self, subscription_id: &str, action: &str, reason: &str) -> Result<()> {
        let url = self.resource_url(SUBSCRIPTIONS_PATH, subscription_id, &[action])?;
        let body = StatusChangeRequest::new(reason);
        self.send_no_content(build_request(Method::POST, url, Some(&body))?)
    }

    /// Transactions of a subscription between `start` and `end`.
    ///
    /// # Errors
    /// Returns `PayPalError::InvalidInput` if `start` is after `end`.
    #[instrument(skip(self))]
    pub fn list_transactions_for_subscription(
        &mut self,
        subscription_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ListTransactionsResponse> {
        if start > end {
            return Err(PayPalError::InvalidInput(format!(
                "transaction window starts after it ends ({start} > {end})"
            )));
        }

        let mut url = self.resource_url(SUBSCRIPTIONS_PATH, subscription_id, &["transactions"])?;
        url.query_pairs_mut()
            .append_pair("start_time", &start.to_rfc3339_opts(SecondsFormat::Millis, true))
            .append_pair("end_time", &end.to_rfc3339_opts(SecondsFormat::Millis, true));

        self.send_json(ApiRequest::new(Method::GET, url))
    }
}
