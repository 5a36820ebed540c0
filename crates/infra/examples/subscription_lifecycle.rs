//! Subscription Lifecycle Example
//!
//! Creates a subscription for a plan, prints the approval link, and lists
//! the account's webhooks.
//!
//! Credentials come from the environment or a config file, see
//! `paypal_sdk_infra::config`:
//!
//! ```bash
//! export PAYPAL_CLIENT_ID=...
//! export PAYPAL_SECRET=...
//! export RUST_LOG=paypal_sdk_infra=debug
//! cargo run -p paypal-sdk-infra --example subscription_lifecycle -- P-5ML4271244454362WXNWU5NQ
//! ```

use paypal_sdk_domain::{AnchorType, CreateSubscriptionRequest};
use paypal_sdk_infra::{config, PayPalClient, TracingRecorder};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let plan_id = std::env::args().nth(1).ok_or("usage: subscription_lifecycle <plan-id>")?;

    println!("Subscription Lifecycle Example");
    println!("==============================\n");

    let mut client = PayPalClient::builder(config::load()?).recorder(TracingRecorder).build()?;

    let subscription = client.create_subscription(&CreateSubscriptionRequest::new(plan_id))?;
    println!("Created subscription {} ({:?})", subscription.id, subscription.status);
    if let Some(link) = subscription.approval_link() {
        println!("Buyer approval: {link}");
    }

    let webhooks = client.list_webhooks(Some(AnchorType::Account))?;
    println!("\n{} webhook(s) registered:", webhooks.webhooks.len());
    for hook in &webhooks.webhooks {
        let names: Vec<&str> = hook.event_types.iter().map(|e| e.name.as_str()).collect();
        println!("  {} -> {} [{}]", hook.id, hook.url, names.join(", "));
    }

    Ok(())
}
