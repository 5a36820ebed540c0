//! Wire types for the PayPal REST resources
//!
//! Plain data-transfer shapes. Optional members are omitted when empty so a
//! request body only carries what the caller set.

pub mod billing;
pub mod common;
pub mod event;
pub mod subscription;
pub mod token;
pub mod webhook;

pub use billing::*;
pub use common::*;
pub use event::{event_types, Event, EventResource, Sale, SaleAmount, SaleAmountDetails, TransactionFee};
pub use subscription::*;
pub use token::{TokenResponse, TokenSet};
pub use webhook::*;
