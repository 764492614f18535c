//! # paypal-core
//!
//! Domain types for the PayPal v1 REST API.
//!
//! This crate provides:
//! - `Error` and `ApiError` for typed error handling across the client
//! - `Money` and `Amount` for the service's string-valued currency pairs
//! - `Payment`, `Sale`, `Authorization`, `Capture`, `Refund`, `Order` for
//!   the payments family
//! - `Plan` and `Agreement` for subscription billing
//! - `Invoice` with its party, cost and payment-record objects
//! - `Webhook` and `Event` with typed resource dispatch
//! - `ZonedDate` / `ZonedDatetime` for the zone-labelled date formats
//!   invoicing uses
//!
//! ## Example
//!
//! ```rust,ignore
//! use paypal_core::{Amount, Payer, Payment, PaymentIntent, PaymentMethod, Transaction};
//!
//! // Assemble a payment for the payer to approve
//! let payment = Payment {
//!     intent: Some(PaymentIntent::Sale),
//!     payer: Some(Payer::new(PaymentMethod::Paypal)),
//!     transactions: vec![Transaction {
//!         amount: Some(Amount::new("USD", "7.47")),
//!         description: Some("A shirt".into()),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//! ```

pub mod billing;
pub mod common;
pub mod datetime;
pub mod error;
pub mod invoicing;
pub mod money;
pub mod payments;
pub mod webhooks;

// Re-exports for convenience
pub use common::{Address, AddressType, Link, Patch, PatchOperation, Payee, Phone, ShippingAddress};
pub use datetime::{ParseDateError, ZonedDate, ZonedDatetime};
pub use error::{ApiError, Error, ErrorDetail, Result};
pub use money::{Amount, AmountDetails, Money};
pub use payments::{
    Authorization, Capture, CreditCard, CreditCardToken, Order, Payer, Payment, PaymentIntent,
    PaymentMethod, Refund, RelatedResource, Sale, Transaction,
};
