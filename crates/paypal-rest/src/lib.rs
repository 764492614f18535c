//! # paypal-rest
//!
//! Async client for the PayPal v1 REST API.
//!
//! [`Client`] owns the oauth2 client-credentials flow: the first
//! authenticated call exchanges the app's id and secret for an access
//! token, caches it, and refreshes it once half its reported lifetime
//! has passed. On top of that sit the resource operations, grouped the
//! way the service groups its endpoints:
//!
//! - **payments** - create/execute/list, plus sales, authorizations,
//!   captures, refunds and orders
//! - **billing** - plans and the agreements that subscribe payers to them
//! - **invoicing** - draft, send, remind, cancel, record outside payments
//! - **vault** - stored credit cards
//! - **webhooks** - registrations and the events they deliver
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paypal_core::{Amount, Payer, Payment, PaymentIntent, PaymentMethod};
//! use paypal_core::payments::Transaction;
//! use paypal_rest::Client;
//!
//! // Reads PAYPAL_CLIENT_ID, PAYPAL_CLIENT_SECRET, PAYPAL_ENVIRONMENT
//! let client = Client::from_env()?;
//!
//! let payment = Payment {
//!     intent: Some(PaymentIntent::Sale),
//!     payer: Some(Payer::new(PaymentMethod::Paypal)),
//!     transactions: vec![Transaction {
//!         amount: Some(Amount::new("USD", "7.47")),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! let created = client.create_payment(&payment).await?;
//! // Send the payer to the approval_url link, then finalize:
//! let payment = client
//!     .execute_payment(created.id.as_deref().unwrap(), "7E7MGXCWTTKK2", &[])
//!     .await?;
//! ```

pub mod auth;
pub mod authorizations;
pub mod billing;
pub mod captures;
pub mod client;
pub mod config;
pub mod invoicing;
pub mod orders;
pub mod payments;
pub mod refunds;
pub mod sales;
pub mod vault;
pub mod webhooks;

#[cfg(test)]
mod testing;

// Re-exports
pub use auth::AccessToken;
pub use client::Client;
pub use config::{Config, Environment};

pub use paypal_core;
