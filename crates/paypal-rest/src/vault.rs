//! # Vault
//!
//! Store card details with the service and charge them later through a
//! [`CreditCardToken`](paypal_core::CreditCardToken) funding instrument
//! instead of shipping raw numbers with every payment.

use reqwest::Method;

use paypal_core::payments::CreditCard;
use paypal_core::{Patch, Result};

use crate::client::Client;

impl Client {
    /// Store a credit card. The response echoes the card with the
    /// number masked and an id to charge it by
    pub async fn store_credit_card(&self, card: &CreditCard) -> Result<CreditCard> {
        let request = self.request(Method::POST, &self.config.url("/vault/credit-card"), card)?;
        self.send_with_auth(request).await
    }

    pub async fn get_stored_credit_card(&self, card_id: &str) -> Result<CreditCard> {
        let request = self.request_empty(
            Method::GET,
            &self.config.url(&format!("/vault/credit-card/{card_id}")),
        )?;
        self.send_with_auth(request).await
    }

    /// Replace fields of a stored card, e.g. a new expiry or billing
    /// address
    pub async fn update_stored_credit_card(
        &self,
        card_id: &str,
        card: &CreditCard,
    ) -> Result<CreditCard> {
        let body = Patch::replace(card);
        let request = self.request(
            Method::PATCH,
            &self.config.url(&format!("/vault/credit-card/{card_id}")),
            &body,
        )?;
        self.send_with_auth(request).await
    }

    /// Delete a stored card. Sales already made with it keep a limited
    /// view of the card
    pub async fn delete_stored_credit_card(&self, card_id: &str) -> Result<()> {
        let request = self.request_empty(
            Method::DELETE,
            &self.config.url(&format!("/vault/credit-card/{card_id}")),
        )?;
        self.send_empty_with_auth(request).await
    }
}
