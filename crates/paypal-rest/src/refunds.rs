//! # Refunds
//!
//! Look up refunds raised against sales and captures.

use reqwest::Method;

use paypal_core::payments::Refund;
use paypal_core::Result;

use crate::client::Client;

impl Client {
    pub async fn get_refund(&self, refund_id: &str) -> Result<Refund> {
        let request = self.request_empty(
            Method::GET,
            &self.config.url(&format!("/payments/refund/{refund_id}")),
        )?;
        self.send_with_auth(request).await
    }
}
