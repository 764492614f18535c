//! # Captures
//!
//! Look up captured funds and refund them.

use reqwest::Method;

use paypal_core::money::Amount;
use paypal_core::payments::{Capture, Refund};
use paypal_core::Result;

use crate::client::Client;
use crate::sales::RefundReq;

impl Client {
    pub async fn get_capture(&self, capture_id: &str) -> Result<Capture> {
        let request = self.request_empty(
            Method::GET,
            &self.config.url(&format!("/payments/capture/{capture_id}")),
        )?;
        self.send_with_auth(request).await
    }

    /// Refund a capture. Without an amount the capture is refunded in full
    pub async fn refund_capture(
        &self,
        capture_id: &str,
        amount: Option<&Amount>,
    ) -> Result<Refund> {
        let body = RefundReq { amount };
        let request = self.request(
            Method::POST,
            &self.config.url(&format!("/payments/capture/{capture_id}/refund")),
            &body,
        )?;
        self.send_with_auth(request).await
    }
}
