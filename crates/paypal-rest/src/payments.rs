//! # Payments
//!
//! Create a payment, execute it once the payer has approved, and look
//! payments up singly or as a filtered list.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use paypal_core::payments::{Payment, Transaction};
use paypal_core::Result;

use crate::client::Client;

#[derive(Serialize)]
struct ExecutePaymentReq<'a> {
    payer_id: &'a str,
    transactions: &'a [Transaction],
}

#[derive(Deserialize)]
struct PaymentList {
    #[serde(default)]
    payments: Vec<Payment>,
}

impl Client {
    /// Create a payment.
    ///
    /// For `PaymentMethod::Paypal` the response carries an `approval_url`
    /// link the payer must visit before the payment can be executed.
    pub async fn create_payment(&self, payment: &Payment) -> Result<Payment> {
        let request = self.request(Method::POST, &self.config.url("/payments/payment"), payment)?;
        self.send_with_auth(request).await
    }

    /// Execute an approved payment with the payer id the approval redirect
    /// carried; `transactions` may adjust the amounts
    pub async fn execute_payment(
        &self,
        payment_id: &str,
        payer_id: &str,
        transactions: &[Transaction],
    ) -> Result<Payment> {
        let body = ExecutePaymentReq {
            payer_id,
            transactions,
        };
        let request = self.request(
            Method::POST,
            &self.config.url(&format!("/payments/payment/{payment_id}/execute")),
            &body,
        )?;
        self.send_with_auth(request).await
    }

    pub async fn get_payment(&self, payment_id: &str) -> Result<Payment> {
        let request = self.request_empty(
            Method::GET,
            &self.config.url(&format!("/payments/payment/{payment_id}")),
        )?;
        self.send_with_auth(request).await
    }

    /// List payments, newest first by default. Supported filter keys
    /// include `count`, `start_id`, `start_index`, `start_time`,
    /// `end_time`, `sort_by` and `sort_order`
    pub async fn list_payments(&self, filter: &[(&str, &str)]) -> Result<Vec<Payment>> {
        let url = self.url_with_query("/payments/payment", filter)?;
        let request = self.request_empty(Method::GET, &url)?;
        let list: PaymentList = self.send_with_auth(request).await?;
        Ok(list.payments)
    }
}
