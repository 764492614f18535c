//! # Invoicing
//!
//! Invoices are created in `DRAFT` and become payable once sent. Sent
//! invoices can be reminded, cancelled, or marked paid or refunded when
//! money moved outside the service; drafts can simply be deleted.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use paypal_core::invoicing::{Invoice, InvoiceSearch, Notification, PaymentDetailMethod};
use paypal_core::{Result, ZonedDatetime};

use crate::client::Client;

#[derive(Deserialize)]
struct InvoiceList {
    #[serde(default)]
    invoices: Vec<Invoice>,
}

#[derive(Serialize)]
struct RecordPaymentReq<'a> {
    method: PaymentDetailMethod,

    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<&'a ZonedDatetime>,

    note: &'a str,
}

#[derive(Serialize)]
struct RecordRefundReq<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<&'a ZonedDatetime>,

    note: &'a str,
}

impl Client {
    /// Create a draft invoice. It carries no obligation until sent
    pub async fn create_invoice(&self, invoice: &Invoice) -> Result<Invoice> {
        let request = self.request(Method::POST, &self.config.url("/invoicing/invoices"), invoice)?;
        self.send_with_auth(request).await
    }

    /// Send a draft invoice to the payer. The service answers 202 and
    /// delivers the mail asynchronously
    pub async fn send_invoice(&self, invoice_id: &str) -> Result<()> {
        let request = self.request_empty(
            Method::POST,
            &self.config.url(&format!("/invoicing/invoices/{invoice_id}/send")),
        )?;
        self.send_empty_with_auth(request).await
    }

    /// Replace an invoice wholesale. Works on drafts and, with
    /// restrictions, on sent invoices
    pub async fn update_invoice(&self, invoice_id: &str, invoice: &Invoice) -> Result<Invoice> {
        let request = self.request(
            Method::PUT,
            &self.config.url(&format!("/invoicing/invoices/{invoice_id}")),
            invoice,
        )?;
        self.send_with_auth(request).await
    }

    pub async fn get_invoice(&self, invoice_id: &str) -> Result<Invoice> {
        let request = self.request_empty(
            Method::GET,
            &self.config.url(&format!("/invoicing/invoices/{invoice_id}")),
        )?;
        self.send_with_auth(request).await
    }

    /// List the caller's invoices. Supported filter keys include `page`,
    /// `page_size` and `total_count_required`
    pub async fn list_invoices(&self, filter: &[(&str, &str)]) -> Result<Vec<Invoice>> {
        let url = self.url_with_query("/invoicing/invoices", filter)?;
        let request = self.request_empty(Method::GET, &url)?;
        let list: InvoiceList = self.send_with_auth(request).await?;
        Ok(list.invoices)
    }

    /// Search invoices by the criteria set on `search`; unset fields do
    /// not constrain the result
    pub async fn search_invoices(&self, search: &InvoiceSearch) -> Result<Vec<Invoice>> {
        let request = self.request(Method::POST, &self.config.url("/invoicing/search"), search)?;
        let list: InvoiceList = self.send_with_auth(request).await?;
        Ok(list.invoices)
    }

    /// Remind the payer of a sent invoice. The remind endpoint rejects
    /// `send_to_payer`, so the flag is cleared before dispatch
    pub async fn send_invoice_reminder(
        &self,
        invoice_id: &str,
        notification: &Notification,
    ) -> Result<()> {
        let mut notification = notification.clone();
        notification.send_to_payer = false;
        let request = self.request(
            Method::POST,
            &self.config.url(&format!("/invoicing/invoices/{invoice_id}/remind")),
            &notification,
        )?;
        self.send_empty_with_auth(request).await
    }

    /// Cancel a sent invoice, optionally notifying the payer
    pub async fn cancel_invoice(
        &self,
        invoice_id: &str,
        notification: &Notification,
    ) -> Result<()> {
        let request = self.request(
            Method::POST,
            &self.config.url(&format!("/invoicing/invoices/{invoice_id}/cancel")),
            notification,
        )?;
        self.send_empty_with_auth(request).await
    }

    /// Delete a draft invoice. Sent invoices must be cancelled instead;
    /// the deleted invoice's number becomes reusable
    pub async fn delete_invoice(&self, invoice_id: &str) -> Result<()> {
        let request = self.request_empty(
            Method::DELETE,
            &self.config.url(&format!("/invoicing/invoices/{invoice_id}")),
        )?;
        self.send_empty_with_auth(request).await
    }

    /// Fetch the QR code for a sent invoice as raw PNG bytes. `width`
    /// and `height` are in pixels, 150 to 500
    pub async fn invoice_qr_code(
        &self,
        invoice_id: &str,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>> {
        let width = width.to_string();
        let height = height.to_string();
        let url = self.url_with_query(
            &format!("/invoicing/invoices/{invoice_id}/qr-code"),
            &[("width", width.as_str()), ("height", height.as_str())],
        )?;
        let request = self.request_empty(Method::GET, &url)?;
        self.send_bytes_with_auth(request).await
    }

    /// Mark an invoice as paid outside the service, e.g. by check or
    /// bank transfer
    pub async fn record_invoice_payment(
        &self,
        invoice_id: &str,
        method: PaymentDetailMethod,
        date: Option<&ZonedDatetime>,
        note: &str,
    ) -> Result<()> {
        let body = RecordPaymentReq { method, date, note };
        let request = self.request(
            Method::POST,
            &self
                .config
                .url(&format!("/invoicing/invoices/{invoice_id}/record-payment")),
            &body,
        )?;
        self.send_empty_with_auth(request).await
    }

    /// Mark an invoice as refunded outside the service
    pub async fn record_invoice_refund(
        &self,
        invoice_id: &str,
        date: Option<&ZonedDatetime>,
        note: &str,
    ) -> Result<()> {
        let body = RecordRefundReq { date, note };
        let request = self.request(
            Method::POST,
            &self
                .config
                .url(&format!("/invoicing/invoices/{invoice_id}/record-refund")),
            &body,
        )?;
        self.send_empty_with_auth(request).await
    }
}
