//! # Authorizations
//!
//! Work with funds held on a payer's instrument: capture them, extend the
//! hold, or release it.

use reqwest::Method;
use serde::Serialize;

use paypal_core::money::Amount;
use paypal_core::payments::{Authorization, Capture};
use paypal_core::Result;

use crate::client::Client;

#[derive(Serialize)]
pub(crate) struct CaptureReq<'a> {
    pub(crate) amount: &'a Amount,
    pub(crate) is_final_capture: bool,
}

#[derive(Serialize)]
struct AmountReq<'a> {
    amount: &'a Amount,
}

impl Client {
    pub async fn get_authorization(&self, authorization_id: &str) -> Result<Authorization> {
        let request = self.request_empty(
            Method::GET,
            &self
                .config
                .url(&format!("/payments/authorization/{authorization_id}")),
        )?;
        self.send_with_auth(request).await
    }

    /// Capture held funds. A final capture releases whatever remains of
    /// the hold
    pub async fn capture_authorization(
        &self,
        authorization_id: &str,
        amount: &Amount,
        is_final_capture: bool,
    ) -> Result<Capture> {
        let body = CaptureReq {
            amount,
            is_final_capture,
        };
        let request = self.request(
            Method::POST,
            &self
                .config
                .url(&format!("/payments/authorization/{authorization_id}/capture")),
            &body,
        )?;
        self.send_with_auth(request).await
    }

    /// Release the hold on an uncaptured authorization
    pub async fn void_authorization(&self, authorization_id: &str) -> Result<Authorization> {
        let request = self.request_empty(
            Method::POST,
            &self
                .config
                .url(&format!("/payments/authorization/{authorization_id}/void")),
        )?;
        self.send_with_auth(request).await
    }

    /// Re-authorize after the honor period lapses; only once, and only for
    /// payments the payer approved on the service's site
    pub async fn reauthorize_authorization(
        &self,
        authorization_id: &str,
        amount: &Amount,
    ) -> Result<Authorization> {
        let body = AmountReq { amount };
        let request = self.request(
            Method::POST,
            &self.config.url(&format!(
                "/payments/authorization/{authorization_id}/reauthorize"
            )),
            &body,
        )?;
        self.send_with_auth(request).await
    }
}
