//! # Orders
//!
//! Work with order payments: authorize and capture against them, void
//! them, or refund a capture taken for one.

use reqwest::Method;
use serde::Serialize;

use paypal_core::money::Amount;
use paypal_core::payments::{Authorization, Capture, Order, Refund};
use paypal_core::Result;

use crate::authorizations::CaptureReq;
use crate::client::Client;

#[derive(Serialize)]
struct AmountReq<'a> {
    amount: &'a Amount,
}

impl Client {
    pub async fn get_order(&self, order_id: &str) -> Result<Order> {
        let request = self.request_empty(
            Method::GET,
            &self.config.url(&format!("/payments/orders/{order_id}")),
        )?;
        self.send_with_auth(request).await
    }

    /// Place a hold for part or all of the order amount
    pub async fn authorize_order(&self, order_id: &str, amount: &Amount) -> Result<Authorization> {
        let body = AmountReq { amount };
        let request = self.request(
            Method::POST,
            &self.config.url(&format!("/payments/orders/{order_id}/authorize")),
            &body,
        )?;
        self.send_with_auth(request).await
    }

    /// Capture against the order, directly or after an authorization
    pub async fn capture_order(
        &self,
        order_id: &str,
        amount: &Amount,
        is_final_capture: bool,
    ) -> Result<Capture> {
        let body = CaptureReq {
            amount,
            is_final_capture,
        };
        let request = self.request(
            Method::POST,
            &self.config.url(&format!("/payments/orders/{order_id}/capture")),
            &body,
        )?;
        self.send_with_auth(request).await
    }

    /// Void an order that has no completed capture against it
    pub async fn void_order(&self, order_id: &str) -> Result<Order> {
        let request = self.request_empty(
            Method::POST,
            &self.config.url(&format!("/payments/orders/{order_id}/do-void")),
        )?;
        self.send_with_auth(request).await
    }

    /// Refund a capture taken for an order, see [`Client::refund_capture`]
    pub async fn refund_order(&self, capture_id: &str, amount: Option<&Amount>) -> Result<Refund> {
        self.refund_capture(capture_id, amount).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{authed_client, TEST_BEARER};
    use paypal_core::payments::{AuthorizationState, OrderState};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_order() {
        let server = MockServer::start().await;
        let client = authed_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/v1/payments/orders/O-4VR15106G7281413P"))
            .and(header("Authorization", TEST_BEARER))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "O-4VR15106G7281413P",
                "state": "pending",
                "pending_reason": "ORDER",
                "amount": {"currency": "USD", "total": "106.00"}
            })))
            .mount(&server)
            .await;

        let order = client.get_order("O-4VR15106G7281413P").await.unwrap();
        assert_eq!(order.state, Some(OrderState::Pending));
        assert_eq!(
            order.amount.as_ref().map(|a| a.total.as_str()),
            Some("106.00")
        );
    }

    #[tokio::test]
    async fn test_authorize_order_posts_amount() {
        let server = MockServer::start().await;
        let client = authed_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/v1/payments/orders/O-4VR15106G7281413P/authorize"))
            .and(body_json(json!({"amount": {"currency": "USD", "total": "106.00"}})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "8AA831015G517922L",
                "state": "authorized"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let authorization = client
            .authorize_order("O-4VR15106G7281413P", &Amount::new("USD", "106.00"))
            .await
            .unwrap();
        assert_eq!(authorization.state, Some(AuthorizationState::Authorized));
    }

    #[tokio::test]
    async fn test_void_order_uses_do_void_path() {
        let server = MockServer::start().await;
        let client = authed_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/v1/payments/orders/O-4VR15106G7281413P/do-void"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "O-4VR15106G7281413P",
                "state": "voided"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let order = client.void_order("O-4VR15106G7281413P").await.unwrap();
        assert_eq!(order.state, Some(OrderState::Voided));
    }
}
