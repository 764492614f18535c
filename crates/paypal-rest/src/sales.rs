//! # Sales
//!
//! Look up completed sale transactions and refund them, fully or in part.

use reqwest::Method;
use serde::Serialize;

use paypal_core::money::Amount;
use paypal_core::payments::{Refund, Sale};
use paypal_core::Result;

use crate::client::Client;

#[derive(Serialize)]
pub(crate) struct RefundReq<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) amount: Option<&'a Amount>,
}

impl Client {
    pub async fn get_sale(&self, sale_id: &str) -> Result<Sale> {
        let request = self.request_empty(
            Method::GET,
            &self.config.url(&format!("/payments/sale/{sale_id}")),
        )?;
        self.send_with_auth(request).await
    }

    /// Refund a completed sale. Without an amount the sale is refunded in
    /// full; a partial amount may be refunded repeatedly up to the total
    pub async fn refund_sale(&self, sale_id: &str, amount: Option<&Amount>) -> Result<Refund> {
        let body = RefundReq { amount };
        let request = self.request(
            Method::POST,
            &self.config.url(&format!("/payments/sale/{sale_id}/refund")),
            &body,
        )?;
        self.send_with_auth(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{authed_client, TEST_BEARER};
    use paypal_core::payments::{RefundState, SaleState};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_sale() {
        let server = MockServer::start().await;
        let client = authed_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/v1/payments/sale/36C38912MN9658832"))
            .and(header("Authorization", TEST_BEARER))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "36C38912MN9658832",
                "state": "completed",
                "amount": {"currency": "USD", "total": "7.47"},
                "parent_payment": "PAY-5YK922393D847794YKER7MUI"
            })))
            .mount(&server)
            .await;

        let sale = client.get_sale("36C38912MN9658832").await.unwrap();
        assert_eq!(sale.state, Some(SaleState::Completed));
    }

    #[tokio::test]
    async fn test_partial_refund_posts_amount() {
        let server = MockServer::start().await;
        let client = authed_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/v1/payments/sale/36C38912MN9658832/refund"))
            .and(body_json(json!({"amount": {"currency": "USD", "total": "2.34"}})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "5N366416YB536031B",
                "state": "completed",
                "parent_payment": "PAY-5YK922393D847794YKER7MUI"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let refund = client
            .refund_sale("36C38912MN9658832", Some(&Amount::new("USD", "2.34")))
            .await
            .unwrap();
        assert_eq!(refund.state, Some(RefundState::Completed));
    }

    #[tokio::test]
    async fn test_full_refund_posts_empty_object() {
        let server = MockServer::start().await;
        let client = authed_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/v1/payments/sale/36C38912MN9658832/refund"))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "5N366416YB536031B",
                "state": "pending"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let refund = client.refund_sale("36C38912MN9658832", None).await.unwrap();
        assert_eq!(refund.id.as_deref(), Some("5N366416YB536031B"));
    }
}
