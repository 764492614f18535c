//! # Billing plans and agreements
//!
//! A [`Plan`] is the reusable template (payment definitions, charge
//! models, merchant preferences); an [`Agreement`] subscribes one payer
//! to a plan. Plans start out `CREATED` and must be patched to `ACTIVE`
//! before an agreement can reference them. Agreements created for a
//! PayPal payer come back with an `approval_url` link and are only
//! finalized by [`Client::execute_agreement`] after the payer approves.

use reqwest::Method;
use serde::Deserialize;

use paypal_core::billing::{Agreement, AgreementStateDescriptor, AgreementTransaction, Plan};
use paypal_core::money::Money;
use paypal_core::{Patch, Result};

use crate::client::Client;

#[derive(Deserialize)]
struct PlanList {
    #[serde(default)]
    plans: Vec<Plan>,
}

#[derive(Deserialize)]
struct AgreementTransactionList {
    #[serde(default)]
    agreement_transaction_list: Vec<AgreementTransaction>,
}

impl Client {
    /// Create a billing plan in the `CREATED` state
    pub async fn create_billing_plan(&self, plan: &Plan) -> Result<Plan> {
        let request = self.request(
            Method::POST,
            &self.config.url("/payments/billing-plans"),
            plan,
        )?;
        self.send_with_auth(request).await
    }

    /// Replace fields of an existing billing plan. Activating a plan is
    /// a plain update to `state`
    pub async fn update_billing_plan(&self, plan_id: &str, plan: &Plan) -> Result<()> {
        let body = Patch::replace(plan);
        let request = self.request(
            Method::PATCH,
            &self.config.url(&format!("/payments/billing-plans/{plan_id}")),
            &body,
        )?;
        self.send_empty_with_auth(request).await
    }

    pub async fn get_billing_plan(&self, plan_id: &str) -> Result<Plan> {
        let request = self.request_empty(
            Method::GET,
            &self.config.url(&format!("/payments/billing-plans/{plan_id}")),
        )?;
        self.send_with_auth(request).await
    }

    /// List billing plans. Supported filter keys include `status`,
    /// `page`, `page_size` and `total_required`
    pub async fn list_billing_plans(&self, filter: &[(&str, &str)]) -> Result<Vec<Plan>> {
        let url = self.url_with_query("/payments/billing-plans", filter)?;
        let request = self.request_empty(Method::GET, &url)?;
        let list: PlanList = self.send_with_auth(request).await?;
        Ok(list.plans)
    }

    /// Create a billing agreement against an active plan. The response
    /// carries an `approval_url` link and an EC token the payer must
    /// approve before [`Client::execute_agreement`]
    pub async fn create_agreement(&self, agreement: &Agreement) -> Result<Agreement> {
        let request = self.request(
            Method::POST,
            &self.config.url("/payments/billing-agreements"),
            agreement,
        )?;
        self.send_with_auth(request).await
    }

    /// Finalize an approved agreement with the EC token from the
    /// approval redirect
    pub async fn execute_agreement(&self, token: &str) -> Result<Agreement> {
        let request = self.request_empty(
            Method::POST,
            &self
                .config
                .url(&format!("/payments/billing-agreements/{token}/agreement-execute")),
        )?;
        self.send_with_auth(request).await
    }

    /// Replace fields of an existing agreement
    pub async fn update_agreement(&self, agreement_id: &str, agreement: &Agreement) -> Result<()> {
        let body = Patch::replace(agreement);
        let request = self.request(
            Method::PATCH,
            &self
                .config
                .url(&format!("/payments/billing-agreements/{agreement_id}")),
            &body,
        )?;
        self.send_empty_with_auth(request).await
    }

    pub async fn get_agreement(&self, agreement_id: &str) -> Result<Agreement> {
        let request = self.request_empty(
            Method::GET,
            &self
                .config
                .url(&format!("/payments/billing-agreements/{agreement_id}")),
        )?;
        self.send_with_auth(request).await
    }

    /// Suspend an active agreement
    pub async fn suspend_agreement(&self, agreement_id: &str, note: &str) -> Result<()> {
        self.post_agreement_note(agreement_id, "suspend", note).await
    }

    /// Reactivate a suspended agreement
    pub async fn reactivate_agreement(&self, agreement_id: &str, note: &str) -> Result<()> {
        self.post_agreement_note(agreement_id, "re-activate", note)
            .await
    }

    /// Cancel an agreement
    pub async fn cancel_agreement(&self, agreement_id: &str, note: &str) -> Result<()> {
        self.post_agreement_note(agreement_id, "cancel", note).await
    }

    async fn post_agreement_note(&self, agreement_id: &str, action: &str, note: &str) -> Result<()> {
        let body = AgreementStateDescriptor {
            note: Some(note.to_owned()),
            amount: None,
        };
        let request = self.request(
            Method::POST,
            &self
                .config
                .url(&format!("/payments/billing-agreements/{agreement_id}/{action}")),
            &body,
        )?;
        self.send_empty_with_auth(request).await
    }

    /// Set the outstanding balance of an agreement
    pub async fn set_agreement_balance(&self, agreement_id: &str, amount: &Money) -> Result<()> {
        let request = self.request(
            Method::POST,
            &self
                .config
                .url(&format!("/payments/billing-agreements/{agreement_id}/set-balance")),
            amount,
        )?;
        self.send_empty_with_auth(request).await
    }

    /// Bill the outstanding balance of an agreement
    pub async fn bill_agreement_balance(
        &self,
        agreement_id: &str,
        amount: &Money,
        note: &str,
    ) -> Result<()> {
        let body = AgreementStateDescriptor {
            note: Some(note.to_owned()),
            amount: Some(amount.clone()),
        };
        let request = self.request(
            Method::POST,
            &self
                .config
                .url(&format!("/payments/billing-agreements/{agreement_id}/bill-balance")),
            &body,
        )?;
        self.send_empty_with_auth(request).await
    }

    /// Search transactions billed under an agreement. `start_date` and
    /// `end_date` filter keys take `YYYY-MM-DD` values
    pub async fn search_agreement_transactions(
        &self,
        agreement_id: &str,
        filter: &[(&str, &str)],
    ) -> Result<Vec<AgreementTransaction>> {
        let url = self.url_with_query(
            &format!("/payments/billing-agreements/{agreement_id}/transactions"),
            filter,
        )?;
        let request = self.request_empty(Method::GET, &url)?;
        let list: AgreementTransactionList = self.send_with_auth(request).await?;
        Ok(list.agreement_transaction_list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{authed_client, TEST_BEARER};
    use paypal_core::billing::{AgreementPayer, PlanState, PlanType};
    use paypal_core::payments::PaymentMethod;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_billing_plan() {
        let server = MockServer::start().await;
        let client = authed_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/v1/payments/billing-plans"))
            .and(header("Authorization", TEST_BEARER))
            .and(body_json(json!({
                "name": "Gold plan",
                "description": "Monthly gold",
                "type": "INFINITE"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "P-94458432VR012762KRWBZEUA",
                "name": "Gold plan",
                "state": "CREATED"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let plan = Plan {
            name: Some("Gold plan".into()),
            description: Some("Monthly gold".into()),
            plan_type: Some(PlanType::Infinite),
            ..Default::default()
        };
        let created = client.create_billing_plan(&plan).await.unwrap();
        assert_eq!(created.id.as_deref(), Some("P-94458432VR012762KRWBZEUA"));
        assert_eq!(created.state, Some(PlanState::Created));
    }

    #[tokio::test]
    async fn test_update_plan_sends_patch_envelope() {
        let server = MockServer::start().await;
        let client = authed_client(&server).await;

        Mock::given(method("PATCH"))
            .and(path("/v1/payments/billing-plans/P-94458432VR012762KRWBZEUA"))
            .and(header("Authorization", TEST_BEARER))
            .and(body_json(json!({
                "op": "replace",
                "path": "/",
                "value": {"state": "ACTIVE"}
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let activate = Plan {
            state: Some(PlanState::Active),
            ..Default::default()
        };
        client
            .update_billing_plan("P-94458432VR012762KRWBZEUA", &activate)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_plans_unwraps_in_order() {
        let server = MockServer::start().await;
        let client = authed_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/v1/payments/billing-plans"))
            .and(query_param("status", "ACTIVE"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "plans": [{"id": "P1"}, {"id": "P2"}],
                "total_items": "2"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let plans = client
            .list_billing_plans(&[("status", "ACTIVE")])
            .await
            .unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].id.as_deref(), Some("P1"));
        assert_eq!(plans[1].id.as_deref(), Some("P2"));
    }

    #[tokio::test]
    async fn test_create_then_execute_agreement() {
        let server = MockServer::start().await;
        let client = authed_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/v1/payments/billing-agreements"))
            .and(header("Authorization", TEST_BEARER))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "name": "Gold agreement",
                "links": [{"href": "https://www.sandbox.paypal.com/cgi-bin/webscr?cmd=_express-checkout&token=EC-0JP008296V451950C",
                           "rel": "approval_url", "method": "REDIRECT"}]
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/payments/billing-agreements/EC-0JP008296V451950C/agreement-execute"))
            .and(header("Authorization", TEST_BEARER))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "I-V8SSE9WLJGY6",
                "state": "Active"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let agreement = Agreement {
            name: Some("Gold agreement".into()),
            payer: Some(AgreementPayer::new(PaymentMethod::Paypal)),
            ..Default::default()
        };
        let created = client.create_agreement(&agreement).await.unwrap();
        assert_eq!(created.links[0].rel, "approval_url");

        let executed = client
            .execute_agreement("EC-0JP008296V451950C")
            .await
            .unwrap();
        assert_eq!(executed.id.as_deref(), Some("I-V8SSE9WLJGY6"));
        assert_eq!(executed.state.as_deref(), Some("Active"));
    }

    #[tokio::test]
    async fn test_suspend_posts_note() {
        let server = MockServer::start().await;
        let client = authed_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/v1/payments/billing-agreements/I-V8SSE9WLJGY6/suspend"))
            .and(body_json(json!({"note": "Out of stock"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client
            .suspend_agreement("I-V8SSE9WLJGY6", "Out of stock")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_bill_balance_posts_note_and_amount() {
        let server = MockServer::start().await;
        let client = authed_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/v1/payments/billing-agreements/I-V8SSE9WLJGY6/bill-balance"))
            .and(body_json(json!({
                "note": "Settling the quarter",
                "amount": {"currency": "USD", "value": "40.00"}
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client
            .bill_agreement_balance(
                "I-V8SSE9WLJGY6",
                &Money::new("USD", "40.00"),
                "Settling the quarter",
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_search_agreement_transactions_unwraps() {
        let server = MockServer::start().await;
        let client = authed_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/v1/payments/billing-agreements/I-V8SSE9WLJGY6/transactions"))
            .and(query_param("start_date", "2026-01-01"))
            .and(query_param("end_date", "2026-02-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "agreement_transaction_list": [
                    {"transaction_id": "T-1", "status": "Completed",
                     "amount": {"currency": "USD", "value": "20.00"}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let transactions = client
            .search_agreement_transactions(
                "I-V8SSE9WLJGY6",
                &[("start_date", "2026-01-01"), ("end_date", "2026-02-01")],
            )
            .await
            .unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].transaction_id.as_deref(), Some("T-1"));
    }
}
