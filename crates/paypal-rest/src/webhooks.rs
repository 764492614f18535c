//! # Webhooks
//!
//! Register webhooks for event types, inspect delivered events, and
//! replay deliveries that were missed. Event resources decode into the
//! payment object the event is about, see
//! [`EventResource`](paypal_core::webhooks::EventResource).

use chrono::SecondsFormat;
use reqwest::Method;
use serde::Deserialize;

use paypal_core::webhooks::{Event, EventList, EventSearch, EventType, Webhook};
use paypal_core::{Patch, Result};

use crate::client::Client;

#[derive(Deserialize)]
struct EventTypeList {
    #[serde(default)]
    event_types: Vec<EventType>,
}

#[derive(Deserialize)]
struct WebhookList {
    #[serde(default)]
    webhooks: Vec<Webhook>,
}

impl Client {
    /// List every event type a webhook can subscribe to
    pub async fn list_webhook_event_types(&self) -> Result<Vec<EventType>> {
        let request = self.request_empty(
            Method::GET,
            &self.config.url("/notifications/webhooks-event-types"),
        )?;
        let list: EventTypeList = self.send_with_auth(request).await?;
        Ok(list.event_types)
    }

    /// Register a webhook. The service caps an app at 10 registered
    /// webhooks
    pub async fn create_webhook(&self, webhook: &Webhook) -> Result<Webhook> {
        let request = self.request(
            Method::POST,
            &self.config.url("/notifications/webhooks"),
            webhook,
        )?;
        self.send_with_auth(request).await
    }

    pub async fn get_webhook(&self, webhook_id: &str) -> Result<Webhook> {
        let request = self.request_empty(
            Method::GET,
            &self.config.url(&format!("/notifications/webhooks/{webhook_id}")),
        )?;
        self.send_with_auth(request).await
    }

    /// List the event types one webhook subscribes to
    pub async fn list_event_types_by_webhook(&self, webhook_id: &str) -> Result<Vec<EventType>> {
        let request = self.request_empty(
            Method::GET,
            &self
                .config
                .url(&format!("/notifications/webhooks/{webhook_id}/event-types")),
        )?;
        let list: EventTypeList = self.send_with_auth(request).await?;
        Ok(list.event_types)
    }

    /// List all webhooks registered for the app
    pub async fn list_webhooks(&self) -> Result<Vec<Webhook>> {
        let request =
            self.request_empty(Method::GET, &self.config.url("/notifications/webhooks"))?;
        let list: WebhookList = self.send_with_auth(request).await?;
        Ok(list.webhooks)
    }

    /// Replace a webhook's url or subscriptions
    pub async fn update_webhook(&self, webhook_id: &str, webhook: &Webhook) -> Result<Webhook> {
        let body = Patch::replace(webhook);
        let request = self.request(
            Method::PATCH,
            &self.config.url(&format!("/notifications/webhooks/{webhook_id}")),
            &body,
        )?;
        self.send_with_auth(request).await
    }

    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<()> {
        let request = self.request_empty(
            Method::DELETE,
            &self.config.url(&format!("/notifications/webhooks/{webhook_id}")),
        )?;
        self.send_empty_with_auth(request).await
    }

    pub async fn get_webhook_event(&self, event_id: &str) -> Result<Event> {
        let request = self.request_empty(
            Method::GET,
            &self
                .config
                .url(&format!("/notifications/webhooks-events/{event_id}")),
        )?;
        self.send_with_auth(request).await
    }

    /// Search delivered events; unset criteria do not constrain the
    /// result
    pub async fn search_webhook_events(&self, search: &EventSearch) -> Result<EventList> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(page_size) = search.page_size {
            params.push(("page_size", page_size.to_string()));
        }
        if let Some(start_time) = &search.start_time {
            params.push((
                "start_time",
                start_time.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }
        if let Some(end_time) = &search.end_time {
            params.push((
                "end_time",
                end_time.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }
        let params: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();

        let url = self.url_with_query("/notifications/webhooks-events", &params)?;
        let request = self.request_empty(Method::GET, &url)?;
        self.send_with_auth(request).await
    }

    /// Deliver an event to its webhook again
    pub async fn resend_webhook_event(&self, event_id: &str) -> Result<Event> {
        let request = self.request_empty(
            Method::POST,
            &self
                .config
                .url(&format!("/notifications/webhooks-events/{event_id}/resend")),
        )?;
        self.send_with_auth(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{authed_client, TEST_BEARER};
    use chrono::{DateTime, Utc};
    use paypal_core::webhooks::EventResource;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_event_types_unwraps() {
        let server = MockServer::start().await;
        let client = authed_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/v1/notifications/webhooks-event-types"))
            .and(header("Authorization", TEST_BEARER))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "event_types": [
                    {"name": "PAYMENT.SALE.COMPLETED", "description": "A sale completed"},
                    {"name": "PAYMENT.SALE.REFUNDED", "description": "A sale was refunded"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let event_types = client.list_webhook_event_types().await.unwrap();
        assert_eq!(event_types.len(), 2);
        assert_eq!(event_types[0].name, "PAYMENT.SALE.COMPLETED");
    }

    #[tokio::test]
    async fn test_create_then_delete_webhook() {
        let server = MockServer::start().await;
        let client = authed_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/v1/notifications/webhooks"))
            .and(body_json(json!({
                "url": "https://example.com/paypal_webhooks",
                "event_types": [{"name": "PAYMENT.SALE.COMPLETED"}]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "4JH86294D6297924G",
                "url": "https://example.com/paypal_webhooks"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/v1/notifications/webhooks/4JH86294D6297924G"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let mut webhook = Webhook::new("https://example.com/paypal_webhooks");
        webhook.event_types = vec![EventType::new("PAYMENT.SALE.COMPLETED")];
        let created = client.create_webhook(&webhook).await.unwrap();
        let id = created.id.as_deref().unwrap();
        assert_eq!(id, "4JH86294D6297924G");

        client.delete_webhook(id).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_webhooks_unwraps() {
        let server = MockServer::start().await;
        let client = authed_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/v1/notifications/webhooks"))
            .and(header("Authorization", TEST_BEARER))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "webhooks": [
                    {"id": "W-1", "url": "https://example.com/a"},
                    {"id": "W-2", "url": "https://example.com/b"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let webhooks = client.list_webhooks().await.unwrap();
        assert_eq!(webhooks.len(), 2);
        assert_eq!(webhooks[1].url, "https://example.com/b");
    }

    #[tokio::test]
    async fn test_update_webhook_sends_patch_envelope() {
        let server = MockServer::start().await;
        let client = authed_client(&server).await;

        Mock::given(method("PATCH"))
            .and(path("/v1/notifications/webhooks/4JH86294D6297924G"))
            .and(body_json(json!({
                "op": "replace",
                "path": "/",
                "value": {"url": "https://example.com/elsewhere"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "4JH86294D6297924G",
                "url": "https://example.com/elsewhere"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let update = Webhook::new("https://example.com/elsewhere");
        let webhook = client
            .update_webhook("4JH86294D6297924G", &update)
            .await
            .unwrap();
        assert_eq!(webhook.url, "https://example.com/elsewhere");
    }

    #[tokio::test]
    async fn test_get_event_decodes_resource() {
        let server = MockServer::start().await;
        let client = authed_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/v1/notifications/webhooks-events/WH-2WR32451HC0233532"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "WH-2WR32451HC0233532",
                "event_type": "PAYMENT.SALE.COMPLETED",
                "resource_type": "sale",
                "summary": "A successful sale payment was made",
                "resource": {
                    "id": "80021663DE681814L",
                    "state": "completed",
                    "amount": {"total": "19.99", "currency": "USD"}
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let event = client
            .get_webhook_event("WH-2WR32451HC0233532")
            .await
            .unwrap();
        assert_eq!(event.event_type.as_deref(), Some("PAYMENT.SALE.COMPLETED"));
        match event.resource {
            Some(EventResource::Sale(sale)) => {
                assert_eq!(sale.id.as_deref(), Some("80021663DE681814L"));
            }
            other => panic!("expected a sale resource, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_search_events_query_params() {
        let server = MockServer::start().await;
        let client = authed_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/v1/notifications/webhooks-events"))
            .and(query_param("page_size", "5"))
            .and(query_param("start_time", "2026-08-01T00:00:00Z"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "events": [{"id": "WH-1", "event_type": "PAYMENT.SALE.COMPLETED"}],
                "count": 1
            })))
            .expect(1)
            .mount(&server)
            .await;

        let search = EventSearch {
            page_size: Some(5),
            start_time: Some("2026-08-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap()),
            end_time: None,
        };
        let page = client.search_webhook_events(&search).await.unwrap();
        assert_eq!(page.count, 1);
        assert_eq!(page.events[0].id.as_deref(), Some("WH-1"));
    }

    #[tokio::test]
    async fn test_resend_event_posts() {
        let server = MockServer::start().await;
        let client = authed_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/v1/notifications/webhooks-events/WH-1/resend"))
            .and(header("Authorization", TEST_BEARER))
            .respond_with(ResponseTemplate::new(202).set_body_json(json!({
                "id": "WH-1",
                "event_type": "PAYMENT.SALE.COMPLETED"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let event = client.resend_webhook_event("WH-1").await.unwrap();
        assert_eq!(event.id.as_deref(), Some("WH-1"));
    }
}
