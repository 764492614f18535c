//! # OAuth2 Access Tokens
//!
//! Client-credentials token exchange and the cached-token refresh policy
//! behind every authenticated call.
//!
//! A token is reused until half its reported lifetime has passed, then
//! refreshed on the next authenticated call. Concurrent calls that find the
//! token expired elect one exchange; the rest wait and reuse its result.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tracing::debug;

use paypal_core::{Error, Result};

use crate::client::Client;

/// OAuth2 token returned by the client-credentials exchange
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    #[serde(default)]
    pub scope: String,

    pub access_token: String,

    pub token_type: String,

    #[serde(default)]
    pub app_id: String,

    /// Lifetime in seconds as reported by the service
    pub expires_in: i64,

    /// Refresh deadline the client enforces: issue time plus half of
    /// `expires_in`
    #[serde(skip, default = "Utc::now")]
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// True once the refresh deadline has passed
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

impl Client {
    /// Exchange client credentials for a fresh access token.
    ///
    /// Authenticated endpoint calls keep the cached token current on their
    /// own; calling this directly is only needed to inspect a token.
    pub async fn request_access_token(&self) -> Result<AccessToken> {
        debug!("Requesting fresh access token");

        let request = self
            .http
            .post(self.config.url("/oauth2/token"))
            .basic_auth(&self.config.client_id, Some(&self.config.secret))
            .form(&[("grant_type", "client_credentials")])
            .build()
            .map_err(|e| Error::Auth(Box::new(Error::Transport(e.to_string()))))?;

        let mut token: AccessToken = self
            .send(request)
            .await
            .map_err(|e| Error::Auth(Box::new(e)))?;

        // Renew once half the reported lifetime has passed
        token.expires_at = Utc::now() + Duration::seconds(token.expires_in / 2);

        Ok(token)
    }

    /// Bearer token for the next request, refreshing the cached one if it
    /// is missing or past its deadline
    pub(crate) async fn bearer_token(&self) -> Result<String> {
        {
            let token = self.token.read().await;
            if let Some(token) = token.as_ref() {
                if !token.is_expired() {
                    return Ok(token.access_token.clone());
                }
            }
        }

        let mut slot = self.token.write().await;

        // Another caller may have refreshed while we waited for the lock
        if let Some(token) = slot.as_ref() {
            if !token.is_expired() {
                return Ok(token.access_token.clone());
            }
        }

        let token = self.request_access_token().await?;
        let value = token.access_token.clone();
        *slot = Some(token);

        Ok(value)
    }

    /// The currently cached token, if any
    pub async fn cached_access_token(&self) -> Option<AccessToken> {
        self.token.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use reqwest::Method;
    use serde_json::{json, Value};
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> Client {
        let config = Config::sandbox("id", "secret").with_api_base(format!("{}/v1", server.uri()));
        Client::new(config).unwrap()
    }

    fn token_body(expires_in: i64) -> Value {
        json!({
            "scope": "https://api.paypal.com/v1/payments/.* openid",
            "access_token": "A101.token.value",
            "token_type": "Bearer",
            "app_id": "APP-6XR95014BA15863X",
            "expires_in": expires_in
        })
    }

    async fn mount_token_endpoint(server: &MockServer, expires_in: i64, expected_fetches: u64) {
        // "aWQ6c2VjcmV0" is base64("id:secret")
        Mock::given(method("POST"))
            .and(path("/v1/oauth2/token"))
            .and(header("Authorization", "Basic aWQ6c2VjcmV0"))
            .and(body_string("grant_type=client_credentials"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body(expires_in)))
            .expect(expected_fetches)
            .mount(server)
            .await;
    }

    async fn mount_ping(server: &MockServer, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path("/v1/ping"))
            .and(header("Authorization", "Bearer A101.token.value"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_token_fetched_once_and_reused() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server, 28800, 1).await;
        mount_ping(&server, 2).await;

        let client = test_client(&server);
        for _ in 0..2 {
            let request = client
                .request_empty(Method::GET, &client.config.url("/ping"))
                .unwrap();
            client.send_with_auth::<Value>(request).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_expired_token_refreshed() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server, 0, 2).await;
        mount_ping(&server, 2).await;

        let client = test_client(&server);
        for _ in 0..2 {
            let request = client
                .request_empty(Method::GET, &client.config.url("/ping"))
                .unwrap();
            client.send_with_auth::<Value>(request).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_refresh_deadline_is_half_lifetime() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server, 28800, 1).await;

        let client = test_client(&server);
        let token = client.request_access_token().await.unwrap();

        assert_eq!(token.expires_in, 28800);
        assert_eq!(token.token_type, "Bearer");
        assert!(!token.is_expired());

        let remaining = (token.expires_at - Utc::now()).num_seconds();
        assert!(
            (14395..=14400).contains(&remaining),
            "deadline {remaining}s out, expected about 14400s"
        );
    }

    #[tokio::test]
    async fn test_concurrent_calls_share_one_exchange() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server, 28800, 1).await;
        mount_ping(&server, 8).await;

        let client = test_client(&server);
        let mut handles = Vec::new();
        for _ in 0..8 {
            let client = client.clone();
            handles.push(tokio::spawn(async move {
                let request = client
                    .request_empty(Method::GET, &client.config.url("/ping"))
                    .unwrap();
                client.send_with_auth::<Value>(request).await
            }));
        }

        for handle in handles {
            handle.await.unwrap().unwrap();
        }
    }

    #[tokio::test]
    async fn test_rejected_credentials_surface_as_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/oauth2/token"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": "invalid_client",
                "error_description": "Client Authentication failed"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.request_access_token().await.unwrap_err();

        assert!(matches!(err, Error::Auth(_)));
        assert_eq!(err.status(), Some(401));
        assert!(err.to_string().starts_with("Authentication failed"));
    }

    #[tokio::test]
    async fn test_cached_token_visible_after_use() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server, 28800, 1).await;
        mount_ping(&server, 1).await;

        let client = test_client(&server);
        assert!(client.cached_access_token().await.is_none());

        let request = client
            .request_empty(Method::GET, &client.config.url("/ping"))
            .unwrap();
        client.send_with_auth::<Value>(request).await.unwrap();

        let token = client.cached_access_token().await.unwrap();
        assert_eq!(token.access_token, "A101.token.value");
        assert!(!token.is_expired());
    }
}
