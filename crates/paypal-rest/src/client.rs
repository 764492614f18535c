//! # REST Client
//!
//! The HTTP pipeline every endpoint call goes through: request assembly,
//! default headers, bearer authentication, dispatch and typed decoding.
//!
//! Cheap to clone; clones share the HTTP connection pool and the cached
//! access token.

use std::sync::Arc;

use reqwest::header::{self, HeaderValue};
use reqwest::{Method, Request, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, error};

use paypal_core::{ApiError, Error, Result};

use crate::auth::AccessToken;
use crate::config::Config;

/// Typed client for the service's v1 REST API
#[derive(Clone)]
pub struct Client {
    pub(crate) http: reqwest::Client,
    pub(crate) config: Config,
    pub(crate) token: Arc<RwLock<Option<AccessToken>>>,
}

impl Client {
    /// Create a client from explicit configuration
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            config,
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Create a client from environment variables, see [`Config::from_env`]
    pub fn from_env() -> Result<Self> {
        let config = Config::from_env()?;
        Self::new(config)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build a request without a body
    pub(crate) fn request_empty(&self, method: Method, url: &str) -> Result<Request> {
        let url = url
            .parse::<Url>()
            .map_err(|e| Error::Transport(format!("Invalid request URL {url:?}: {e}")))?;

        Ok(Request::new(method, url))
    }

    /// Build a request carrying a JSON body
    pub(crate) fn request<B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: &B,
    ) -> Result<Request> {
        let mut request = self.request_empty(method, url)?;

        let bytes = serde_json::to_vec(body).map_err(|e| Error::Encoding(e.to_string()))?;
        *request.body_mut() = Some(bytes.into());

        Ok(request)
    }

    /// Absolute URL for `path` with an encoded query string
    pub(crate) fn url_with_query(&self, path: &str, params: &[(&str, &str)]) -> Result<String> {
        if params.is_empty() {
            return Ok(self.config.url(path));
        }

        let url = Url::parse_with_params(&self.config.url(path), params)
            .map_err(|e| Error::Transport(format!("Invalid query for {path:?}: {e}")))?;

        Ok(url.into())
    }

    /// Apply default headers, dispatch, and surface non-2xx responses as
    /// typed API errors
    async fn execute(&self, mut request: Request) -> Result<Response> {
        let headers = request.headers_mut();
        if !headers.contains_key(header::ACCEPT) {
            headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        }
        if !headers.contains_key(header::ACCEPT_LANGUAGE) {
            headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static("en_US"));
        }
        // Form-encoded bodies (the token exchange) keep their own type
        if !headers.contains_key(header::CONTENT_TYPE) {
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
        }

        debug!("{} {}", request.method(), request.url());

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("API error: status={status}, body={body}");
            return Err(ApiError::from_response(status.as_u16(), body).into());
        }

        Ok(response)
    }

    /// Send and decode a JSON response
    pub(crate) async fn send<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let response = self.execute(request).await?;
        let status = response.status().as_u16();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| Error::Decode {
            status,
            message: e.to_string(),
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    /// Send and discard the response body; for 202/204-style endpoints
    pub(crate) async fn send_empty(&self, request: Request) -> Result<()> {
        self.execute(request).await?;
        Ok(())
    }

    /// Send and return the response body verbatim; for binary payloads
    pub(crate) async fn send_bytes(&self, request: Request) -> Result<Vec<u8>> {
        let response = self.execute(request).await?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    async fn authorize(&self, request: &mut Request) -> Result<()> {
        let token = self.bearer_token().await?;

        let value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| Error::Auth(Box::new(Error::Encoding(e.to_string()))))?;
        request.headers_mut().insert(header::AUTHORIZATION, value);

        Ok(())
    }

    /// [`Client::send`] with a bearer token attached, refreshed as needed
    pub(crate) async fn send_with_auth<T: DeserializeOwned>(&self, mut request: Request) -> Result<T> {
        self.authorize(&mut request).await?;
        self.send(request).await
    }

    /// [`Client::send_empty`] with a bearer token attached
    pub(crate) async fn send_empty_with_auth(&self, mut request: Request) -> Result<()> {
        self.authorize(&mut request).await?;
        self.send_empty(request).await
    }

    /// [`Client::send_bytes`] with a bearer token attached
    pub(crate) async fn send_bytes_with_auth(&self, mut request: Request) -> Result<Vec<u8>> {
        self.authorize(&mut request).await?;
        self.send_bytes(request).await
    }
}
