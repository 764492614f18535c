//! Shared wiremock scaffolding for endpoint tests.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::Client;
use crate::config::Config;

/// Authorization header value every mocked endpoint expects
pub(crate) const TEST_BEARER: &str = "Bearer A101.token.value";

/// Client pointed at `server`, with the token exchange already mocked
pub(crate) async fn authed_client(server: &MockServer) -> Client {
    Mock::given(method("POST"))
        .and(path("/v1/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "scope": "https://api.paypal.com/v1/payments/.* openid",
            "access_token": "A101.token.value",
            "token_type": "Bearer",
            "app_id": "APP-6XR95014BA15863X",
            "expires_in": 28800
        })))
        .mount(server)
        .await;

    let config = Config::sandbox("id", "secret").with_api_base(format!("{}/v1", server.uri()));
    Client::new(config).unwrap()
}
