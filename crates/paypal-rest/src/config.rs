//! # Client Configuration
//!
//! Credentials and endpoint selection for the REST client.
//! Secrets can be loaded from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use paypal_core::Error;

/// Which service deployment the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Sandbox,
    Live,
}

impl Environment {
    /// Versioned API root for this deployment
    pub fn api_base(&self) -> &'static str {
        match self {
            Environment::Sandbox => "https://api.sandbox.paypal.com/v1",
            Environment::Live => "https://api.paypal.com/v1",
        }
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "live" => Ok(Environment::Live),
            other => Err(Error::Config(format!(
                "Unknown environment {other:?}, expected \"sandbox\" or \"live\""
            ))),
        }
    }
}

/// REST API configuration
#[derive(Clone)]
pub struct Config {
    /// OAuth2 client id of the REST app
    pub client_id: String,

    /// OAuth2 client secret of the REST app
    pub secret: String,

    /// Versioned API root, e.g. `https://api.sandbox.paypal.com/v1`
    pub api_base: String,
}

impl Config {
    /// Create config with explicit credentials
    pub fn new(client_id: impl Into<String>, secret: impl Into<String>, env: Environment) -> Self {
        Self {
            client_id: client_id.into(),
            secret: secret.into(),
            api_base: env.api_base().to_string(),
        }
    }

    /// Sandbox config, shorthand for [`Config::new`] with [`Environment::Sandbox`]
    pub fn sandbox(client_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::new(client_id, secret, Environment::Sandbox)
    }

    /// Live config, shorthand for [`Config::new`] with [`Environment::Live`]
    pub fn live(client_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::new(client_id, secret, Environment::Live)
    }

    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `PAYPAL_CLIENT_ID`
    /// - `PAYPAL_CLIENT_SECRET`
    ///
    /// Optional:
    /// - `PAYPAL_ENVIRONMENT` (`sandbox` or `live`, defaults to `sandbox`)
    pub fn from_env() -> Result<Self, Error> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let client_id = env::var("PAYPAL_CLIENT_ID")
            .map_err(|_| Error::Config("PAYPAL_CLIENT_ID not set".to_string()))?;

        let secret = env::var("PAYPAL_CLIENT_SECRET")
            .map_err(|_| Error::Config("PAYPAL_CLIENT_SECRET not set".to_string()))?;

        let environment = match env::var("PAYPAL_ENVIRONMENT") {
            Ok(value) => value.parse()?,
            Err(_) => Environment::Sandbox,
        };

        Ok(Self::new(client_id, secret, environment))
    }

    /// Builder: point the client at a custom API root (for testing)
    pub fn with_api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into();
        self
    }

    /// Check if the client targets the sandbox deployment
    pub fn is_sandbox(&self) -> bool {
        self.api_base == Environment::Sandbox.api_base()
    }

    /// Absolute URL for a path under the API root
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("secret", &"<redacted>")
            .field("api_base", &self.api_base)
            .finish()
    }
}
