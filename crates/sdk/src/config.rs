//! Client configuration.
//!
//! A [`Configuration`] is built once, either in code or from a TOML file, and
//! handed to [`AdyenClient::new`](crate::AdyenClient::new). Each client owns
//! its configuration, so clients for different merchant accounts can live side
//! by side.
//!
//! ```toml
//! environment = "test"
//! username = "ws_123456@Company.FooBar"
//! password = "correctbatteryhorsestaple"
//! cse_public_key = "10001|..."
//! default_merchant_account = "FooBar123"
//! default_currency = "EUR"
//! ```

use std::{fmt, fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::error::{AdyenError, Result};

/// Base URL template; `{}` is replaced with the environment name
pub const BASE_URI_TEMPLATE: &str = "https://pal-{}.adyen.com/pal/servlet";

pub const DEFAULT_ENVIRONMENT: &str = "test";

pub const DEFAULT_API_VERSION: &str = "v12";

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Adyen environment, e.g. "test" or "live"
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Web service user name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Web service user password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Public key handed to the client-side encryption library
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cse_public_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_merchant_account: Option<String>,

    /// Three-letter ISO currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_currency: Option<String>,

    /// Version segment used in every endpoint path
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Full base URL, replacing the one derived from `environment`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Request timeout in milliseconds, passed to the HTTP client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

fn default_environment() -> String {
    DEFAULT_ENVIRONMENT.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            username: None,
            password: None,
            cse_public_key: None,
            default_merchant_account: None,
            default_currency: None,
            api_version: default_api_version(),
            endpoint: None,
            timeout_ms: None,
        }
    }
}

/// Placeholder printed in place of secrets
pub(crate) const REDACTED: &str = "[redacted]";

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("environment", &self.environment)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .field("cse_public_key", &self.cse_public_key)
            .field("default_merchant_account", &self.default_merchant_account)
            .field("default_currency", &self.default_currency)
            .field("api_version", &self.api_version)
            .field("endpoint", &self.endpoint)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl Configuration {
    /// Create a configuration for the given environment
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            ..Default::default()
        }
    }

    /// Parse a configuration from TOML. Unknown keys are ignored.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| AdyenError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Set the web service credentials
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_cse_public_key(mut self, key: impl Into<String>) -> Self {
        self.cse_public_key = Some(key.into());
        self
    }

    pub fn with_default_merchant_account(mut self, merchant_account: impl Into<String>) -> Self {
        self.default_merchant_account = Some(merchant_account.into());
        self
    }

    pub fn with_default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = Some(currency.into());
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Point the client at a different base URL (sandbox, proxy, test server)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Base URL every endpoint path is appended to
    pub fn base_uri(&self) -> String {
        match self.endpoint {
            Some(ref endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => BASE_URI_TEMPLATE.replace("{}", &self.environment),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Username and password, or an error naming the missing one
    pub fn credentials(&self) -> Result<(&str, &str)> {
        let username = self
            .username
            .as_deref()
            .ok_or_else(|| AdyenError::Config("username is not configured".to_string()))?;
        let password = self
            .password
            .as_deref()
            .ok_or_else(|| AdyenError::Config("password is not configured".to_string()))?;
        Ok((username, password))
    }
}
