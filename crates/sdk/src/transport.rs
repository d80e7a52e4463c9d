//! HTTP transport.
//!
//! [`Transport`] is the seam between the client and the network. The client
//! only needs "POST this JSON string to this path and give me the status and
//! the parsed body"; [`HttpTransport`] does that with a blocking reqwest client.

use reqwest::{
    blocking::Client,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
    redirect::Policy,
};
use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::{
    config::{Configuration, REDACTED},
    error::{AdyenError, Result},
};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Status and parsed body of one HTTP round-trip
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    /// Parsed body, `Value::Null` when the body was empty
    pub body: Value,
}

/// Sends serialized JSON bodies to Adyen
pub trait Transport {
    /// POST `body` to `path` (relative to the base URL)
    fn post_json(&self, path: &str, body: String) -> Result<RawResponse>;
}

/// reqwest-backed transport with basic auth and redirects disabled
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_uri: String,
    username: String,
    password: String,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_uri", &self.base_uri)
            .field("username", &self.username)
            .field("password", &REDACTED)
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Build the transport from a configuration
    ///
    /// Fails when credentials are missing or the HTTP client cannot be built.
    pub fn from_config(config: &Configuration) -> Result<Self> {
        let (username, password) = config.credentials()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

        let mut builder = Client::builder()
            .default_headers(headers)
            .redirect(Policy::none());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_uri: config.base_uri(),
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_uri, path)
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, path: &str, body: String) -> Result<RawResponse> {
        let url = self.url(path);
        debug!(url = %url, "Posting to Adyen");

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .body(body)
            .send()?;

        let status = response.status().as_u16();
        let text = response.text()?;
        debug!(url = %url, status, bytes = text.len(), "Adyen responded");

        Ok(RawResponse {
            status,
            body: parse_body(status, &text)?,
        })
    }
}

/// Parse a response body; an empty body is `Value::Null`
fn parse_body(status: u16, text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|source| AdyenError::InvalidBody { status, source })
}
