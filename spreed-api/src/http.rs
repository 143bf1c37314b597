//! HTTP transport abstraction and utilities

use crate::auth::Credentials;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};
use serde_json::Value;
use spreed_core::{Error, Result};
use std::time::Duration;

pub use reqwest::Method;

/// Default request timeout for the bundled client
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// A raw HTTP response
///
/// Status and headers stay visible to the caller: the OCS codec maps the
/// status onto the error taxonomy and the chat bindings read the paging
/// headers.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: Bytes,
}

impl RawResponse {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Read an integer-valued response header
    pub fn header_i64(&self, name: &str) -> Option<i64> {
        self.headers
            .get(name)?
            .to_str()
            .ok()?
            .trim()
            .parse()
            .ok()
    }
}

/// HTTP client abstraction
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform one request and return the raw response
    ///
    /// Only transport-level failures are errors here; HTTP failure
    /// statuses come back as a normal [`RawResponse`].
    async fn execute(
        &self,
        method: Method,
        url: &str,
        query: &[(String, String)],
        headers: HeaderMap,
        body: Option<Value>,
    ) -> Result<RawResponse>;
}

/// Default HTTP client implementation using reqwest
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new HTTP client with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new HTTP client with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn execute(
        &self,
        method: Method,
        url: &str,
        query: &[(String, String)],
        headers: HeaderMap,
        body: Option<Value>,
    ) -> Result<RawResponse> {
        let mut request = self.client.request(method, url).headers(headers);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

/// Build the headers every OCS call carries
pub fn ocs_headers(credentials: &Credentials) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    headers.insert(AUTHORIZATION, credentials.authorization()?);
    headers.insert(
        HeaderName::from_static("ocs-apirequest"),
        HeaderValue::from_static("true"),
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Ok(headers)
}
