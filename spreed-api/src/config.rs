//! Client configuration

use crate::auth::Credentials;
use spreed_core::{Error, Result};
use url::Url;

/// Configuration for a Talk client
///
/// Holds the validated endpoint base URL and the credentials; immutable
/// after construction. The endpoint may include a sub-path
/// (`https://host/nextcloud`) — API paths are appended to it verbatim.
#[derive(Debug, Clone)]
pub struct TalkConfig {
    base_url: String,
    credentials: Credentials,
}

impl TalkConfig {
    /// Create a configuration from an endpoint URL and credentials
    pub fn new(endpoint: impl AsRef<str>, credentials: Credentials) -> Result<Self> {
        let endpoint = endpoint.as_ref();
        let url = Url::parse(endpoint)
            .map_err(|e| Error::configuration(format!("invalid endpoint URL '{}': {}", endpoint, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::configuration(format!(
                "endpoint must be http(s), got '{}'",
                url.scheme()
            )));
        }

        Ok(Self {
            base_url: endpoint.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Shorthand for username/password credentials
    pub fn with_password(
        endpoint: impl AsRef<str>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::new(endpoint, Credentials::password(username, password))
    }

    /// The endpoint base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured credentials
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Assemble a full request URL from an API root and an endpoint path
    pub fn url(&self, api_root: &str, path: &str) -> String {
        format!("{}{}{}", self.base_url, api_root, path)
    }
}
