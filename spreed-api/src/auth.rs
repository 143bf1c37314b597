//! Credentials consumed by the HTTP layer

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header::HeaderValue;
use spreed_core::{Error, Result};
use std::fmt;

/// Credentials for a Nextcloud account
///
/// Either a username/password pair sent as HTTP Basic auth, or a prebuilt
/// bearer credential such as an app token. Both variants end up as one
/// `Authorization` header value, so the transport treats them uniformly.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Username and password, sent as HTTP Basic auth
    Password {
        /// Login name
        username: String,
        /// Account or app password
        password: String,
    },
    /// A prebuilt bearer token
    Bearer(String),
}

impl Credentials {
    /// Username/password credentials
    pub fn password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials::Password {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Bearer token credentials
    pub fn bearer(token: impl Into<String>) -> Self {
        Credentials::Bearer(token.into())
    }

    /// The login name, when the variant carries one
    pub fn username(&self) -> Option<&str> {
        match self {
            Credentials::Password { username, .. } => Some(username),
            Credentials::Bearer(_) => None,
        }
    }

    /// Render the `Authorization` header value
    pub fn authorization(&self) -> Result<HeaderValue> {
        let raw = match self {
            Credentials::Password { username, password } => {
                let encoded = STANDARD.encode(format!("{}:{}", username, password));
                format!("Basic {}", encoded)
            }
            Credentials::Bearer(token) => format!("Bearer {}", token),
        };

        let mut value = HeaderValue::from_str(&raw)
            .map_err(|e| Error::configuration(format!("credentials not header-safe: {}", e)))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Password { username, .. } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Credentials::Bearer(_) => f.debug_tuple("Bearer").field(&"<redacted>").finish(),
        }
    }
}
