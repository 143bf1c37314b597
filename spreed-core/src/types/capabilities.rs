//! Server capability flags

use serde::{Deserialize, Serialize};

/// The `spreed` feature flags advertised by a Nextcloud server
///
/// Fetched once when the client connects and cached for the lifetime of the
/// client; order is preserved as the server returned it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerCapabilities {
    /// Advertised feature names, in server order
    pub features: Vec<String>,
}

impl ServerCapabilities {
    /// Wrap an advertised feature list
    pub fn new(features: Vec<String>) -> Self {
        Self { features }
    }

    /// Whether the server advertises the given feature
    pub fn supports(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }

    /// Fail with [`Error::MissingCapability`] unless the feature is advertised
    ///
    /// [`Error::MissingCapability`]: crate::Error::MissingCapability
    pub fn require(&self, feature: &str) -> crate::Result<()> {
        if self.supports(feature) {
            Ok(())
        } else {
            Err(crate::Error::MissingCapability(feature.to_string()))
        }
    }
}
