//! Capabilities endpoint binding

use crate::config::TalkConfig;
use crate::constants::CAPABILITIES_PATH;
use crate::http::{ocs_headers, HttpClient, Method};
use crate::ocs;
use serde::Deserialize;
use spreed_core::{Error, Result, ServerCapabilities};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct CapabilitiesData {
    capabilities: CapabilityEntries,
}

#[derive(Debug, Deserialize)]
struct CapabilityEntries {
    #[serde(default)]
    spreed: Option<SpreedEntry>,
}

#[derive(Debug, Deserialize)]
struct SpreedEntry {
    #[serde(default)]
    features: Vec<String>,
}

/// Binding for the server capabilities endpoint
#[derive(Clone)]
pub struct CapabilitiesApi {
    config: TalkConfig,
    client: Arc<dyn HttpClient>,
}

impl CapabilitiesApi {
    /// Create a new binding
    pub fn new(config: TalkConfig, client: Arc<dyn HttpClient>) -> Self {
        Self { config, client }
    }

    /// Fetch the advertised `spreed` feature flags
    pub async fn fetch(&self) -> Result<ServerCapabilities> {
        debug!("Fetching server capabilities");
        let url = self.config.url(CAPABILITIES_PATH, "");
        let headers = ocs_headers(self.config.credentials())?;
        let response = self
            .client
            .execute(Method::GET, &url, &[], headers, None)
            .await?;

        let data: CapabilitiesData = ocs::decode(&response)?;
        let spreed = data
            .capabilities
            .spreed
            .ok_or_else(|| Error::protocol("capabilities response has no spreed entry"))?;

        Ok(ServerCapabilities::new(spreed.features))
    }
}
