//! OCS envelope codec
//!
//! Every Talk response wraps its payload in the OCS envelope
//! `{"ocs": {"meta": {...}, "data": ...}}`. On success the envelope is
//! unwrapped and only `data` escapes this module; on failure the meta
//! message is folded into the error mapped from the HTTP status.

use crate::http::RawResponse;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use spreed_core::{Error, Result};

/// Outer OCS wrapper
#[derive(Debug, Deserialize)]
pub struct OcsEnvelope<T> {
    /// The single `ocs` element
    pub ocs: OcsBody<T>,
}

/// Meta/data pair inside the envelope
#[derive(Debug, Deserialize)]
pub struct OcsBody<T> {
    /// Request metadata
    pub meta: OcsMeta,
    /// The payload
    pub data: T,
}

/// OCS request metadata
#[derive(Debug, Clone, Deserialize)]
pub struct OcsMeta {
    /// `ok` or `failure`
    pub status: String,
    /// OCS status code, usually mirroring the HTTP status
    pub statuscode: i64,
    /// Human-readable outcome
    #[serde(default)]
    pub message: Option<String>,
}

/// Unwrap a successful response into its payload
///
/// Failure statuses map onto the error taxonomy; a 2xx body that is not a
/// valid envelope is a protocol error.
pub fn decode<T: DeserializeOwned>(response: &RawResponse) -> Result<T> {
    if !response.is_success() {
        return Err(failure(response));
    }

    let envelope: OcsEnvelope<T> = serde_json::from_slice(&response.body)?;
    Ok(envelope.ocs.data)
}

/// Check the status of a response whose payload the caller ignores
///
/// Write operations answer with an empty or irrelevant `data` element;
/// only the status matters.
pub fn accept(response: &RawResponse) -> Result<()> {
    if response.is_success() {
        Ok(())
    } else {
        Err(failure(response))
    }
}

/// Map a failure response onto the error taxonomy
///
/// The OCS meta message is used when the body still parses as an
/// envelope; otherwise the raw HTTP status has to do.
fn failure(response: &RawResponse) -> Error {
    let message = serde_json::from_slice::<OcsEnvelope<serde_json::Value>>(&response.body)
        .ok()
        .and_then(|envelope| {
            let meta = envelope.ocs.meta;
            meta.message
                .filter(|m| !m.is_empty())
                .or(Some(meta.status))
        })
        .unwrap_or_else(|| format!("HTTP {}", response.status));

    Error::from_status(response.status, message)
}
