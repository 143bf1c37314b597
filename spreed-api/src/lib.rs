//! REST bindings for the Nextcloud Talk (spreed) endpoints
//!
//! This crate maps the Talk REST surface onto thin async methods: every
//! call is exactly one HTTP round trip whose JSON body travels inside the
//! OCS envelope. The transport is abstracted behind [`http::HttpClient`]
//! so tests can swap the wire.

#![warn(missing_docs)]

pub mod auth;
pub mod capabilities;
pub mod chat;
pub mod config;
pub mod constants;
pub mod http;
pub mod ocs;
pub mod participants;
pub mod rich_object;
pub mod rooms;

// Re-export the binding types
pub use auth::Credentials;
pub use capabilities::CapabilitiesApi;
pub use chat::{ChatApi, MessageFilter, SendMessageParams};
pub use config::TalkConfig;
pub use http::{HttpClient, RawResponse, ReqwestClient};
pub use participants::{ParticipantsApi, PermissionsMode};
pub use rich_object::RichObject;
pub use rooms::{CreateRoomParams, JoinRoomParams, ListRoomsParams, RoomsApi};

use spreed_core::{Error, Result};

/// Reject empty conversation tokens before building a URL from them
pub(crate) fn require_token(token: &str) -> Result<()> {
    if token.is_empty() {
        Err(Error::validation("conversation token must not be empty"))
    } else {
        Ok(())
    }
}
