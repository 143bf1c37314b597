//! Participant operations against the v4 conversations API

use crate::config::TalkConfig;
use crate::constants::ROOMS_API_PATH;
use crate::http::{ocs_headers, HttpClient, Method, RawResponse};
use crate::ocs;
use crate::require_token;
use serde_json::{json, Value};
use spreed_core::{Participant, Permissions, Result};
use std::sync::Arc;
use tracing::debug;

/// How a permissions update combines with the current flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionsMode {
    /// Replace the flags
    Set,
    /// Add the given flags
    Add,
    /// Remove the given flags
    Remove,
}

impl PermissionsMode {
    fn as_str(self) -> &'static str {
        match self {
            PermissionsMode::Set => "set",
            PermissionsMode::Add => "add",
            PermissionsMode::Remove => "remove",
        }
    }
}

/// Binding for the participant endpoints
#[derive(Clone)]
pub struct ParticipantsApi {
    config: TalkConfig,
    client: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for ParticipantsApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticipantsApi")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ParticipantsApi {
    /// Create a new binding
    pub fn new(config: TalkConfig, client: Arc<dyn HttpClient>) -> Self {
        Self { config, client }
    }

    fn url(&self, path: &str) -> String {
        self.config.url(ROOMS_API_PATH, path)
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<Value>,
    ) -> Result<RawResponse> {
        let headers = ocs_headers(self.config.credentials())?;
        self.client
            .execute(method, &self.url(path), query, headers, body)
            .await
    }

    /// List the attendees of a conversation
    pub async fn list(&self, token: &str, include_status: bool) -> Result<Vec<Participant>> {
        require_token(token)?;
        let query = vec![("includeStatus".to_string(), include_status.to_string())];
        let response = self
            .request(
                Method::GET,
                &format!("/room/{}/participants", token),
                &query,
                None,
            )
            .await?;
        ocs::decode(&response)
    }

    /// Invite a user to the conversation
    pub async fn add(&self, token: &str, invitee: &str) -> Result<()> {
        self.add_from_source(token, invitee, "users").await
    }

    /// Invite from a specific source, e.g. `groups`, `emails` or `circles`
    ///
    /// A changed conversation type in the response is discarded; re-fetch
    /// the room if it matters.
    pub async fn add_from_source(&self, token: &str, invitee: &str, source: &str) -> Result<()> {
        require_token(token)?;
        debug!("Inviting {} ({}) to {}", invitee, source, token);
        let response = self
            .request(
                Method::POST,
                &format!("/room/{}/participants", token),
                &[],
                Some(json!({ "newParticipant": invitee, "source": source })),
            )
            .await?;
        ocs::accept(&response)
    }

    /// Remove an attendee from the conversation
    pub async fn remove(&self, token: &str, attendee_id: i64) -> Result<()> {
        require_token(token)?;
        debug!("Removing attendee {} from {}", attendee_id, token);
        let response = self
            .request(
                Method::DELETE,
                &format!("/room/{}/attendees", token),
                &[],
                Some(json!({ "attendeeId": attendee_id })),
            )
            .await?;
        ocs::accept(&response)
    }

    /// Promote an attendee to moderator
    pub async fn promote(&self, token: &str, attendee_id: i64) -> Result<()> {
        require_token(token)?;
        let response = self
            .request(
                Method::POST,
                &format!("/room/{}/moderators", token),
                &[],
                Some(json!({ "attendeeId": attendee_id })),
            )
            .await?;
        ocs::accept(&response)
    }

    /// Demote a moderator back to a regular attendee
    pub async fn demote(&self, token: &str, attendee_id: i64) -> Result<()> {
        require_token(token)?;
        let response = self
            .request(
                Method::DELETE,
                &format!("/room/{}/moderators", token),
                &[],
                Some(json!({ "attendeeId": attendee_id })),
            )
            .await?;
        ocs::accept(&response)
    }

    /// Update an attendee's permission flags
    pub async fn set_permissions(
        &self,
        token: &str,
        attendee_id: i64,
        mode: PermissionsMode,
        permissions: Permissions,
    ) -> Result<()> {
        require_token(token)?;
        let response = self
            .request(
                Method::PUT,
                &format!("/room/{}/attendees/permissions", token),
                &[],
                Some(json!({
                    "attendeeId": attendee_id,
                    "mode": mode.as_str(),
                    "permissions": permissions.bits(),
                })),
            )
            .await?;
        ocs::accept(&response)
    }
}
