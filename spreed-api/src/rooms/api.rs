//! Room operations against the v4 conversations API

use crate::config::TalkConfig;
use crate::constants::ROOMS_API_PATH;
use crate::http::{ocs_headers, HttpClient, Method, RawResponse};
use crate::ocs;
use crate::require_token;
use crate::rooms::params::{CreateRoomParams, JoinRoomParams, ListRoomsParams};
use serde_json::{json, Value};
use spreed_core::{
    Conversation, ListableScope, NotificationLevel, ReadOnlyState, Result,
};
use std::sync::Arc;
use tracing::{debug, trace};

/// Binding for the conversation endpoints
///
/// Every method is one request/response round trip; results are snapshots
/// of server state.
#[derive(Clone)]
pub struct RoomsApi {
    config: TalkConfig,
    client: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for RoomsApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoomsApi")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RoomsApi {
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

    /// List the user's conversations
    pub async fn list(&self, params: &ListRoomsParams) -> Result<Vec<Conversation>> {
        trace!("Listing rooms");
        let response = self
            .request(Method::GET, "/room", &params.query_pairs(), None)
            .await?;
        ocs::decode(&response)
    }

    /// List open conversations the user could join
    pub async fn listed(&self) -> Result<Vec<Conversation>> {
        let response = self.request(Method::GET, "/listed-room", &[], None).await?;
        ocs::decode(&response)
    }

    /// Fetch a single conversation by token
    pub async fn get(&self, token: &str) -> Result<Conversation> {
        require_token(token)?;
        trace!("Fetching room {}", token);
        let response = self
            .request(Method::GET, &format!("/room/{}", token), &[], None)
            .await?;
        ocs::decode(&response)
    }

    /// Create a conversation
    pub async fn create(&self, params: &CreateRoomParams) -> Result<Conversation> {
        debug!("Creating room");
        let response = self
            .request(Method::POST, "/room", &[], Some(serde_json::to_value(params)?))
            .await?;
        ocs::decode(&response)
    }

    /// Rename a conversation
    pub async fn rename(&self, token: &str, name: &str) -> Result<()> {
        require_token(token)?;
        let response = self
            .request(
                Method::PUT,
                &format!("/room/{}", token),
                &[],
                Some(json!({ "roomName": name })),
            )
            .await?;
        ocs::accept(&response)
    }

    /// Delete a conversation
    pub async fn delete(&self, token: &str) -> Result<()> {
        require_token(token)?;
        debug!("Deleting room {}", token);
        let response = self
            .request(Method::DELETE, &format!("/room/{}", token), &[], None)
            .await?;
        ocs::accept(&response)
    }

    /// Set the conversation description
    pub async fn set_description(&self, token: &str, description: &str) -> Result<()> {
        require_token(token)?;
        let response = self
            .request(
                Method::PUT,
                &format!("/room/{}/description", token),
                &[],
                Some(json!({ "description": description })),
            )
            .await?;
        ocs::accept(&response)
    }

    /// Set or clear the conversation password
    pub async fn set_password(&self, token: &str, password: &str) -> Result<()> {
        require_token(token)?;
        let response = self
            .request(
                Method::PUT,
                &format!("/room/{}/password", token),
                &[],
                Some(json!({ "password": password })),
            )
            .await?;
        ocs::accept(&response)
    }

    /// Switch the conversation between read-only and read-write
    pub async fn set_read_only(&self, token: &str, state: ReadOnlyState) -> Result<()> {
        require_token(token)?;
        let response = self
            .request(
                Method::PUT,
                &format!("/room/{}/read-only", token),
                &[],
                Some(json!({ "state": i32::from(state) })),
            )
            .await?;
        ocs::accept(&response)
    }

    /// Change who can find the conversation in search
    pub async fn set_listable(&self, token: &str, scope: ListableScope) -> Result<()> {
        require_token(token)?;
        let response = self
            .request(
                Method::PUT,
                &format!("/room/{}/listable", token),
                &[],
                Some(json!({ "scope": i32::from(scope) })),
            )
            .await?;
        ocs::accept(&response)
    }

    /// Set the current user's notification level for the conversation
    pub async fn set_notification_level(
        &self,
        token: &str,
        level: NotificationLevel,
    ) -> Result<()> {
        require_token(token)?;
        let response = self
            .request(
                Method::POST,
                &format!("/room/{}/notify", token),
                &[],
                Some(json!({ "level": i32::from(level) })),
            )
            .await?;
        ocs::accept(&response)
    }

    /// Mark the conversation as a favorite of the current user
    pub async fn favorite(&self, token: &str) -> Result<()> {
        require_token(token)?;
        let response = self
            .request(Method::POST, &format!("/room/{}/favorite", token), &[], None)
            .await?;
        ocs::accept(&response)
    }

    /// Remove the conversation from the current user's favorites
    pub async fn unfavorite(&self, token: &str) -> Result<()> {
        require_token(token)?;
        let response = self
            .request(Method::DELETE, &format!("/room/{}/favorite", token), &[], None)
            .await?;
        ocs::accept(&response)
    }

    /// Allow or disallow guests in a group conversation
    pub async fn allow_guests(&self, token: &str, allow: bool) -> Result<()> {
        require_token(token)?;
        let method = if allow { Method::POST } else { Method::DELETE };
        let response = self
            .request(method, &format!("/room/{}/public", token), &[], None)
            .await?;
        ocs::accept(&response)
    }

    /// Join a conversation as an active participant
    pub async fn join(&self, token: &str, params: &JoinRoomParams) -> Result<Conversation> {
        require_token(token)?;
        debug!("Joining room {}", token);
        let response = self
            .request(
                Method::POST,
                &format!("/room/{}/participants/active", token),
                &[],
                Some(serde_json::to_value(params)?),
            )
            .await?;
        ocs::decode(&response)
    }

    /// Remove the current user from the conversation
    pub async fn leave(&self, token: &str) -> Result<()> {
        require_token(token)?;
        debug!("Leaving room {}", token);
        let response = self
            .request(
                Method::DELETE,
                &format!("/room/{}/participants/self", token),
                &[],
                None,
            )
            .await?;
        ocs::accept(&response)
    }
}
