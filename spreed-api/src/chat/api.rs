//! Chat operations against the v1 chat API

use crate::chat::params::{MessageFilter, SendMessageParams};
use crate::config::TalkConfig;
use crate::constants::{
    CHAT_API_PATH, CHAT_LAST_COMMON_READ_HEADER, CHAT_LAST_GIVEN_HEADER,
};
use crate::http::{ocs_headers, HttpClient, Method, RawResponse};
use crate::ocs;
use crate::require_token;
use crate::rich_object::RichObject;
use serde_json::{json, Value};
use spreed_core::{Error, Message, MessagePage, Result};
use std::sync::Arc;
use tracing::{debug, trace};

/// Binding for the chat endpoints
#[derive(Clone)]
pub struct ChatApi {
    config: TalkConfig,
    client: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for ChatApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatApi")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ChatApi {
    /// Create a new binding
    pub fn new(config: TalkConfig, client: Arc<dyn HttpClient>) -> Self {
        Self { config, client }
    }

    fn url(&self, path: &str) -> String {
        self.config.url(CHAT_API_PATH, path)
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

    /// Post a message to a conversation
    ///
    /// Returns the created message including its server-assigned id.
    pub async fn send(&self, token: &str, params: &SendMessageParams) -> Result<Message> {
        require_token(token)?;
        if params.message().is_empty() {
            return Err(Error::validation("message text must not be empty"));
        }

        debug!("Sending message to {}", token);
        let response = self
            .request(
                Method::POST,
                &format!("/chat/{}", token),
                &[],
                Some(serde_json::to_value(params)?),
            )
            .await?;
        ocs::decode(&response)
    }

    /// Read a page of chat history
    ///
    /// Messages come back in the order the server returned them. A 304
    /// answer (no newer/older messages) yields an empty page.
    pub async fn history(&self, token: &str, filter: &MessageFilter) -> Result<MessagePage> {
        require_token(token)?;
        trace!("Reading history of {}", token);
        let response = self
            .request(
                Method::GET,
                &format!("/chat/{}", token),
                &filter.query_pairs(),
                None,
            )
            .await?;

        if response.status == 304 {
            return Ok(MessagePage::default());
        }

        let messages: Vec<Message> = ocs::decode(&response)?;
        Ok(MessagePage {
            messages,
            last_given: response.header_i64(CHAT_LAST_GIVEN_HEADER),
            last_common_read: response.header_i64(CHAT_LAST_COMMON_READ_HEADER),
        })
    }

    /// Share a rich object into the conversation
    ///
    /// Returns the created message carrying the object placeholder.
    pub async fn share_rich_object(
        &self,
        token: &str,
        object: &RichObject,
        reference_id: Option<&str>,
    ) -> Result<Message> {
        require_token(token)?;
        let mut body = json!({
            "objectType": object.object_type(),
            "objectId": object.id(),
            "metaData": serde_json::to_string(&object.metadata())?,
        });
        if let Some(reference_id) = reference_id {
            body["referenceId"] = json!(reference_id);
        }

        debug!("Sharing {} object to {}", object.object_type(), token);
        let response = self
            .request(Method::POST, &format!("/chat/{}/share", token), &[], Some(body))
            .await?;
        ocs::decode(&response)
    }

    /// Delete a chat message
    ///
    /// Returns the replacement system message.
    pub async fn delete_message(&self, token: &str, message_id: i64) -> Result<Message> {
        require_token(token)?;
        debug!("Deleting message {} in {}", message_id, token);
        let response = self
            .request(
                Method::DELETE,
                &format!("/chat/{}/{}", token, message_id),
                &[],
                None,
            )
            .await?;
        ocs::decode(&response)
    }

    /// Clear the history of a conversation
    ///
    /// Returns the "history cleared" system message.
    pub async fn clear_history(&self, token: &str) -> Result<Message> {
        require_token(token)?;
        debug!("Clearing history of {}", token);
        let response = self
            .request(Method::DELETE, &format!("/chat/{}", token), &[], None)
            .await?;
        ocs::decode(&response)
    }

    /// Move the read marker
    ///
    /// With a message id the marker lands there; without one the whole
    /// conversation counts as read.
    pub async fn mark_read(&self, token: &str, last_read_message: Option<i64>) -> Result<()> {
        require_token(token)?;
        let body = last_read_message.map(|id| json!({ "lastReadMessage": id }));
        let response = self
            .request(Method::POST, &format!("/chat/{}/read", token), &[], body)
            .await?;
        ocs::accept(&response)
    }

    /// Mark the conversation as unread
    pub async fn mark_unread(&self, token: &str) -> Result<()> {
        require_token(token)?;
        let response = self
            .request(Method::DELETE, &format!("/chat/{}/read", token), &[], None)
            .await?;
        ocs::accept(&response)
    }
}
