//! High-level Talk client

use spreed_api::capabilities::CapabilitiesApi;
use spreed_api::constants::{
    CAPABILITY_CHAT_V2, CAPABILITY_CLEAR_HISTORY, CAPABILITY_CONVERSATION_V4,
    CAPABILITY_DELETE_MESSAGES, CAPABILITY_FAVORITES, CAPABILITY_LISTABLE_ROOMS,
    CAPABILITY_READ_ONLY_ROOMS, CAPABILITY_ROOM_DESCRIPTION,
};
use spreed_api::{
    ChatApi, CreateRoomParams, Credentials, HttpClient, JoinRoomParams, ListRoomsParams,
    MessageFilter, ParticipantsApi, PermissionsMode, ReqwestClient, RichObject, RoomsApi,
    SendMessageParams, TalkConfig,
};
use spreed_core::{
    Conversation, Error, ListableScope, Message, MessagePage, NotificationLevel, Participant,
    Permissions, ReadOnlyState, Result, ServerCapabilities,
};
use std::sync::Arc;
use tracing::debug;

/// Client for the Talk app of a Nextcloud server
///
/// Connecting fetches the server's capabilities once; afterwards every
/// method is a single request/response round trip against the REST API.
/// The client is immutable and may be shared across tasks.
///
/// # Examples
///
/// ```no_run
/// use spreed::TalkClient;
///
/// # async fn example() -> Result<(), spreed::Error> {
/// let talk = TalkClient::connect("https://cloud.example.com", "alice", "app-password").await?;
///
/// let rooms = talk.conversation_list().await?;
/// let reply = talk.send(&rooms[0].token, "good morning").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TalkClient {
    capabilities: ServerCapabilities,
    rooms: RoomsApi,
    chat: ChatApi,
    participants: ParticipantsApi,
}

impl TalkClient {
    /// Connect with username/password credentials
    pub async fn connect(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::builder(endpoint)
            .credentials(Credentials::password(username, password))
            .connect()
            .await
    }

    /// Start building a client with custom credentials or transport
    pub fn builder(endpoint: impl Into<String>) -> TalkClientBuilder {
        TalkClientBuilder::new(endpoint)
    }

    /// The `spreed` feature flags fetched at connect time
    pub fn capabilities(&self) -> &ServerCapabilities {
        &self.capabilities
    }

    /// The room bindings, for operations not wrapped here
    pub fn rooms(&self) -> &RoomsApi {
        &self.rooms
    }

    /// The chat bindings, for operations not wrapped here
    pub fn chat(&self) -> &ChatApi {
        &self.chat
    }

    /// The participant bindings, for operations not wrapped here
    pub fn participants_api(&self) -> &ParticipantsApi {
        &self.participants
    }

    fn require(&self, capability: &str) -> Result<()> {
        self.capabilities.require(capability)
    }

    // ---- Conversations -------------------------------------------------

    /// List the user's conversations
    pub async fn conversation_list(&self) -> Result<Vec<Conversation>> {
        self.rooms.list(&ListRoomsParams::default()).await
    }

    /// List the user's conversations with listing options
    pub async fn conversation_list_with(
        &self,
        params: &ListRoomsParams,
    ) -> Result<Vec<Conversation>> {
        self.rooms.list(params).await
    }

    /// List open conversations the user could join
    pub async fn open_conversation_list(&self) -> Result<Vec<Conversation>> {
        self.rooms.listed().await
    }

    /// Fetch one conversation by its token
    pub async fn conversation_get(&self, token: &str) -> Result<Conversation> {
        self.rooms.get(token).await
    }

    /// Create a conversation
    pub async fn conversation_create(&self, params: &CreateRoomParams) -> Result<Conversation> {
        self.rooms.create(params).await
    }

    /// Rename a conversation
    pub async fn conversation_rename(&self, token: &str, name: &str) -> Result<()> {
        self.rooms.rename(token, name).await
    }

    /// Delete a conversation
    pub async fn conversation_delete(&self, token: &str) -> Result<()> {
        self.rooms.delete(token).await
    }

    /// Set the conversation description
    ///
    /// Requires the `room-description` capability.
    pub async fn conversation_set_description(
        &self,
        token: &str,
        description: &str,
    ) -> Result<()> {
        self.require(CAPABILITY_ROOM_DESCRIPTION)?;
        self.rooms.set_description(token, description).await
    }

    /// Set or clear the conversation password
    pub async fn conversation_set_password(&self, token: &str, password: &str) -> Result<()> {
        self.rooms.set_password(token, password).await
    }

    /// Switch a conversation between read-only and read-write
    ///
    /// Requires the `read-only-rooms` capability.
    pub async fn conversation_set_read_only(
        &self,
        token: &str,
        state: ReadOnlyState,
    ) -> Result<()> {
        self.require(CAPABILITY_READ_ONLY_ROOMS)?;
        self.rooms.set_read_only(token, state).await
    }

    /// Change who can find the conversation in search
    ///
    /// Requires the `listable-rooms` capability.
    pub async fn conversation_set_listable(
        &self,
        token: &str,
        scope: ListableScope,
    ) -> Result<()> {
        self.require(CAPABILITY_LISTABLE_ROOMS)?;
        self.rooms.set_listable(token, scope).await
    }

    /// Mark a conversation as favorite
    ///
    /// Requires the `favorites` capability.
    pub async fn conversation_favorite(&self, token: &str) -> Result<()> {
        self.require(CAPABILITY_FAVORITES)?;
        self.rooms.favorite(token).await
    }

    /// Remove a conversation from the favorites
    ///
    /// Requires the `favorites` capability.
    pub async fn conversation_unfavorite(&self, token: &str) -> Result<()> {
        self.require(CAPABILITY_FAVORITES)?;
        self.rooms.unfavorite(token).await
    }

    /// Set the notification level for a conversation
    pub async fn conversation_set_notification_level(
        &self,
        token: &str,
        level: NotificationLevel,
    ) -> Result<()> {
        self.rooms.set_notification_level(token, level).await
    }

    /// Allow or disallow guests in a group conversation
    pub async fn conversation_allow_guests(&self, token: &str, allow: bool) -> Result<()> {
        self.rooms.allow_guests(token, allow).await
    }

    /// Join a conversation
    pub async fn conversation_join(
        &self,
        token: &str,
        params: &JoinRoomParams,
    ) -> Result<Conversation> {
        self.rooms.join(token, params).await
    }

    /// Leave a conversation
    pub async fn conversation_leave(&self, token: &str) -> Result<()> {
        self.rooms.leave(token).await
    }

    // ---- Chat ----------------------------------------------------------

    /// Send a plain text message to a conversation
    pub async fn send(&self, token: &str, message: impl Into<String>) -> Result<Message> {
        self.chat.send(token, &SendMessageParams::new(message)).await
    }

    /// Send a message with reply-to, reference id or other options
    pub async fn send_with(&self, token: &str, params: &SendMessageParams) -> Result<Message> {
        self.chat.send(token, params).await
    }

    /// Read the most recent page of chat history
    pub async fn message_list(&self, token: &str) -> Result<MessagePage> {
        self.chat.history(token, &MessageFilter::history()).await
    }

    /// Read chat history with paging and polling options
    pub async fn message_list_with(
        &self,
        token: &str,
        filter: &MessageFilter,
    ) -> Result<MessagePage> {
        self.chat.history(token, filter).await
    }

    /// Share a rich object into a conversation
    pub async fn share_rich_object(
        &self,
        token: &str,
        object: &RichObject,
        reference_id: Option<&str>,
    ) -> Result<Message> {
        self.chat.share_rich_object(token, object, reference_id).await
    }

    /// Delete a chat message, returning the replacement system message
    ///
    /// Requires the `delete-messages` capability.
    pub async fn delete_message(&self, token: &str, message_id: i64) -> Result<Message> {
        self.require(CAPABILITY_DELETE_MESSAGES)?;
        self.chat.delete_message(token, message_id).await
    }

    /// Clear the history of a conversation
    ///
    /// Requires the `clear-history` capability.
    pub async fn clear_history(&self, token: &str) -> Result<Message> {
        self.require(CAPABILITY_CLEAR_HISTORY)?;
        self.chat.clear_history(token).await
    }

    /// Move the read marker, or mark everything read
    pub async fn mark_read(&self, token: &str, last_read_message: Option<i64>) -> Result<()> {
        self.chat.mark_read(token, last_read_message).await
    }

    /// Mark a conversation as unread
    pub async fn mark_unread(&self, token: &str) -> Result<()> {
        self.chat.mark_unread(token).await
    }

    // ---- Participants --------------------------------------------------

    /// List the attendees of a conversation
    pub async fn participants(&self, token: &str) -> Result<Vec<Participant>> {
        self.participants.list(token, false).await
    }

    /// List the attendees including their user status
    pub async fn participants_with_status(&self, token: &str) -> Result<Vec<Participant>> {
        self.participants.list(token, true).await
    }

    /// Invite a user to a conversation
    pub async fn participant_add(&self, token: &str, invitee: &str) -> Result<()> {
        self.participants.add(token, invitee).await
    }

    /// Remove an attendee from a conversation
    pub async fn participant_remove(&self, token: &str, attendee_id: i64) -> Result<()> {
        self.participants.remove(token, attendee_id).await
    }

    /// Promote an attendee to moderator
    pub async fn participant_promote(&self, token: &str, attendee_id: i64) -> Result<()> {
        self.participants.promote(token, attendee_id).await
    }

    /// Demote a moderator
    pub async fn participant_demote(&self, token: &str, attendee_id: i64) -> Result<()> {
        self.participants.demote(token, attendee_id).await
    }

    /// Update an attendee's permission flags
    pub async fn participant_set_permissions(
        &self,
        token: &str,
        attendee_id: i64,
        mode: PermissionsMode,
        permissions: Permissions,
    ) -> Result<()> {
        self.participants
            .set_permissions(token, attendee_id, mode, permissions)
            .await
    }
}

/// Builder for [`TalkClient`]
///
/// ```no_run
/// use spreed::{Credentials, TalkClient};
///
/// # async fn example() -> Result<(), spreed::Error> {
/// let talk = TalkClient::builder("https://cloud.example.com")
///     .credentials(Credentials::bearer("app-token"))
///     .connect()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct TalkClientBuilder {
    endpoint: String,
    credentials: Option<Credentials>,
    client: Option<Arc<dyn HttpClient>>,
}

impl TalkClientBuilder {
    /// Start a builder for the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            credentials: None,
            client: None,
        }
    }

    /// Username/password credentials
    pub fn password(self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials(Credentials::password(username, password))
    }

    /// Explicit credentials
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom HTTP client
    pub fn with_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Fetch the server capabilities and build the client
    ///
    /// Fails with [`Error::MissingCapability`] when the server does not
    /// speak the conversation and chat API versions this client needs.
    pub async fn connect(self) -> Result<TalkClient> {
        let credentials = self
            .credentials
            .ok_or_else(|| Error::configuration("no credentials provided"))?;
        let config = TalkConfig::new(&self.endpoint, credentials)?;

        let client = match self.client {
            Some(client) => client,
            None => Arc::new(ReqwestClient::new()?),
        };

        let capabilities = CapabilitiesApi::new(config.clone(), client.clone())
            .fetch()
            .await?;
        capabilities.require(CAPABILITY_CONVERSATION_V4)?;
        capabilities.require(CAPABILITY_CHAT_V2)?;
        debug!(
            "Connected to {} ({} spreed features)",
            config.base_url(),
            capabilities.features.len()
        );

        Ok(TalkClient {
            rooms: RoomsApi::new(config.clone(), client.clone()),
            chat: ChatApi::new(config.clone(), client.clone()),
            participants: ParticipantsApi::new(config, client),
            capabilities,
        })
    }
}
