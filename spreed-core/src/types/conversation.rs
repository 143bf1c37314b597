//! Conversation (room) types

use serde::{Deserialize, Serialize};

/// The type of a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[non_exhaustive]
pub enum ConversationType {
    /// Private one-to-one conversation
    OneToOne,
    /// Group conversation, invitees only
    Group,
    /// Public conversation, joinable by guests
    Public,
    /// The changelog pseudo-conversation
    Changelog,
}

impl TryFrom<i32> for ConversationType {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ConversationType::OneToOne),
            2 => Ok(ConversationType::Group),
            3 => Ok(ConversationType::Public),
            4 => Ok(ConversationType::Changelog),
            other => Err(format!("unknown conversation type {}", other)),
        }
    }
}

impl From<ConversationType> for i32 {
    fn from(value: ConversationType) -> Self {
        match value {
            ConversationType::OneToOne => 1,
            ConversationType::Group => 2,
            ConversationType::Public => 3,
            ConversationType::Changelog => 4,
        }
    }
}

/// Per-conversation notification level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum NotificationLevel {
    /// Server default for the conversation type
    #[default]
    Default,
    /// Notify on every message
    Always,
    /// Notify on mentions only
    Mention,
    /// Never notify
    Never,
}

impl TryFrom<i32> for NotificationLevel {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(NotificationLevel::Default),
            1 => Ok(NotificationLevel::Always),
            2 => Ok(NotificationLevel::Mention),
            3 => Ok(NotificationLevel::Never),
            other => Err(format!("unknown notification level {}", other)),
        }
    }
}

impl From<NotificationLevel> for i32 {
    fn from(value: NotificationLevel) -> Self {
        match value {
            NotificationLevel::Default => 0,
            NotificationLevel::Always => 1,
            NotificationLevel::Mention => 2,
            NotificationLevel::Never => 3,
        }
    }
}

/// Who can find a conversation in search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum ListableScope {
    /// Participants only
    #[default]
    Hidden,
    /// Regular users of the instance
    Users,
    /// Users and guests
    Everyone,
}

impl TryFrom<i32> for ListableScope {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ListableScope::Hidden),
            1 => Ok(ListableScope::Users),
            2 => Ok(ListableScope::Everyone),
            other => Err(format!("unknown listable scope {}", other)),
        }
    }
}

impl From<ListableScope> for i32 {
    fn from(value: ListableScope) -> Self {
        match value {
            ListableScope::Hidden => 0,
            ListableScope::Users => 1,
            ListableScope::Everyone => 2,
        }
    }
}

/// Read-only state of a conversation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum ReadOnlyState {
    /// Messages can be posted
    #[default]
    ReadWrite,
    /// Posting is disabled
    ReadOnly,
}

impl TryFrom<i32> for ReadOnlyState {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ReadOnlyState::ReadWrite),
            1 => Ok(ReadOnlyState::ReadOnly),
            other => Err(format!("unknown read-only state {}", other)),
        }
    }
}

impl From<ReadOnlyState> for i32 {
    fn from(value: ReadOnlyState) -> Self {
        match value {
            ReadOnlyState::ReadWrite => 0,
            ReadOnlyState::ReadOnly => 1,
        }
    }
}

/// A Talk conversation as returned by the rooms endpoints
///
/// A snapshot of server state at the time of the listing or lookup; the
/// client never updates one locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Unique server-assigned token identifying the conversation
    pub token: String,
    /// Conversation type
    #[serde(rename = "type")]
    pub kind: ConversationType,
    /// Internal name
    #[serde(default)]
    pub name: String,
    /// Name shown to the user
    #[serde(default)]
    pub display_name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the current user marked the conversation as favorite
    #[serde(default)]
    pub is_favorite: bool,
    /// Whether posting is disabled
    #[serde(default)]
    pub read_only: ReadOnlyState,
    /// Who can find the conversation in search
    #[serde(default)]
    pub listable: ListableScope,
    /// Whether the conversation is password protected
    #[serde(default)]
    pub has_password: bool,
    /// Unread message count for the current user
    #[serde(default)]
    pub unread_messages: u32,
    /// Whether the current user was mentioned in unread messages
    #[serde(default)]
    pub unread_mention: bool,
    /// Timestamp of the last activity, epoch seconds
    #[serde(default)]
    pub last_activity: i64,
    /// Id of the last message the current user read
    #[serde(default)]
    pub last_read_message: i64,
    /// Notification level of the current user
    #[serde(default)]
    pub notification_level: NotificationLevel,
}
