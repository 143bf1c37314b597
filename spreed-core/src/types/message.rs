//! Chat message types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chat message as returned by the chat endpoints
///
/// Created by a send operation or retrieved by a history listing; never
/// mutated locally. The id is server-assigned and unique within the
/// conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Server-assigned message id
    pub id: i64,
    /// Token of the conversation the message belongs to
    pub token: String,
    /// Actor type of the author, e.g. `users`, `guests` or `bots`
    #[serde(default)]
    pub actor_type: String,
    /// Actor id of the author
    #[serde(default)]
    pub actor_id: String,
    /// Display name of the author
    #[serde(default)]
    pub actor_display_name: String,
    /// When the message was posted, epoch seconds UTC
    #[serde(default)]
    pub timestamp: i64,
    /// Empty for normal chat messages, otherwise the system message type
    #[serde(default)]
    pub system_message: String,
    /// Message type, e.g. `comment`, `comment_deleted`, `system`
    #[serde(default)]
    pub message_type: String,
    /// The message text, with rich-object placeholders left as-is
    pub message: String,
    /// Caller-supplied reference id echoed back by the server
    #[serde(default)]
    pub reference_id: Option<String>,
    /// Whether the current user may reply to this message
    #[serde(default)]
    pub is_replyable: bool,
    /// The quoted parent when this message is a reply
    #[serde(default)]
    pub parent: Option<Box<Message>>,
}

impl Message {
    /// The post time as a chrono timestamp
    ///
    /// `None` only for timestamps outside the representable range.
    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }

    /// Whether this is a system message rather than user chat
    pub fn is_system(&self) -> bool {
        !self.system_message.is_empty()
    }
}

/// One page of chat history
///
/// Messages are in the order the server returned them (chronological for
/// history reads). The anchors come from the `X-Chat-Last-Given` and
/// `X-Chat-Last-Common-Read` response headers and feed the next request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessagePage {
    /// The messages of this page, possibly empty
    pub messages: Vec<Message>,
    /// Offset for the next page, if the server provided one
    pub last_given: Option<i64>,
    /// Id of the last message read by every user with public read privacy
    pub last_common_read: Option<i64>,
}

impl MessagePage {
    /// Whether the page contains no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of messages in the page
    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

impl IntoIterator for MessagePage {
    type Item = Message;
    type IntoIter = std::vec::IntoIter<Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}
