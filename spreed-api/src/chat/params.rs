//! Request parameters for chat operations

use crate::constants::DEFAULT_MESSAGE_LIMIT;
use serde::Serialize;
use uuid::Uuid;

/// Parameters for posting a chat message
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageParams {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    actor_display_name: Option<String>,
    silent: bool,
}

impl SendMessageParams {
    /// A plain chat message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            reply_to: None,
            reference_id: None,
            actor_display_name: None,
            silent: false,
        }
    }

    /// Reply to an earlier message of the same conversation
    pub fn with_reply_to(mut self, message_id: i64) -> Self {
        self.reply_to = Some(message_id);
        self
    }

    /// Attach a caller-chosen reference id, echoed back by the server
    pub fn with_reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.reference_id = Some(reference_id.into());
        self
    }

    /// Attach a freshly generated reference id
    pub fn with_generated_reference_id(mut self) -> Self {
        self.reference_id = Some(Uuid::new_v4().simple().to_string());
        self
    }

    /// Display name shown for guests; ignored for logged-in users
    pub fn with_actor_display_name(mut self, name: impl Into<String>) -> Self {
        self.actor_display_name = Some(name.into());
        self
    }

    /// Suppress chat notifications, even for mentions
    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }

    /// The message text
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The reference id, if any
    pub fn reference_id(&self) -> Option<&str> {
        self.reference_id.as_deref()
    }
}

/// Filter for reading chat history
///
/// The default reads the most recent page of history. `updates` polls for
/// messages newer than a known id; the server holds such a request open up
/// to `timeout_secs` before answering 304.
#[derive(Debug, Clone)]
pub struct MessageFilter {
    look_into_future: bool,
    limit: u32,
    last_known_message: Option<i64>,
    last_common_read: Option<i64>,
    timeout_secs: Option<u32>,
    set_read_marker: bool,
    include_last_known: bool,
}

impl MessageFilter {
    /// Read existing history, newest first from the read marker
    pub fn history() -> Self {
        Self {
            look_into_future: false,
            limit: DEFAULT_MESSAGE_LIMIT,
            last_known_message: None,
            last_common_read: None,
            timeout_secs: None,
            set_read_marker: true,
            include_last_known: false,
        }
    }

    /// Wait for messages newer than the given id
    pub fn updates(last_known_message: i64) -> Self {
        Self {
            look_into_future: true,
            last_known_message: Some(last_known_message),
            ..Self::history()
        }
    }

    /// Number of messages to fetch (server caps this at 200)
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Offset anchor from a previous page's `last_given`
    pub fn with_last_known_message(mut self, id: i64) -> Self {
        self.last_known_message = Some(id);
        self
    }

    /// Ask for common-read updates relative to this id
    pub fn with_last_common_read(mut self, id: i64) -> Self {
        self.last_common_read = Some(id);
        self
    }

    /// How long the server may hold an `updates` request open
    pub fn with_timeout_secs(mut self, secs: u32) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Leave the read marker untouched when fetching
    pub fn keep_read_marker(mut self) -> Self {
        self.set_read_marker = false;
        self
    }

    /// Include the anchor message itself in the page
    pub fn with_last_known_included(mut self) -> Self {
        self.include_last_known = true;
        self
    }

    /// Render as query pairs
    pub(crate) fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            (
                "lookIntoFuture".into(),
                if self.look_into_future { "1" } else { "0" }.into(),
            ),
            ("limit".into(), self.limit.to_string()),
            (
                "setReadMarker".into(),
                if self.set_read_marker { "1" } else { "0" }.into(),
            ),
            (
                "includeLastKnown".into(),
                if self.include_last_known { "1" } else { "0" }.into(),
            ),
        ];
        if let Some(id) = self.last_known_message {
            pairs.push(("lastKnownMessageId".into(), id.to_string()));
        }
        if let Some(id) = self.last_common_read {
            pairs.push(("lastCommonReadId".into(), id.to_string()));
        }
        if let Some(secs) = self.timeout_secs {
            pairs.push(("timeout".into(), secs.to_string()));
        }
        pairs
    }
}

impl Default for MessageFilter {
    fn default() -> Self {
        Self::history()
    }
}
