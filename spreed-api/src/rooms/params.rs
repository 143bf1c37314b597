//! Request parameters for room operations

use serde::Serialize;
use spreed_core::ConversationType;

/// Parameters for listing the user's conversations
#[derive(Debug, Clone, Default)]
pub struct ListRoomsParams {
    /// Keep the user's "online" status alive while listing
    pub status_update: bool,
    /// Load user status for one-to-one conversations
    pub include_status: bool,
}

impl ListRoomsParams {
    /// Render as query pairs
    pub(crate) fn query_pairs(&self) -> Vec<(String, String)> {
        vec![
            (
                "noStatusUpdate".into(),
                if self.status_update { "1" } else { "0" }.into(),
            ),
            ("includeStatus".into(), self.include_status.to_string()),
        ]
    }
}

/// Parameters for creating a conversation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomParams {
    room_type: ConversationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    invite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    room_name: Option<String>,
}

impl CreateRoomParams {
    /// A one-to-one conversation with the given user
    pub fn one_to_one(user: impl Into<String>) -> Self {
        Self {
            room_type: ConversationType::OneToOne,
            invite: Some(user.into()),
            source: None,
            room_name: None,
        }
    }

    /// A named group conversation
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            room_type: ConversationType::Group,
            invite: None,
            source: None,
            room_name: Some(name.into()),
        }
    }

    /// A named public conversation
    pub fn public(name: impl Into<String>) -> Self {
        Self {
            room_type: ConversationType::Public,
            invite: None,
            source: None,
            room_name: Some(name.into()),
        }
    }

    /// Invite a user, group or circle on creation
    pub fn with_invite(mut self, invitee: impl Into<String>) -> Self {
        self.invite = Some(invitee.into());
        self
    }

    /// Source of the invitee, e.g. `groups` or `circles`
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Parameters for joining a conversation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRoomParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<String>,
    force: bool,
}

impl JoinRoomParams {
    /// Join without a password, replacing any stale session
    pub fn new() -> Self {
        Self {
            password: None,
            force: true,
        }
    }

    /// Password for self-joined users and guests
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Surface a 409 instead of killing an existing session
    pub fn keep_existing_session(mut self) -> Self {
        self.force = false;
        self
    }
}

impl Default for JoinRoomParams {
    fn default() -> Self {
        Self::new()
    }
}
