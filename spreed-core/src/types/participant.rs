//! Conversation participant types

use serde::{Deserialize, Serialize};
use std::ops::BitOr;

/// Role of an attendee within a conversation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[non_exhaustive]
pub enum ParticipantType {
    /// Conversation owner
    Owner,
    /// Moderator
    Moderator,
    /// Regular user
    #[default]
    User,
    /// Guest
    Guest,
    /// User following a public link
    PublicLink,
    /// Guest with moderator rights
    GuestModerator,
}

impl TryFrom<i32> for ParticipantType {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ParticipantType::Owner),
            2 => Ok(ParticipantType::Moderator),
            3 => Ok(ParticipantType::User),
            4 => Ok(ParticipantType::Guest),
            5 => Ok(ParticipantType::PublicLink),
            6 => Ok(ParticipantType::GuestModerator),
            other => Err(format!("unknown participant type {}", other)),
        }
    }
}

impl From<ParticipantType> for i32 {
    fn from(value: ParticipantType) -> Self {
        match value {
            ParticipantType::Owner => 1,
            ParticipantType::Moderator => 2,
            ParticipantType::User => 3,
            ParticipantType::Guest => 4,
            ParticipantType::PublicLink => 5,
            ParticipantType::GuestModerator => 6,
        }
    }
}

/// Attendee permission flag word
///
/// The server encodes permissions as a bit set; `CUSTOM` is implied by the
/// server whenever any other flag is set explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permissions(u32);

impl Permissions {
    /// Default permissions for the participant type
    pub const DEFAULT: Permissions = Permissions(0);
    /// Marker flag for customized permissions
    pub const CUSTOM: Permissions = Permissions(1);
    /// May start a call
    pub const START_CALL: Permissions = Permissions(2);
    /// May join a call
    pub const JOIN_CALL: Permissions = Permissions(4);
    /// May skip the lobby
    pub const IGNORE_LOBBY: Permissions = Permissions(8);
    /// May publish audio
    pub const PUBLISH_AUDIO: Permissions = Permissions(16);
    /// May publish video
    pub const PUBLISH_VIDEO: Permissions = Permissions(32);
    /// May share the screen
    pub const PUBLISH_SCREEN: Permissions = Permissions(64);

    /// Build from a raw server flag word
    pub fn from_bits(bits: u32) -> Self {
        Permissions(bits)
    }

    /// The raw flag word
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Whether every flag in `other` is set in `self`
    pub fn contains(self, other: Permissions) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Permissions {
    type Output = Permissions;

    fn bitor(self, rhs: Permissions) -> Permissions {
        Permissions(self.0 | rhs.0)
    }
}

/// An attendee of a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Server-assigned attendee id, stable across sessions
    pub attendee_id: i64,
    /// Actor type, e.g. `users`, `groups`, `guests`
    #[serde(default)]
    pub actor_type: String,
    /// Actor id of the attendee
    #[serde(default)]
    pub actor_id: String,
    /// Display name of the attendee
    #[serde(default)]
    pub display_name: String,
    /// Role within the conversation
    #[serde(default)]
    pub participant_type: ParticipantType,
    /// Current permission flags
    #[serde(default)]
    pub permissions: Permissions,
    /// User status, present when the listing asked for it
    #[serde(default)]
    pub status: Option<String>,
}
