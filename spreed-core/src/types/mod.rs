//! Data model for the Talk API
//!
//! Wire shapes follow the spreed REST API: camelCase field names, integer
//! codes for the enumerated states. Fields this client does not model are
//! dropped during deserialization.

pub mod capabilities;
pub mod conversation;
pub mod message;
pub mod participant;

pub use capabilities::ServerCapabilities;
pub use conversation::{
    Conversation, ConversationType, ListableScope, NotificationLevel, ReadOnlyState,
};
pub use message::{Message, MessagePage};
pub use participant::{Participant, ParticipantType, Permissions};
