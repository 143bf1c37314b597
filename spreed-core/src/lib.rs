//! Core types for the spreed Nextcloud Talk client
//!
//! This crate holds the data model shared by the rest of the workspace:
//! conversations, chat messages, participants, server capabilities and the
//! error taxonomy. Everything here is a read-only snapshot of server state;
//! nothing mutates an entity without a server round trip.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod types;

// Re-export commonly used items
pub use error::{Error, Result};
pub use types::{
    capabilities::ServerCapabilities,
    conversation::{
        Conversation, ConversationType, ListableScope, NotificationLevel, ReadOnlyState,
    },
    message::{Message, MessagePage},
    participant::{Participant, ParticipantType, Permissions},
};
