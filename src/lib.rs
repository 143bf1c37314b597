//! Spreed - a Rust client for the Nextcloud Talk REST API
//!
//! This crate provides a typed, async binding for the Talk (`spreed`) app
//! of a Nextcloud server: listing conversations, sending and reading chat
//! messages, and managing rooms and participants.
//!
//! # Features
//!
//! - **Typed records**: conversations, messages and participants as plain
//!   structs deserialized from the OCS envelope
//! - **One call, one request**: every method is a single HTTP round trip,
//!   with no retries, caching or background polling
//! - **Capability aware**: the server's `spreed` feature flags are fetched
//!   once at connect and gate the operations that need them
//! - **Swappable transport**: the HTTP layer sits behind a trait, so tests
//!   can run against a mock server
//!
//! # Quick Start
//!
//! ```no_run
//! use spreed::TalkClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), spreed::Error> {
//! let talk = TalkClient::connect("https://cloud.example.com", "alice", "app-password").await?;
//!
//! for room in talk.conversation_list().await? {
//!     println!("{}: {}", room.token, room.display_name);
//! }
//!
//! let sent = talk.send("23pw7aud", "hello").await?;
//! println!("message {} delivered", sent.id);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Re-export core types
pub use spreed_core::*;

// Re-export the pieces needed to construct and customize a client
pub use spreed_api::{Credentials, TalkConfig};

/// REST bindings and transport plumbing
pub mod api {
    pub use spreed_api::*;
}

mod client;
pub use client::{TalkClient, TalkClientBuilder};
