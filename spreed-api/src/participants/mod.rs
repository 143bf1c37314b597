//! Participant endpoint bindings

mod api;


pub use api::{ParticipantsApi, PermissionsMode};
