//! Conversation (room) endpoint bindings

mod api;
mod params;


pub use api::RoomsApi;
pub use params::{CreateRoomParams, JoinRoomParams, ListRoomsParams};
