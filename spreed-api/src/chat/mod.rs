//! Chat endpoint bindings

mod api;
mod params;

#[cfg(test)]
mod tests;

pub use api::ChatApi;
pub use params::{MessageFilter, SendMessageParams};
