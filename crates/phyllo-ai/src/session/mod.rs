//! Conversation session management.
//!
//! A [`Session`] owns the chat [`Transcript`] and the generation options
//! sent with every request, and allows one request in flight at a time.

mod chat;
mod manager;
mod transcript;
mod types;

pub use manager::Session;
pub use transcript::Transcript;
