//! Conversation session management.
//!
//! A `ConversationSession` owns the transcript and the service-issued
//! session token, and runs one exchange at a time against a `Transport`.

mod exchange;
mod manager;
mod types;

#[cfg(test)]
mod mock;

pub use manager::ConversationSession;
pub use types::{SessionEvent, SessionSettings, SubmitOutcome};
