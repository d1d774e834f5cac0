//! Conversation core for the SafeIndy client.
//!
//! Provides:
//! - `ConversationSession`, the turn-taking state machine
//! - the `Transport` seam plus an HTTP and an offline implementation
//! - the static quick-action table

pub mod http;
pub mod offline;
pub mod quick_action;
pub mod session;
pub mod turn;
pub mod wire;

use async_trait::async_trait;

pub use http::{HttpConfig, HttpTransport};
pub use offline::OfflineTransport;
pub use quick_action::{canned_utterance, utterance_for, ACTION_UTTERANCES};
pub use session::{ConversationSession, SessionEvent, SessionSettings, SubmitOutcome};
pub use turn::{Origin, QuickAction, Turn};
pub use wire::{ChatReply, ChatRequest, ReplyBody};

/// One request/response exchange with the chat service.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("timed out")]
    Timeout,
}
