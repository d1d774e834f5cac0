//! `Transport` that answers with the built-in engine.

use async_trait::async_trait;
use safeindy_common::SessionToken;
use tracing::debug;

use crate::{ChatReply, ChatRequest, Transport, TransportError};

use super::{classify, extract_entities, lookup, respond};

/// Answers every request locally. Never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineTransport;

impl OfflineTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Transport for OfflineTransport {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, TransportError> {
        let session_id = request
            .session_id
            .clone()
            .unwrap_or_else(SessionToken::generate);

        if let Some(response) = lookup(&request.message) {
            debug!("offline directory reply");
            return Ok(ChatReply {
                session_id,
                response,
            });
        }

        let (intent, confidence) = classify(&request.message);
        let entities = extract_entities(&request.message, intent);
        debug!(
            intent = intent.as_str(),
            confidence,
            ?entities,
            "offline reply"
        );

        Ok(ChatReply {
            session_id,
            response: respond(intent, &entities),
        })
    }
}
