//! Async operations that drive the conversation: greeting, submit, and
//! quick-action taps.

use std::sync::atomic::Ordering;

use safeindy_common::new_correlation_id;
use tracing::{debug, info, warn, Instrument};

use crate::quick_action::utterance_for;
use crate::{ChatReply, ChatRequest, TransportError, Turn};

use super::manager::ConversationSession;
use super::types::{BusyGuard, SubmitOutcome};

impl ConversationSession {
    /// Send the greeting as if the user had typed it. Runs once; later
    /// calls return `AlreadyStarted`.
    pub async fn initialize(&self) -> SubmitOutcome {
        if self.started.swap(true, Ordering::AcqRel) {
            debug!("session already started");
            return SubmitOutcome::AlreadyStarted;
        }
        let greeting = self.settings.greeting_action.clone();
        self.resolve_quick_action(&greeting).await
    }

    /// Send what a quick action stands for. Unknown keys are sent as-is.
    pub async fn resolve_quick_action(&self, action_key: &str) -> SubmitOutcome {
        self.submit(utterance_for(action_key)).await
    }

    /// Submit user text and wait for the exchange to resolve.
    ///
    /// The user turn is appended before the request goes out; exactly one
    /// assistant turn follows once the exchange resolves, either the
    /// service's reply or the fallback text. Transport failures never
    /// escape this method.
    pub async fn submit(&self, raw_text: &str) -> SubmitOutcome {
        if raw_text.trim().is_empty() {
            return SubmitOutcome::Empty;
        }
        let Some(guard) = BusyGuard::acquire(&self.busy, &self.pending, &self.events) else {
            debug!("submit rejected, exchange already in flight");
            return SubmitOutcome::Busy;
        };

        let seq = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let span = tracing::info_span!("exchange", seq, id = %new_correlation_id());
        self.run_exchange(raw_text, &guard).instrument(span).await
    }

    async fn run_exchange(&self, raw_text: &str, guard: &BusyGuard<'_>) -> SubmitOutcome {
        let session_id = self.lock_state().session_id.clone();
        self.append(Turn::user(raw_text));
        guard.announce();

        let request = ChatRequest {
            message: raw_text.to_string(),
            session_id,
        };
        let result = match tokio::time::timeout(
            self.settings.request_timeout,
            self.transport.send(&request),
        )
        .await
        {
            Ok(result) => result.and_then(check_reply),
            Err(_) => Err(TransportError::Timeout),
        };

        match result {
            Ok(reply) => {
                let token = reply.session_id;
                let body = reply.response;
                let actions = body.quick_actions.unwrap_or_default();
                info!(actions = actions.len(), "reply received");
                self.lock_state().session_id = Some(token);
                self.append(Turn::assistant(body.message, actions));
                SubmitOutcome::Answered
            }
            Err(e) => {
                warn!(error = %e, "exchange failed, showing fallback reply");
                self.append(Turn::assistant(
                    self.settings.fallback_reply.clone(),
                    Vec::new(),
                ));
                SubmitOutcome::Failed
            }
        }
    }
}

/// A reply without a usable session token cannot continue the
/// conversation, so it counts as malformed.
fn check_reply(reply: ChatReply) -> Result<ChatReply, TransportError> {
    if reply.session_id.as_str().trim().is_empty() {
        return Err(TransportError::Parse("reply carried an empty session_id".into()));
    }
    Ok(reply)
}
