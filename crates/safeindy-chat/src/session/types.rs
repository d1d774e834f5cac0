//! Session types and the in-flight guard.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use safeindy_common::EventBus;

use crate::Turn;

pub const DEFAULT_FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Knobs for one session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Action key whose utterance opens the conversation.
    pub greeting_action: String,
    /// Assistant text appended when an exchange fails.
    pub fallback_reply: String,
    /// Upper bound for one transport call.
    pub request_timeout: Duration,
    pub event_capacity: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            greeting_action: "greeting".into(),
            fallback_reply: DEFAULT_FALLBACK_REPLY.into(),
            request_timeout: Duration::from_secs(30),
            event_capacity: 64,
        }
    }
}

impl SessionSettings {
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_fallback_reply(mut self, reply: impl Into<String>) -> Self {
        self.fallback_reply = reply.into();
        self
    }
}

/// What became of a submission. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Whitespace-only input; nothing happened.
    Empty,
    /// Another exchange is in flight; nothing happened.
    Busy,
    /// `initialize` already ran.
    AlreadyStarted,
    /// The service replied and its answer was appended.
    Answered,
    /// The exchange failed and the fallback reply was appended.
    Failed,
}

impl SubmitOutcome {
    /// Whether the submission reached the transport.
    pub fn was_sent(self) -> bool {
        matches!(self, SubmitOutcome::Answered | SubmitOutcome::Failed)
    }
}

/// State changes published to renderers, in mutation order.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    TurnAppended(Turn),
    PendingChanged(bool),
}

/// Claims the session for one exchange.
///
/// `busy` is reserved on acquire so a second submit is turned away at
/// once; the visible `pending` flag only rises in `announce`, after the
/// user turn is in the transcript. Both are cleared on drop, so they are
/// released even when the submit future is cancelled mid-flight.
pub(crate) struct BusyGuard<'a> {
    busy: &'a AtomicBool,
    pending: &'a AtomicBool,
    events: &'a EventBus<SessionEvent>,
}

impl<'a> BusyGuard<'a> {
    /// Returns `None` if an exchange is already in flight.
    pub(crate) fn acquire(
        busy: &'a AtomicBool,
        pending: &'a AtomicBool,
        events: &'a EventBus<SessionEvent>,
    ) -> Option<Self> {
        busy.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self {
                busy,
                pending,
                events,
            })
    }

    /// Raise `pending` and publish the rising edge. Call once the user
    /// turn is in the transcript.
    pub(crate) fn announce(&self) {
        self.pending.store(true, Ordering::Release);
        self.events.publish(SessionEvent::PendingChanged(true));
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.pending.store(false, Ordering::Release);
        self.busy.store(false, Ordering::Release);
        self.events.publish(SessionEvent::PendingChanged(false));
    }
}
