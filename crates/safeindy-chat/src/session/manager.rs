//! Session struct, construction, and the read-only view for renderers.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use safeindy_common::{EventBus, SessionToken};
use tokio::sync::broadcast;

use crate::{Transport, Turn};

use super::types::{SessionEvent, SessionSettings};

/// Mutable protocol state. Only touched between awaits.
#[derive(Default)]
pub(super) struct SessionState {
    pub(super) session_id: Option<SessionToken>,
    pub(super) transcript: Vec<Turn>,
}

/// One conversation with the chat service.
///
/// Share it as `Arc<ConversationSession>`; every method takes `&self`.
pub struct ConversationSession {
    pub(super) transport: Arc<dyn Transport>,
    pub(super) settings: SessionSettings,
    pub(super) state: Mutex<SessionState>,
    /// Reserved while an exchange is in flight.
    pub(super) busy: AtomicBool,
    /// Visible in-flight flag; rises once the user turn is appended.
    pub(super) pending: AtomicBool,
    /// Set by the first `initialize` call.
    pub(super) started: AtomicBool,
    /// Number of exchanges dispatched so far.
    pub(super) sequence: AtomicU64,
    pub(super) events: EventBus<SessionEvent>,
}

impl ConversationSession {
    /// A fresh, not yet greeted session.
    pub fn new(transport: Arc<dyn Transport>, settings: SessionSettings) -> Self {
        let events = EventBus::new(settings.event_capacity);
        Self {
            transport,
            settings,
            state: Mutex::new(SessionState::default()),
            busy: AtomicBool::new(false),
            pending: AtomicBool::new(false),
            started: AtomicBool::new(false),
            sequence: AtomicU64::new(0),
            events,
        }
    }

    /// Construct and run the greeting exchange, so the transcript is never
    /// empty when first rendered.
    pub async fn start(transport: Arc<dyn Transport>, settings: SessionSettings) -> Self {
        let session = Self::new(transport, settings);
        session.initialize().await;
        session
    }

    /// Snapshot of the transcript, oldest first.
    pub fn transcript(&self) -> Vec<Turn> {
        self.lock_state().transcript.clone()
    }

    pub fn turn_count(&self) -> usize {
        self.lock_state().transcript.len()
    }

    pub fn last_turn(&self) -> Option<Turn> {
        self.lock_state().transcript.last().cloned()
    }

    /// Whether an exchange is in flight. Renderers should hold back input
    /// while this is true; submissions made anyway come back `Busy`.
    pub fn pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    pub fn session_id(&self) -> Option<SessionToken> {
        self.lock_state().session_id.clone()
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::Acquire)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub(super) fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a turn and announce it.
    pub(super) fn append(&self, turn: Turn) {
        self.lock_state().transcript.push(turn.clone());
        self.events.publish(SessionEvent::TurnAppended(turn));
    }
}
