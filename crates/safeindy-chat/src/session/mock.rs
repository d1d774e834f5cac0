//! Scripted transport for session tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;
use tracing::debug;

use crate::{ChatReply, ChatRequest, QuickAction, ReplyBody, Transport, TransportError};

pub(super) enum Scripted {
    Reply(ChatReply),
    Fail(TransportError),
    /// Never resolves.
    Hang,
}

pub(super) fn reply(session_id: &str, message: &str, actions: Vec<QuickAction>) -> Scripted {
    Scripted::Reply(ChatReply {
        session_id: session_id.into(),
        response: ReplyBody::new(message, actions),
    })
}

pub(super) fn failure() -> Scripted {
    Scripted::Fail(TransportError::Network("connection reset".into()))
}

/// Plays back scripted outcomes in order and records every request.
pub(super) struct MockTransport {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<ChatRequest>>,
    call_count: AtomicUsize,
    /// When set, each call waits for a permit before answering.
    gate: Option<Arc<Notify>>,
    /// Signalled once a request has been recorded.
    pub(super) dispatched: Notify,
}

impl MockTransport {
    pub(super) fn new(script: Vec<Scripted>) -> Arc<Self> {
        debug!(steps = script.len(), "MockTransport::new");
        Arc::new(Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
            gate: None,
            dispatched: Notify::new(),
        })
    }

    pub(super) fn gated(script: Vec<Scripted>, gate: Arc<Notify>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
            gate: Some(gate),
            dispatched: Notify::new(),
        })
    }

    pub(super) fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub(super) fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(super) fn last_request(&self) -> ChatRequest {
        self.requests().pop().expect("no request recorded")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, TransportError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        let next = self.script.lock().unwrap().pop_front();
        self.dispatched.notify_one();

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match next {
            Some(Scripted::Reply(reply)) => Ok(reply),
            Some(Scripted::Fail(e)) => Err(e),
            Some(Scripted::Hang) => std::future::pending().await,
            None => Err(TransportError::Parse("no more scripted replies".into())),
        }
    }
}
