use tokio::sync::broadcast;

/// Fan-out channel for state-change notifications.
///
/// Publishing never blocks and never fails; events sent while nobody is
/// subscribed are dropped.
pub struct EventBus<E: Clone> {
    sender: broadcast::Sender<E>,
}

impl<E: Clone> EventBus<E> {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<E> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers that received the event.
    pub fn publish(&self, event: E) -> usize {
        match self.sender.send(event) {
            Ok(count) => count,
            Err(_) => {
                tracing::trace!("event dropped, no subscribers");
                0
            }
        }
    }
}
