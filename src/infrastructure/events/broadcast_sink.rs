//! Broadcast channel event sink.

use super::PathEventSink;
use crate::domain::path_event::PathEvent;
use tokio::sync::broadcast;
use tracing::debug;

/// Fans path events out to all subscribed listeners.
///
/// Listeners that fall more than `capacity` events behind miss the oldest
/// ones and observe `RecvError::Lagged`.
#[derive(Clone)]
pub struct BroadcastEventSink {
    tx: broadcast::Sender<PathEvent>,
}

impl BroadcastEventSink {
    /// Creates a sink buffering up to `capacity` events per listener.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Registers a new listener. It receives events sent after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<PathEvent> {
        self.tx.subscribe()
    }
}

impl PathEventSink for BroadcastEventSink {
    fn notify(&self, event: PathEvent) {
        let name = event.name();
        let pid = event.alias.pid;

        match self.tx.send(event) {
            Ok(listeners) => debug!(event = name, pid, listeners, "Path event sent"),
            Err(_) => debug!(event = name, pid, "No listeners for path event"),
        }
    }
}
