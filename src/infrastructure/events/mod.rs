//! Delivery of `path_insert` / `path_update` notifications.
//!
//! - [`PathEventSink`] - Fire-and-forget notification trait
//! - [`BroadcastEventSink`] - Fan-out to every subscribed listener over a tokio broadcast channel

mod broadcast_sink;

pub use broadcast_sink::BroadcastEventSink;

use crate::domain::path_event::PathEvent;

/// Receives a notification after every successful alias write.
///
/// Delivery is fire-and-forget: implementations must not block the writer
/// and have no way to report back.
#[cfg_attr(test, mockall::automock)]
pub trait PathEventSink: Send + Sync {
    fn notify(&self, event: PathEvent);
}
