//! Notification broadcast after an alias has been written.

use crate::domain::entities::{AliasRecord, PathOperation};
use serde_json::Value;

/// A `path_insert` or `path_update` notification.
///
/// Carries the same record the save returned to its caller, including the
/// prior values on updates, so listeners can tell exactly what changed.
///
/// # Usage Flow
///
/// 1. Created by [`crate::application::services::AliasStorage::save`] after a write
/// 2. Handed to a [`crate::infrastructure::events::PathEventSink`]
/// 3. Delivered to every subscribed listener; nothing flows back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEvent {
    pub operation: PathOperation,
    pub alias: AliasRecord,
}

impl PathEvent {
    pub fn new(operation: PathOperation, alias: AliasRecord) -> Self {
        Self { operation, alias }
    }

    /// Event name: `path_insert` or `path_update`.
    pub fn name(&self) -> &'static str {
        self.operation.event_name()
    }

    /// The written field set as a JSON object.
    pub fn payload(&self) -> Value {
        serde_json::to_value(&self.alias).unwrap_or(Value::Null)
    }
}
