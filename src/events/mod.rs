//! Notification events emitted during sync runs.

mod sink;
mod sync_event;

pub use sink::{MockSyncEventSink, NoOpSyncEventSink, SyncEventSink};
pub use sync_event::SyncEvent;
