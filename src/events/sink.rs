//! Sync event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::SyncEvent;

/// Trait for receiving sync events.
///
/// Implementations translate events into platform-specific notification
/// delivery. The orchestrator emits through this trait at defined
/// state-machine transitions.
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no network calls, no DB writes)
/// - Delivery is fire-and-forget; failures must not affect the sync run
pub trait SyncEventSink: Send + Sync {
    /// Emit a single sync event.
    fn emit(&self, event: SyncEvent);
}

/// No-op implementation for contexts that don't surface notifications.
#[derive(Clone, Default)]
pub struct NoOpSyncEventSink;

impl SyncEventSink for NoOpSyncEventSink {
    fn emit(&self, _event: SyncEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockSyncEventSink {
    events: Arc<Mutex<Vec<SyncEvent>>>,
}

impl MockSyncEventSink {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected events in emission order.
    pub fn events(&self) -> Vec<SyncEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl SyncEventSink for MockSyncEventSink {
    fn emit(&self, event: SyncEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink_does_not_panic() {
        let sink = NoOpSyncEventSink;
        sink.emit(SyncEvent::loading_finished("TRADE_HISTORY_SYNC".to_string()));
    }

    #[test]
    fn test_mock_sink_collects_events_in_order() {
        let sink = MockSyncEventSink::new();
        assert!(sink.is_empty());

        sink.emit(SyncEvent::loading_started(
            "TRADE_HISTORY_SYNC".to_string(),
            "Fetching negotiations from CEI".to_string(),
        ));
        sink.emit(SyncEvent::loading_finished("TRADE_HISTORY_SYNC".to_string()));

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], SyncEvent::LoadingStarted { .. }));
        assert!(matches!(events[1], SyncEvent::LoadingFinished { .. }));

        sink.clear();
        assert!(sink.is_empty());
    }
}
