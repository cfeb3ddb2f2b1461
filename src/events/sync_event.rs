//! Sync event types.

use serde::{Deserialize, Serialize};

/// Events emitted by the sync orchestrator at state-machine transitions.
///
/// These events are facts about a run's progress. A runtime adapter
/// translates them into whatever the UI consumes (spinners, toasts,
/// routing); the core never talks to the UI directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SyncEvent {
    /// A long-running operation started under the given topic.
    LoadingStarted { topic: String, message: String },

    /// The operation under the given topic finished, successfully or not.
    LoadingFinished { topic: String },

    /// The UI should navigate to the given view.
    Navigate { view: String },

    /// A user-facing notification.
    Message {
        title: String,
        body: String,
        icon: String,
    },
}

impl SyncEvent {
    /// Creates a LoadingStarted event.
    pub fn loading_started(topic: String, message: String) -> Self {
        Self::LoadingStarted { topic, message }
    }

    /// Creates a LoadingFinished event.
    pub fn loading_finished(topic: String) -> Self {
        Self::LoadingFinished { topic }
    }

    /// Creates a Navigate event.
    pub fn navigate(view: String) -> Self {
        Self::Navigate { view }
    }

    /// Creates a Message event.
    pub fn message(title: String, body: String, icon: String) -> Self {
        Self::Message { title, body, icon }
    }
}
