//! In-process notification hub for real-time client push.
//!
//! A thin fan-out layer over a `tokio` broadcast channel. Publishers never
//! wait on or observe delivery; subscribers that fall behind miss events
//! rather than exerting backpressure.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

/// Event names carried on the hub.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    /// A task was created or mutated.
    TaskUpdated,
    /// A task was removed.
    TaskDeleted,
    /// A chat message was posted.
    MessageCreated,
}

impl EventKind {
    /// Stable wire name for the event.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TaskUpdated => "task-updated",
            Self::TaskDeleted => "task-deleted",
            Self::MessageCreated => "message-created",
        }
    }
}

/// A single published notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Routing topic, `team:<team_id>`.
    pub topic: String,
    /// Event name.
    pub event: EventKind,
    /// JSON payload snapshot of the affected entity.
    pub payload: serde_json::Value,
}

/// Fan-out hub shared between the executor, HTTP handlers, and sockets.
#[derive(Debug, Clone)]
pub struct NotificationHub {
    tx: broadcast::Sender<Notification>,
}

impl NotificationHub {
    /// Create a hub with the given broadcast buffer capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Topic string for a team's event stream.
    #[must_use]
    pub fn team_topic(team_id: &str) -> String {
        format!("team:{team_id}")
    }

    /// Publish a notification, fire-and-forget.
    ///
    /// A send error only means no subscriber is currently connected; it is
    /// ignored, never surfaced to the caller.
    pub fn publish(&self, topic: String, event: EventKind, payload: serde_json::Value) {
        let notification = Notification {
            topic,
            event,
            payload,
        };
        debug!(topic = %notification.topic, event = %notification.event.as_str(), "publish");
        let _ = self.tx.send(notification);
    }

    /// Subscribe to the full event stream.
    ///
    /// Callers filter by topic; the hub does not route per subscriber.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    /// Number of currently attached subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
