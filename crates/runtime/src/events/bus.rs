//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};
use tokio::sync::broadcast;

use super::types::{TimerEvent, TurnEvent};

const TRACE_TARGET: &str = "runtime::events";

/// Topics for event routing
#[derive(
    Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, strum::EnumCount, strum::EnumIter,
)]
pub enum Topic {
    /// Timer state broadcasts
    Timer,
    /// Actions forced on players by the runtime
    Turn,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Timer(TimerEvent),
    Turn(TurnEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Timer(_) => Topic::Timer,
            Event::Turn(_) => Topic::Turn,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Every topic has its own channel, created up front.
#[derive(Clone)]
pub struct EventBus {
    channels: [broadcast::Sender<Event>; Topic::COUNT],
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: std::array::from_fn(|_| broadcast::channel(capacity).0),
        }
    }

    /// Publish an event to its corresponding topic
    ///
    /// Best-effort: an event nobody listens to is dropped.
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            tracing::trace!(target: TRACE_TARGET, ?topic, "no subscribers for topic");
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to every topic at once.
    pub fn subscribe_all(&self) -> Vec<(Topic, broadcast::Receiver<Event>)> {
        Topic::iter().map(|topic| (topic, self.subscribe(topic))).collect()
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        &self.channels[topic as usize]
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
