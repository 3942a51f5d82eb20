//! Event system for submission progress tracking
//!
//! This module provides an in-process event bus for distributing progress
//! events to subscribers without blocking operations.
//!
//! # Architecture
//!
//! The event bus uses `tokio::sync::broadcast` for multi-subscriber support.
//! Events are emitted by the submission pipeline and can be consumed by any
//! number of subscribers (the TUI status line, logging, tests).
//!
//! # Non-Blocking Behavior
//!
//! If no subscribers exist, events are dropped immediately without allocation
//! or blocking. Subscribers can lag without blocking emitters.
//!
//! # Example
//!
//! ```no_run
//! use libciviclink::service::events::{EventBus, Event};
//!
//! # async fn example() {
//! let event_bus = EventBus::new(100);
//!
//! // Subscribe to events
//! let mut receiver = event_bus.subscribe();
//!
//! // Emit events (non-blocking)
//! event_bus.emit(Event::SubmissionStarted {
//!     report_id: "abc123".to_string(),
//! });
//!
//! // Receive events
//! if let Ok(event) = receiver.recv().await {
//!     println!("Received: {:?}", event);
//! }
//! # }
//! ```

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Event receiver type alias
pub type EventReceiver = broadcast::Receiver<Event>;

/// Event bus for distributing progress events
///
/// The event bus uses a broadcast channel to distribute events to multiple
/// subscribers. Events are dropped if no subscribers exist, ensuring
/// non-blocking behavior.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    /// Create a new event bus with the specified capacity
    ///
    /// The capacity determines how many events can be buffered per subscriber
    /// before older events are dropped (if the subscriber is lagging).
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events
    ///
    /// Returns a receiver that will receive all events emitted after
    /// subscription. Multiple subscribers are supported.
    pub fn subscribe(&self) -> EventReceiver {
        self.sender.subscribe()
    }

    /// Emit an event to all subscribers
    ///
    /// This is a non-blocking operation. If no subscribers exist, the event
    /// is dropped immediately. If subscribers are lagging, they may miss
    /// events (oldest events are dropped first).
    pub fn emit(&self, event: Event) {
        // send() returns Err if no receivers exist, which is fine
        // We don't want to block or fail if nobody is listening
        let _ = self.sender.send(event);
    }

    /// Get the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Events emitted while a report submission is in flight
///
/// All events are cloneable and serializable for flexibility in how
/// they're consumed (logging, UI updates, etc.).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Submission pipeline accepted the report
    SubmissionStarted {
        /// Client-generated report id
        report_id: String,
    },

    /// Progress update for an in-flight submission
    SubmissionProgress {
        /// Client-generated report id
        report_id: String,
        /// Status message (e.g., "Uploading photo 1/2", "Retrying in 2s")
        status: String,
    },

    /// Submission persisted successfully
    SubmissionCompleted {
        /// Client-generated report id
        report_id: String,
    },

    /// Submission gave up after exhausting retries
    SubmissionFailed {
        /// Client-generated report id
        report_id: String,
        /// Error message
        error: String,
    },
}

impl Event {
    /// The report id this event belongs to
    pub fn report_id(&self) -> &str {
        match self {
            Event::SubmissionStarted { report_id }
            | Event::SubmissionProgress { report_id, .. }
            | Event::SubmissionCompleted { report_id }
            | Event::SubmissionFailed { report_id, .. } => report_id,
        }
    }
}
