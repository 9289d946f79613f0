//! Captured logging events and the queue that holds them.
//!
//! Before a real backend is bound, substitute loggers capture calls as
//! [`LoggingEvent`]s into a shared [`EventQueue`]. After binding, the host
//! drains the queue and replays each event through
//! [`Logger::log_event`](crate::logger::Logger::log_event). Queue capacity is
//! unbounded; replay ordering is the capture order.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::format;
use crate::level::Level;
use crate::marker::Marker;

/// One logging call captured while no backend was bound.
#[derive(Debug, Clone)]
pub struct LoggingEvent {
    /// Severity of the captured call.
    pub level: Level,
    /// Marker attached to the call, if any.
    pub marker: Option<Marker>,
    /// Name of the logger the call was made on.
    pub logger_name: String,
    /// Raw message or format pattern, before substitution.
    pub message: String,
    /// Arguments rendered to strings at capture time.
    pub args: Vec<String>,
    /// Rendered error attached to the call, if any.
    pub error: Option<String>,
    /// Capture timestamp.
    pub timestamp: DateTime<Utc>,
    /// Name of the thread the call was made on.
    pub thread_name: String,
}

impl LoggingEvent {
    /// Create an event for the current instant on the current thread.
    pub fn new(level: Level, logger_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            marker: None,
            logger_name: logger_name.into(),
            message: message.into(),
            args: Vec::new(),
            error: None,
            timestamp: Utc::now(),
            thread_name: std::thread::current()
                .name()
                .unwrap_or("unnamed")
                .to_string(),
        }
    }

    /// The message with `{}` anchors substituted and any captured error
    /// appended.
    pub fn rendered_message(&self) -> String {
        let args: Vec<&dyn std::fmt::Display> =
            self.args.iter().map(|a| a as &dyn std::fmt::Display).collect();
        let mut rendered = format::format(&self.message, &args);
        if let Some(error) = &self.error {
            rendered.push_str(": ");
            rendered.push_str(error);
        }
        rendered
    }
}

/// Cloneable handle to a shared FIFO of captured events.
///
/// All clones observe the same queue. Push order is drain order.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    inner: Arc<Mutex<VecDeque<LoggingEvent>>>,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&self, event: LoggingEvent) {
        self.inner.lock().unwrap().push_back(event);
    }

    /// Remove and return every queued event, oldest first.
    pub fn drain(&self) -> Vec<LoggingEvent> {
        self.inner.lock().unwrap().drain(..).collect()
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    /// Whether the queue holds no events.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }

    /// Discard every queued event.
    pub fn clear(&self) {
        self.inner.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_captures_thread_and_time() {
        let event = LoggingEvent::new(Level::Info, "app", "started");
        assert_eq!(event.logger_name, "app");
        assert_eq!(event.message, "started");
        assert!(!event.thread_name.is_empty());
        assert!(event.timestamp <= Utc::now());
    }

    #[test]
    fn test_rendered_message_substitutes_args() {
        let mut event = LoggingEvent::new(Level::Debug, "app", "loaded {} of {}");
        event.args = vec!["3".to_string(), "9".to_string()];
        assert_eq!(event.rendered_message(), "loaded 3 of 9");
    }

    #[test]
    fn test_rendered_message_appends_error() {
        let mut event = LoggingEvent::new(Level::Error, "app", "write failed");
        event.error = Some("disk full".to_string());
        assert_eq!(event.rendered_message(), "write failed: disk full");
    }

    #[test]
    fn test_queue_push_and_drain_preserves_order() {
        let queue = EventQueue::new();
        queue.push(LoggingEvent::new(Level::Info, "a", "first"));
        queue.push(LoggingEvent::new(Level::Warn, "a", "second"));

        assert_eq!(queue.len(), 2);
        let events = queue.drain();
        assert_eq!(events[0].message, "first");
        assert_eq!(events[1].message, "second");
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_clones_share_state() {
        let queue = EventQueue::new();
        let other = queue.clone();
        queue.push(LoggingEvent::new(Level::Info, "a", "shared"));
        assert_eq!(other.len(), 1);
        other.clear();
        assert!(queue.is_empty());
    }
}
