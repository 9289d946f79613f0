//! Pre-binding collaborator that captures calls as events.

use std::error::Error;
use std::fmt;

use crate::event::{EventQueue, LoggingEvent};
use crate::level::Level;
use crate::logger::Logger;
use crate::marker::Marker;

/// Logger that records every call as a [`LoggingEvent`] on a shared queue.
///
/// This is the backend a [`DeferredLogger`](crate::defer::DeferredLogger)
/// falls back to before a real delegate is bound: nothing is emitted, but
/// nothing is lost either. As a recorder it has no choice but to accept
/// every call, so every level reports enabled.
pub struct EventRecordingLogger {
    name: String,
    queue: EventQueue,
}

impl EventRecordingLogger {
    /// Create a recorder capturing under `name` into `queue`.
    pub fn new(name: impl Into<String>, queue: EventQueue) -> Self {
        Self {
            name: name.into(),
            queue,
        }
    }

    /// The queue this recorder captures into.
    pub fn queue(&self) -> &EventQueue {
        &self.queue
    }

    fn record(
        &self,
        level: Level,
        marker: Option<&Marker>,
        message: &str,
        args: &[&dyn fmt::Display],
        error: Option<&(dyn Error + 'static)>,
    ) {
        let mut event = LoggingEvent::new(level, self.name.clone(), message);
        event.marker = marker.cloned();
        event.args = args.iter().map(|a| a.to_string()).collect();
        event.error = error.map(|e| e.to_string());
        self.queue.push(event);
    }
}

impl Logger for EventRecordingLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn enabled(&self, _level: Level) -> bool {
        true
    }

    fn enabled_marked(&self, _level: Level, _marker: &Marker) -> bool {
        true
    }

    fn log(&self, level: Level, message: &str) {
        self.record(level, None, message, &[], None);
    }

    fn log_args(&self, level: Level, pattern: &str, args: &[&dyn fmt::Display]) {
        self.record(level, None, pattern, args, None);
    }

    fn log_err(&self, level: Level, message: &str, error: &(dyn Error + 'static)) {
        self.record(level, None, message, &[], Some(error));
    }

    fn log_marked(&self, level: Level, marker: &Marker, message: &str) {
        self.record(level, Some(marker), message, &[], None);
    }

    fn log_marked_args(
        &self,
        level: Level,
        marker: &Marker,
        pattern: &str,
        args: &[&dyn fmt::Display],
    ) {
        self.record(level, Some(marker), pattern, args, None);
    }

    fn log_marked_err(
        &self,
        level: Level,
        marker: &Marker,
        message: &str,
        error: &(dyn Error + 'static),
    ) {
        self.record(level, Some(marker), message, &[], Some(error));
    }

    fn log_event(&self, event: &LoggingEvent) {
        self.queue.push(event.clone());
    }
}
