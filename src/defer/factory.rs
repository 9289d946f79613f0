//! Registry of deferred loggers sharing one event queue.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dashmap::DashMap;

use crate::defer::DeferredLogger;
use crate::event::EventQueue;

/// Hands out and tracks [`DeferredLogger`] instances during startup.
///
/// All loggers created by one factory capture pre-binding events into the
/// same queue, so the host can drain and replay them in order once the
/// real backend is up. Requesting the same name twice returns the same
/// instance.
///
/// After the host's logging initialization completes it calls
/// [`post_initialization`](DeferredLoggerFactory::post_initialization);
/// loggers created after that point discard instead of recording, since
/// their events would never be replayed.
#[derive(Debug, Default)]
pub struct DeferredLoggerFactory {
    loggers: DashMap<String, Arc<DeferredLogger>>,
    queue: EventQueue,
    post_initialization: AtomicBool,
}

impl DeferredLoggerFactory {
    /// Create an empty factory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the deferred logger for `name`.
    pub fn logger(&self, name: &str) -> Arc<DeferredLogger> {
        self.loggers
            .entry(name.to_string())
            .or_insert_with(|| {
                Arc::new(DeferredLogger::new(
                    name,
                    Some(self.queue.clone()),
                    self.post_initialization.load(Ordering::Acquire),
                ))
            })
            .clone()
    }

    /// Names of every logger created so far.
    pub fn logger_names(&self) -> Vec<String> {
        self.loggers.iter().map(|e| e.key().clone()).collect()
    }

    /// Every logger created so far.
    pub fn loggers(&self) -> Vec<Arc<DeferredLogger>> {
        self.loggers.iter().map(|e| Arc::clone(e.value())).collect()
    }

    /// The queue pre-binding events are captured into.
    pub fn event_queue(&self) -> EventQueue {
        self.queue.clone()
    }

    /// Mark initialization as complete. Loggers created from now on fall
    /// back to discarding instead of recording.
    pub fn post_initialization(&self) {
        self.post_initialization.store(true, Ordering::Release);
    }

    /// Drop every tracked logger and captured event.
    pub fn clear(&self) {
        self.loggers.clear();
        self.queue.clear();
    }
}
