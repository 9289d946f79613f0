//! The deferred-binding logger proxy.

use std::error::Error;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::defer::EventRecordingLogger;
use crate::event::{EventQueue, LoggingEvent};
use crate::level::Level;
use crate::logger::{Logger, NopLogger};
use crate::marker::Marker;

/// A logger usable before the real backend is configured.
///
/// Created during early startup when no backend exists yet. Until
/// [`set_delegate`](DeferredLogger::set_delegate) is called, calls go to a
/// fallback chosen at construction: an [`EventRecordingLogger`] capturing
/// into the shared queue for loggers created during initialization, or a
/// [`NopLogger`] for loggers created after. Once bound, every call except
/// [`name`](Logger::name) is forwarded verbatim to the delegate with
/// identical arguments; panics from the delegate propagate unchanged.
///
/// # Example
///
/// ```
/// use deferlog::defer::DeferredLogger;
/// use deferlog::event::EventQueue;
/// use deferlog::logger::{Logger, NopLogger};
/// use std::sync::Arc;
///
/// let queue = EventQueue::new();
/// let logger = DeferredLogger::new("startup", Some(queue.clone()), false);
///
/// logger.info("captured until a backend is bound");
/// assert_eq!(queue.len(), 1);
///
/// logger.set_delegate(Arc::new(NopLogger));
/// logger.info("now forwarded");
/// assert_eq!(queue.len(), 1);
/// ```
pub struct DeferredLogger {
    name: String,
    delegate: RwLock<Option<Arc<dyn Logger>>>,
    fallback: Arc<dyn Logger>,
}

impl DeferredLogger {
    /// Create an unbound logger.
    ///
    /// A logger created during initialization (`created_post_initialization`
    /// false) records pre-binding calls as events; `queue` is the shared
    /// destination, or a private queue when `None`. A logger created after
    /// initialization discards pre-binding calls.
    pub fn new(
        name: impl Into<String>,
        queue: Option<EventQueue>,
        created_post_initialization: bool,
    ) -> Self {
        let name = name.into();
        let fallback: Arc<dyn Logger> = if created_post_initialization {
            Arc::new(NopLogger)
        } else {
            Arc::new(EventRecordingLogger::new(
                name.clone(),
                queue.unwrap_or_default(),
            ))
        };
        Self {
            name,
            delegate: RwLock::new(None),
            fallback,
        }
    }

    /// Bind the real backend.
    ///
    /// Typically called once, after the host's logging initialization
    /// completes. Rebinding is permitted and last-write-wins; callers that
    /// need bind-exactly-once semantics should check
    /// [`is_bound`](DeferredLogger::is_bound) first.
    pub fn set_delegate(&self, delegate: Arc<dyn Logger>) {
        *self.delegate.write().unwrap() = Some(delegate);
    }

    /// The logger all calls currently go to: the bound delegate if set,
    /// otherwise the construction-time fallback.
    pub fn delegate(&self) -> Arc<dyn Logger> {
        if let Some(delegate) = self.delegate.read().unwrap().as_ref() {
            return Arc::clone(delegate);
        }
        Arc::clone(&self.fallback)
    }

    /// Whether a delegate has been bound.
    pub fn is_bound(&self) -> bool {
        self.delegate.read().unwrap().is_some()
    }

    /// Whether the bound delegate is the no-op logger, by its fixed
    /// `"NOP"` name contract. False while unbound.
    pub fn delegate_is_nop(&self) -> bool {
        self.delegate
            .read()
            .unwrap()
            .as_ref()
            .map(|d| d.name() == "NOP")
            .unwrap_or(false)
    }
}

impl Logger for DeferredLogger {
    /// Answered locally; never forwarded to the delegate.
    fn name(&self) -> &str {
        &self.name
    }

    fn enabled(&self, level: Level) -> bool {
        self.delegate().enabled(level)
    }

    fn enabled_marked(&self, level: Level, marker: &Marker) -> bool {
        self.delegate().enabled_marked(level, marker)
    }

    fn log(&self, level: Level, message: &str) {
        self.delegate().log(level, message);
    }

    fn log_args(&self, level: Level, pattern: &str, args: &[&dyn fmt::Display]) {
        self.delegate().log_args(level, pattern, args);
    }

    fn log_err(&self, level: Level, message: &str, error: &(dyn Error + 'static)) {
        self.delegate().log_err(level, message, error);
    }

    fn log_marked(&self, level: Level, marker: &Marker, message: &str) {
        self.delegate().log_marked(level, marker, message);
    }

    fn log_marked_args(
        &self,
        level: Level,
        marker: &Marker,
        pattern: &str,
        args: &[&dyn fmt::Display],
    ) {
        self.delegate().log_marked_args(level, marker, pattern, args);
    }

    fn log_marked_err(
        &self,
        level: Level,
        marker: &Marker,
        message: &str,
        error: &(dyn Error + 'static),
    ) {
        self.delegate().log_marked_err(level, marker, message, error);
    }

    fn log_event(&self, event: &LoggingEvent) {
        self.delegate().log_event(event);
    }
}

impl PartialEq for DeferredLogger {
    /// Deferred loggers are identified by name.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for DeferredLogger {}

impl fmt::Debug for DeferredLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredLogger")
            .field("name", &self.name)
            .field("bound", &self.is_bound())
            .finish()
    }
}
