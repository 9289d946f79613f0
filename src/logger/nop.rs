//! No-operation logger implementation.

use std::error::Error;
use std::fmt;

use crate::event::LoggingEvent;
use crate::level::Level;
use crate::logger::Logger;
use crate::marker::Marker;

/// A logger that discards all messages.
///
/// Serves as the pre-binding fallback for substitute loggers created
/// after initialization, and as a silent backend for tests and
/// benchmarks. Reports every level as disabled.
///
/// # Example
///
/// ```
/// use deferlog::logger::{Logger, NopLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NopLogger);
/// logger.info("this message is discarded");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NopLogger;

impl Logger for NopLogger {
    fn name(&self) -> &str {
        "NOP"
    }

    fn enabled(&self, _level: Level) -> bool {
        false
    }

    fn enabled_marked(&self, _level: Level, _marker: &Marker) -> bool {
        false
    }

    #[inline]
    fn log(&self, _level: Level, _message: &str) {
        // Intentionally empty - discard all log messages
    }

    #[inline]
    fn log_args(&self, _level: Level, _pattern: &str, _args: &[&dyn fmt::Display]) {}

    #[inline]
    fn log_err(&self, _level: Level, _message: &str, _error: &(dyn Error + 'static)) {}

    #[inline]
    fn log_marked(&self, _level: Level, _marker: &Marker, _message: &str) {}

    #[inline]
    fn log_marked_args(
        &self,
        _level: Level,
        _marker: &Marker,
        _pattern: &str,
        _args: &[&dyn fmt::Display],
    ) {
    }

    #[inline]
    fn log_marked_err(
        &self,
        _level: Level,
        _marker: &Marker,
        _message: &str,
        _error: &(dyn Error + 'static),
    ) {
    }

    #[inline]
    fn log_event(&self, _event: &LoggingEvent) {}
}
