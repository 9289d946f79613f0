//! Tracing library adapter implementation.

use std::error::Error;
use std::fmt;

use crate::format;
use crate::level::Level;
use crate::logger::Logger;
use crate::marker::Marker;

/// Logger implementation that delegates to the `tracing` crate.
///
/// This adapter bridges the [`Logger`] contract to the `tracing`
/// ecosystem, so a substitute logger bound to it emits through whatever
/// subscriber the host application installed. Markers become a `marker`
/// field, attached errors an `error` field.
///
/// # Example
///
/// ```ignore
/// use deferlog::logger::{Logger, TracingLogger};
/// use std::sync::Arc;
///
/// // Assumes a tracing subscriber is already initialized
/// let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("app"));
/// logger.info("using tracing backend");
/// ```
#[derive(Debug, Clone)]
pub struct TracingLogger {
    name: String,
}

impl TracingLogger {
    /// Create a tracing-backed logger with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn emit(&self, level: Level, marker: Option<&Marker>, message: &str) {
        let marker = marker.map(Marker::name).unwrap_or("");
        match level {
            Level::Trace => tracing::trace!(logger = %self.name, marker, "{}", message),
            Level::Debug => tracing::debug!(logger = %self.name, marker, "{}", message),
            Level::Info => tracing::info!(logger = %self.name, marker, "{}", message),
            Level::Warn => tracing::warn!(logger = %self.name, marker, "{}", message),
            Level::Error => tracing::error!(logger = %self.name, marker, "{}", message),
        }
    }
}

impl Logger for TracingLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn enabled(&self, level: Level) -> bool {
        match level {
            Level::Trace => tracing::enabled!(tracing::Level::TRACE),
            Level::Debug => tracing::enabled!(tracing::Level::DEBUG),
            Level::Info => tracing::enabled!(tracing::Level::INFO),
            Level::Warn => tracing::enabled!(tracing::Level::WARN),
            Level::Error => tracing::enabled!(tracing::Level::ERROR),
        }
    }

    fn enabled_marked(&self, level: Level, _marker: &Marker) -> bool {
        // tracing has no marker concept; markers never change enablement
        self.enabled(level)
    }

    fn log(&self, level: Level, message: &str) {
        self.emit(level, None, message);
    }

    fn log_args(&self, level: Level, pattern: &str, args: &[&dyn fmt::Display]) {
        self.emit(level, None, &format::format(pattern, args));
    }

    fn log_err(&self, level: Level, message: &str, error: &(dyn Error + 'static)) {
        self.emit(level, None, &format!("{}: {}", message, error));
    }

    fn log_marked(&self, level: Level, marker: &Marker, message: &str) {
        self.emit(level, Some(marker), message);
    }

    fn log_marked_args(
        &self,
        level: Level,
        marker: &Marker,
        pattern: &str,
        args: &[&dyn fmt::Display],
    ) {
        self.emit(level, Some(marker), &format::format(pattern, args));
    }

    fn log_marked_err(
        &self,
        level: Level,
        marker: &Marker,
        message: &str,
        error: &(dyn Error + 'static),
    ) {
        self.emit(level, Some(marker), &format!("{}: {}", message, error));
    }
}
