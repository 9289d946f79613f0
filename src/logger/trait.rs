//! Logger trait definition.

use std::error::Error;
use std::fmt;

use crate::event::LoggingEvent;
use crate::level::Level;
use crate::marker::Marker;

/// Logging interface implemented by every backend in this crate.
///
/// The surface is level-parameterized: one method per call shape
/// (plain message, pattern + arguments, message + error, and the three
/// marker-qualified forms), each taking the [`Level`] explicitly. The
/// per-level conveniences (`trace`, `debug`, ...) are provided methods
/// that delegate to [`Logger::log`].
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across threads.
///
/// # Example
///
/// ```
/// use deferlog::logger::{Logger, NopLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NopLogger);
/// logger.info("application started");
/// ```
pub trait Logger: Send + Sync {
    /// The logger's identity. Answered locally by every implementation;
    /// never part of the forwarded surface.
    fn name(&self) -> &str;

    /// Whether calls at `level` would be recorded or emitted.
    fn enabled(&self, level: Level) -> bool;

    /// Whether calls at `level` with `marker` would be recorded or emitted.
    fn enabled_marked(&self, level: Level, marker: &Marker) -> bool;

    /// Log a plain message.
    fn log(&self, level: Level, message: &str);

    /// Log a pattern with `{}` anchors substituted from `args`.
    fn log_args(&self, level: Level, pattern: &str, args: &[&dyn fmt::Display]);

    /// Log a message together with an error.
    fn log_err(&self, level: Level, message: &str, error: &(dyn Error + 'static));

    /// Log a plain message tagged with a marker.
    fn log_marked(&self, level: Level, marker: &Marker, message: &str);

    /// Log a pattern with arguments, tagged with a marker.
    fn log_marked_args(
        &self,
        level: Level,
        marker: &Marker,
        pattern: &str,
        args: &[&dyn fmt::Display],
    );

    /// Log a message with an error, tagged with a marker.
    fn log_marked_err(
        &self,
        level: Level,
        marker: &Marker,
        message: &str,
        error: &(dyn Error + 'static),
    );

    /// Emit a previously captured event.
    ///
    /// The default implementation re-dispatches the event's rendered
    /// message through [`Logger::log`] or [`Logger::log_marked`].
    /// Backends that understand events natively can override this to
    /// preserve the original timestamp and thread name.
    fn log_event(&self, event: &LoggingEvent) {
        let message = event.rendered_message();
        match &event.marker {
            Some(marker) => self.log_marked(event.level, marker, &message),
            None => self.log(event.level, &message),
        }
    }

    /// Convenience: trace level.
    fn trace(&self, message: &str) {
        self.log(Level::Trace, message);
    }
    /// Convenience: debug level.
    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }
    /// Convenience: info level.
    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }
    /// Convenience: warn level.
    fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }
    /// Convenience: error level.
    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }
}

/// Convenience macros for logging with format strings.
///
/// These accept any expression implementing `Logger` and standard
/// `format!` syntax.
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::Level::Trace, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::Level::Debug, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::Level::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::Level::Warn, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log($crate::Level::Error, &format!($($arg)*))
    };
}
