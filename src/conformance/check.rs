//! The forwarding conformance sweep.

use crate::conformance::{ConformanceError, LogOp, RecordingLogger};
use crate::logger::Logger;

/// Invoke every operation of the logging surface once on `logger` and
/// verify each one reached `recorder`.
///
/// `recorder` must be observing `logger`, typically as the bound delegate
/// of a [`DeferredLogger`](crate::defer::DeferredLogger) under test. On
/// failure the error names every operation that was invoked but never
/// observed.
///
/// # Example
///
/// ```
/// use deferlog::conformance::{check_forwarding, RecordingLogger};
/// use deferlog::defer::DeferredLogger;
/// use std::sync::Arc;
///
/// let recorder = Arc::new(RecordingLogger::new());
/// let logger = DeferredLogger::new("under-test", None, false);
/// logger.set_delegate(recorder.clone());
///
/// check_forwarding(&logger, &recorder).unwrap();
/// ```
pub fn check_forwarding(
    logger: &dyn Logger,
    recorder: &RecordingLogger,
) -> Result<(), ConformanceError> {
    for op in LogOp::all() {
        op.invoke(logger);
    }

    let observed = recorder.operations();
    let missing: Vec<String> = LogOp::all()
        .filter(|op| !observed.contains(op))
        .map(|op| op.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConformanceError::NotForwarded {
            operations: missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::LoggingEvent;
    use crate::level::Level;
    use crate::marker::Marker;
    use std::error::Error;
    use std::fmt;
    use std::sync::Arc;

    #[test]
    fn test_recording_logger_conforms_to_itself() {
        let recorder = RecordingLogger::new();
        check_forwarding(&recorder, &recorder).unwrap();
    }

    /// Forwards everything except error-taking calls, to exercise the
    /// failure report.
    struct LeakyProxy {
        target: Arc<RecordingLogger>,
    }

    impl crate::logger::Logger for LeakyProxy {
        fn name(&self) -> &str {
            "leaky"
        }
        fn enabled(&self, level: Level) -> bool {
            self.target.enabled(level)
        }
        fn enabled_marked(&self, level: Level, marker: &Marker) -> bool {
            self.target.enabled_marked(level, marker)
        }
        fn log(&self, level: Level, message: &str) {
            self.target.log(level, message);
        }
        fn log_args(&self, level: Level, pattern: &str, args: &[&dyn fmt::Display]) {
            self.target.log_args(level, pattern, args);
        }
        fn log_err(&self, _level: Level, _message: &str, _error: &(dyn Error + 'static)) {
            // forgotten forwarding
        }
        fn log_marked(&self, level: Level, marker: &Marker, message: &str) {
            self.target.log_marked(level, marker, message);
        }
        fn log_marked_args(
            &self,
            level: Level,
            marker: &Marker,
            pattern: &str,
            args: &[&dyn fmt::Display],
        ) {
            self.target.log_marked_args(level, marker, pattern, args);
        }
        fn log_marked_err(
            &self,
            _level: Level,
            _marker: &Marker,
            _message: &str,
            _error: &(dyn Error + 'static),
        ) {
            // forgotten forwarding
        }
        fn log_event(&self, event: &LoggingEvent) {
            self.target.log_event(event);
        }
    }

    #[test]
    fn test_missing_forwarding_is_reported_by_name() {
        let target = Arc::new(RecordingLogger::new());
        let proxy = LeakyProxy {
            target: target.clone(),
        };

        let err = check_forwarding(&proxy, &target).unwrap_err();
        let ConformanceError::NotForwarded { operations } = err;
        // Two kinds missing at all five levels
        assert_eq!(operations.len(), 10);
        assert!(operations.contains(&"log_err(TRACE)".to_string()));
        assert!(operations.contains(&"log_marked_err(ERROR)".to_string()));
        assert!(!operations.contains(&"log(INFO)".to_string()));
    }
}
