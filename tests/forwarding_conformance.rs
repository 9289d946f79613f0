//! Integration tests for the deferred logger's forwarding behavior.
//!
//! These tests verify the complete substitute-logger workflow:
//! - Verbatim forwarding of every operation once a delegate is bound
//! - Local answering of the identity accessor
//! - Safe capture of calls made before binding
//! - The exhaustive conformance sweep over the operation matrix

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use deferlog::conformance::{check_forwarding, LogOp, OpKind, RecordingLogger};
use deferlog::defer::DeferredLogger;
use deferlog::event::EventQueue;
use deferlog::logger::Logger;
use deferlog::marker::Marker;
use deferlog::Level;

// =============================================================================
// Test Helpers
// =============================================================================

/// A deferred logger bound to a fresh recording double.
fn bound_logger() -> (DeferredLogger, Arc<RecordingLogger>) {
    let recorder = Arc::new(RecordingLogger::new());
    let logger = DeferredLogger::new("foo", None, false);
    logger.set_delegate(recorder.clone());
    (logger, recorder)
}

/// A delegate whose every operation fails, to verify the proxy adds no
/// error handling of its own.
struct FailingLogger;

impl Logger for FailingLogger {
    fn name(&self) -> &str {
        "failing"
    }
    fn enabled(&self, _level: Level) -> bool {
        panic!("backend failure");
    }
    fn enabled_marked(&self, _level: Level, _marker: &Marker) -> bool {
        panic!("backend failure");
    }
    fn log(&self, _level: Level, _message: &str) {
        panic!("backend failure");
    }
    fn log_args(&self, _level: Level, _pattern: &str, _args: &[&dyn fmt::Display]) {
        panic!("backend failure");
    }
    fn log_err(
        &self,
        _level: Level,
        _message: &str,
        _error: &(dyn std::error::Error + 'static),
    ) {
        panic!("backend failure");
    }
    fn log_marked(&self, _level: Level, _marker: &Marker, _message: &str) {
        panic!("backend failure");
    }
    fn log_marked_args(
        &self,
        _level: Level,
        _marker: &Marker,
        _pattern: &str,
        _args: &[&dyn fmt::Display],
    ) {
        panic!("backend failure");
    }
    fn log_marked_err(
        &self,
        _level: Level,
        _marker: &Marker,
        _message: &str,
        _error: &(dyn std::error::Error + 'static),
    ) {
        panic!("backend failure");
    }
}

#[derive(Debug)]
struct DiskFull;

impl fmt::Display for DiskFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("disk full")
    }
}

impl std::error::Error for DiskFull {}

// =============================================================================
// Forwarding with identical arguments
// =============================================================================

#[test]
fn bound_call_is_recorded_once_with_same_arguments() {
    let (logger, recorder) = bound_logger();
    let marker = Marker::new("AUDIT");

    logger.log_marked_args(Level::Warn, &marker, "tile {} failed", &[&42]);

    let calls = recorder.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].op,
        LogOp {
            kind: OpKind::LogMarkedArgs,
            level: Level::Warn,
        }
    );
    assert_eq!(calls[0].marker.as_deref(), Some("AUDIT"));
    assert_eq!(calls[0].message, "tile {} failed");
    assert_eq!(calls[0].args, vec!["42".to_string()]);
}

#[test]
fn bound_error_call_carries_the_error() {
    let (logger, recorder) = bound_logger();

    logger.log_err(Level::Error, "write failed", &DiskFull);

    let calls = recorder.calls();
    assert_eq!(calls[0].message, "write failed");
    assert_eq!(calls[0].error.as_deref(), Some("disk full"));
}

#[test]
fn enablement_queries_forward_and_answer_the_double() {
    let (logger, recorder) = bound_logger();
    let marker = Marker::new("AUDIT");

    assert!(logger.enabled(Level::Trace));
    assert!(logger.enabled_marked(Level::Error, &marker));
    assert_eq!(recorder.call_count(), 2);
}

#[test]
#[should_panic(expected = "backend failure")]
fn panic_from_bound_delegate_propagates_unchanged() {
    let logger = DeferredLogger::new("foo", None, false);
    logger.set_delegate(Arc::new(FailingLogger));

    // The proxy must not catch, wrap, or swallow the failure
    logger.log(Level::Info, "reaches the failing backend");
}

#[test]
#[should_panic(expected = "backend failure")]
fn panic_from_bound_delegate_propagates_for_enablement_queries() {
    let logger = DeferredLogger::new("foo", None, false);
    logger.set_delegate(Arc::new(FailingLogger));

    let _ = logger.enabled(Level::Warn);
}

// =============================================================================
// Identity accessor stays local
// =============================================================================

#[test]
fn name_never_reaches_the_bound_target() {
    let (logger, recorder) = bound_logger();

    assert_eq!(logger.name(), "foo");
    assert_eq!(recorder.call_count(), 0);
}

// =============================================================================
// Unbound behavior
// =============================================================================

#[test]
fn every_operation_completes_while_unbound() {
    let queue = EventQueue::new();
    let logger = DeferredLogger::new("foo", Some(queue.clone()), false);

    for op in LogOp::all() {
        op.invoke(&logger);
    }

    // The 30 non-query operations were captured; the 10 enablement
    // queries are answered without producing events.
    assert_eq!(queue.len(), 30);
}

#[test]
fn unbound_post_initialization_logger_never_panics() {
    let logger = DeferredLogger::new("late", None, true);
    for op in LogOp::all() {
        op.invoke(&logger);
    }
}

#[test]
fn initial_delegate_is_a_recording_placeholder() {
    let logger = DeferredLogger::new("foo", None, false);

    assert!(!logger.is_bound());
    // A recorder accepts everything; a dangling or no-op delegate would not
    assert!(logger.delegate().enabled(Level::Trace));
    assert_eq!(logger.delegate().name(), "foo");
}

// =============================================================================
// No deduplication
// =============================================================================

#[test]
fn repeated_invocation_yields_repeated_records() {
    let (logger, recorder) = bound_logger();

    logger.log(Level::Info, "once");
    logger.log(Level::Info, "twice");

    assert_eq!(recorder.call_count(), 2);
    assert_eq!(recorder.operations().len(), 1);
}

// =============================================================================
// Exhaustive conformance sweep
// =============================================================================

#[test]
fn deferred_logger_forwards_its_entire_surface() {
    let (logger, recorder) = bound_logger();
    check_forwarding(&logger, &recorder).unwrap();
}

#[test]
fn sweep_observes_exactly_the_declared_operation_set() {
    let (logger, recorder) = bound_logger();

    for op in LogOp::all() {
        op.invoke(&logger);
    }

    let declared: BTreeSet<LogOp> = LogOp::all().collect();
    assert_eq!(recorder.operations(), declared);
    assert_eq!(recorder.call_count(), declared.len());
}
