//! Recording double for the logging surface.

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt;
use std::sync::Mutex;

use crate::conformance::{LogOp, OpKind};
use crate::level::Level;
use crate::logger::Logger;
use crate::marker::Marker;

/// One observed invocation with its argument snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Which operation was invoked.
    pub op: LogOp,
    /// Marker name, for the marker-qualified kinds.
    pub marker: Option<String>,
    /// Message or pattern argument.
    pub message: String,
    /// Rendered argument values.
    pub args: Vec<String>,
    /// Rendered error argument.
    pub error: Option<String>,
}

/// A [`Logger`] that records every call it receives.
///
/// Bound as the delegate of a proxy under test, it turns forwarding into
/// an observable invocation log. The log is append-only: invoking the
/// same operation twice yields two entries. Neutral responses: every
/// enablement query answers true, [`name`](Logger::name) answers the
/// fixed sentinel `"recording"`.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingLogger {
    /// Create a recorder with an empty invocation log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the invocation log, in call order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded invocations.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The set of distinct operation signatures observed.
    pub fn operations(&self) -> BTreeSet<LogOp> {
        self.calls.lock().unwrap().iter().map(|c| c.op).collect()
    }

    fn push(
        &self,
        kind: OpKind,
        level: Level,
        marker: Option<&Marker>,
        message: &str,
        args: &[&dyn fmt::Display],
        error: Option<&(dyn Error + 'static)>,
    ) {
        self.calls.lock().unwrap().push(RecordedCall {
            op: LogOp { kind, level },
            marker: marker.map(|m| m.name().to_string()),
            message: message.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            error: error.map(|e| e.to_string()),
        });
    }
}

impl Logger for RecordingLogger {
    fn name(&self) -> &str {
        "recording"
    }

    fn enabled(&self, level: Level) -> bool {
        self.push(OpKind::Enabled, level, None, "", &[], None);
        true
    }

    fn enabled_marked(&self, level: Level, marker: &Marker) -> bool {
        self.push(OpKind::EnabledMarked, level, Some(marker), "", &[], None);
        true
    }

    fn log(&self, level: Level, message: &str) {
        self.push(OpKind::Log, level, None, message, &[], None);
    }

    fn log_args(&self, level: Level, pattern: &str, args: &[&dyn fmt::Display]) {
        self.push(OpKind::LogArgs, level, None, pattern, args, None);
    }

    fn log_err(&self, level: Level, message: &str, error: &(dyn Error + 'static)) {
        self.push(OpKind::LogErr, level, None, message, &[], Some(error));
    }

    fn log_marked(&self, level: Level, marker: &Marker, message: &str) {
        self.push(OpKind::LogMarked, level, Some(marker), message, &[], None);
    }

    fn log_marked_args(
        &self,
        level: Level,
        marker: &Marker,
        pattern: &str,
        args: &[&dyn fmt::Display],
    ) {
        self.push(OpKind::LogMarkedArgs, level, Some(marker), pattern, args, None);
    }

    fn log_marked_err(
        &self,
        level: Level,
        marker: &Marker,
        message: &str,
        error: &(dyn Error + 'static),
    ) {
        self.push(OpKind::LogMarkedErr, level, Some(marker), message, &[], Some(error));
    }
}
