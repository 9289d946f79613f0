//! The enumerated logging operation matrix.

use std::error::Error;
use std::fmt;

use crate::level::Level;
use crate::logger::Logger;
use crate::marker::Marker;

/// The forwardable method kinds of the [`Logger`] surface.
///
/// `name` is excluded: it is answered locally by a proxy, by design.
/// `log_event` is excluded: it is replay plumbing, not part of the
/// declared logging surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OpKind {
    /// `enabled(level)`
    Enabled,
    /// `enabled_marked(level, marker)`
    EnabledMarked,
    /// `log(level, message)`
    Log,
    /// `log_args(level, pattern, args)`
    LogArgs,
    /// `log_err(level, message, error)`
    LogErr,
    /// `log_marked(level, marker, message)`
    LogMarked,
    /// `log_marked_args(level, marker, pattern, args)`
    LogMarkedArgs,
    /// `log_marked_err(level, marker, message, error)`
    LogMarkedErr,
}

impl OpKind {
    /// Every forwardable method kind.
    pub const ALL: [OpKind; 8] = [
        OpKind::Enabled,
        OpKind::EnabledMarked,
        OpKind::Log,
        OpKind::LogArgs,
        OpKind::LogErr,
        OpKind::LogMarked,
        OpKind::LogMarkedArgs,
        OpKind::LogMarkedErr,
    ];

    /// The trait method this kind corresponds to.
    pub const fn method_name(self) -> &'static str {
        match self {
            OpKind::Enabled => "enabled",
            OpKind::EnabledMarked => "enabled_marked",
            OpKind::Log => "log",
            OpKind::LogArgs => "log_args",
            OpKind::LogErr => "log_err",
            OpKind::LogMarked => "log_marked",
            OpKind::LogMarkedArgs => "log_marked_args",
            OpKind::LogMarkedErr => "log_marked_err",
        }
    }
}

/// One operation of the logging surface: a method kind at a level.
///
/// Serves as the unique signature key the conformance check matches
/// invoked operations against observed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogOp {
    /// Method kind invoked.
    pub kind: OpKind,
    /// Level the method was invoked at.
    pub level: Level,
}

impl LogOp {
    /// The full operation matrix: every method kind at every level.
    pub fn all() -> impl Iterator<Item = LogOp> {
        Level::ALL.into_iter().flat_map(|level| {
            OpKind::ALL.into_iter().map(move |kind| LogOp { kind, level })
        })
    }

    /// Invoke this operation once on `logger` with neutral arguments:
    /// empty messages, an empty argument slice (never a sentinel value),
    /// a fixed probe marker, and a fixed probe error.
    pub fn invoke(self, logger: &dyn Logger) {
        let marker = Marker::new("probe");
        let error = ProbeError;
        match self.kind {
            OpKind::Enabled => {
                let _ = logger.enabled(self.level);
            }
            OpKind::EnabledMarked => {
                let _ = logger.enabled_marked(self.level, &marker);
            }
            OpKind::Log => logger.log(self.level, ""),
            OpKind::LogArgs => logger.log_args(self.level, "", &[]),
            OpKind::LogErr => logger.log_err(self.level, "", &error),
            OpKind::LogMarked => logger.log_marked(self.level, &marker, ""),
            OpKind::LogMarkedArgs => logger.log_marked_args(self.level, &marker, "", &[]),
            OpKind::LogMarkedErr => logger.log_marked_err(self.level, &marker, "", &error),
        }
    }
}

impl fmt::Display for LogOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind.method_name(), self.level)
    }
}

/// Fixed error passed to the error-taking operations.
#[derive(Debug)]
struct ProbeError;

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("probe error")
    }
}

impl Error for ProbeError {}
