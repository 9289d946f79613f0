//! Severity levels for log records.

use std::fmt;

/// Log level for filtering and classifying messages.
///
/// Ordered from least to most severe, so level thresholds can be
/// expressed with ordinary comparisons:
///
/// ```
/// use deferlog::Level;
///
/// assert!(Level::Debug < Level::Error);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Verbose debugging information
    Trace,
    /// Debugging information
    Debug,
    /// General information
    Info,
    /// Warning messages
    Warn,
    /// Error messages
    Error,
}

impl Level {
    /// Every level, least severe first. Useful for exhaustive sweeps
    /// over the logging surface.
    pub const ALL: [Level; 5] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
    ];

    /// Stable upper-case string form of this level.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Integer severity of this level (TRACE=0 .. ERROR=40).
    pub const fn to_int(self) -> i32 {
        match self {
            Level::Trace => 0,
            Level::Debug => 10,
            Level::Info => 20,
            Level::Warn => 30,
            Level::Error => 40,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
