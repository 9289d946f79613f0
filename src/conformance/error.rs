//! Error type for conformance check failures.

use thiserror::Error;

/// A forwarding conformance violation.
#[derive(Debug, Error)]
pub enum ConformanceError {
    /// One or more invoked operations never reached the recording target.
    #[error("logging operations not forwarded: {}", .operations.join(", "))]
    NotForwarded {
        /// Display names of every missing operation, in matrix order.
        operations: Vec<String>,
    },
}
