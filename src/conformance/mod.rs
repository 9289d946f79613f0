//! Forwarding conformance harness.
//!
//! Verifies that a proxying [`Logger`](crate::logger::Logger) forwards its
//! entire surface: the operation matrix is enumerated explicitly
//! ([`LogOp`], method kind × level), each operation is invoked once with
//! neutral arguments against a [`RecordingLogger`] double, and
//! [`check_forwarding`] reports any operation that never arrived.
//!
//! Downstream crates implementing their own delegating loggers can run
//! the same sweep against them.

mod check;
mod error;
mod op;
mod recorder;

pub use check::check_forwarding;
pub use error::ConformanceError;
pub use op::{LogOp, OpKind};
pub use recorder::{RecordedCall, RecordingLogger};
