//! The logging contract and its stock implementations.
//!
//! This module defines the interface every backend in this crate speaks
//! and the two implementations that need no configuration:
//!
//! - [`Logger`] trait: the full logging surface (level-parameterized
//!   calls with argument, error, and marker variants)
//! - [`NopLogger`]: silent backend that discards everything
//! - [`TracingLogger`]: production adapter that delegates to `tracing`
//!
//! Components that need logging should accept an `Arc<dyn Logger>`:
//!
//! ```
//! use deferlog::logger::{Logger, NopLogger};
//! use deferlog::log_info;
//! use std::sync::Arc;
//!
//! struct Worker {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! impl Worker {
//!     fn run(&self) {
//!         log_info!(self.logger, "starting work");
//!     }
//! }
//!
//! Worker { logger: Arc::new(NopLogger) }.run();
//! ```

mod nop;
mod tracing_adapter;
mod r#trait;

pub use nop::NopLogger;
pub use r#trait::Logger;
pub use tracing_adapter::TracingLogger;
