//! deferlog - deferred-binding logging facade
//!
//! Loggers are often requested before any logging backend is configured.
//! This crate provides the pieces that make that window safe: a
//! [`DeferredLogger`](defer::DeferredLogger) stand-in that captures calls
//! as events until a real backend is bound and forwards verbatim after, a
//! shared [`EventQueue`](event::EventQueue) for later replay, and a
//! [`conformance`] harness that proves the proxy forwards its entire
//! surface.
//!
//! # High-Level API
//!
//! ```
//! use deferlog::defer::DeferredLoggerFactory;
//! use deferlog::logger::{Logger, TracingLogger};
//! use std::sync::Arc;
//!
//! let factory = DeferredLoggerFactory::new();
//!
//! // Early startup: backend not ready yet, calls are captured
//! let logger = factory.logger("startup");
//! logger.info("reading configuration");
//!
//! // Backend ready: bind it and replay what was captured
//! let backend = Arc::new(TracingLogger::new("startup"));
//! logger.set_delegate(backend.clone());
//! factory.post_initialization();
//! for event in factory.event_queue().drain() {
//!     backend.log_event(&event);
//! }
//! ```

pub mod conformance;
pub mod defer;
pub mod event;
pub mod format;
pub mod level;
pub mod logger;
pub mod marker;

pub use level::Level;
pub use logger::Logger;
pub use marker::Marker;

/// Version of the deferlog library.
///
/// Defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
