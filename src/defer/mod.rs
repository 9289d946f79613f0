//! Deferred binding: loggers that work before a backend exists.
//!
//! During early startup code asks for loggers before any backend is
//! configured. This module provides the pieces that bridge that window:
//!
//! - [`DeferredLogger`]: a stand-in that forwards verbatim once a real
//!   delegate is bound, and before that captures or discards
//! - [`EventRecordingLogger`]: the pre-binding collaborator that captures
//!   calls as [`LoggingEvent`](crate::event::LoggingEvent)s
//! - [`DeferredLoggerFactory`]: registry handing out one logger per name,
//!   all sharing one event queue for later replay

mod factory;
mod logger;
mod recording;

pub use factory::DeferredLoggerFactory;
pub use logger::DeferredLogger;
pub use recording::EventRecordingLogger;
