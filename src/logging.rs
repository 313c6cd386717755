//! Diagnostic log sink
//!
//! The simulator surface that displays device activity is external to this
//! crate; devices report non-fatal diagnostics through the [`LogSink`] trait.
//! Logging never alters control flow: every failure inside the assembly
//! pipeline is reported here and then contained at the point of occurrence.

use core::fmt::Debug;

/// Destination scope for a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogScope {
    /// Local console only
    Console,
    /// Remote viewer (e.g. the simulator UI socket) only
    Remote,
    /// Both destinations
    Both,
}

/// Sink for per-device diagnostics
///
/// One sink instance belongs to one device; it does not need to be shareable
/// across devices.
pub trait LogSink {
    /// Record a message with an optional associated error.
    fn log(&mut self, message: &str, error: Option<&dyn Debug>, scope: LogScope);
}

/// Sink that discards everything
pub struct NullLogger;

impl LogSink for NullLogger {
    fn log(&mut self, _message: &str, _error: Option<&dyn Debug>, _scope: LogScope) {}
}
