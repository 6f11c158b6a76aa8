//! Leveled message sink used to report anomalies.
//!
//! Components never reach a global logger; they receive a [`LogSink`] and
//! call it fire-and-forget. [`TracingSink`] forwards to `tracing`, which
//! is the default for [`PolygonClipper`](crate::polygon::PolygonClipper).

use std::fmt;
use tracing::{debug, error, info, trace, warn};

/// Message severity, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// System is unusable.
    Emergency,
    /// Action must be taken immediately.
    Alert,
    /// Critical condition.
    Critical,
    /// Error condition.
    Error,
    /// Warning condition.
    Warning,
    /// Normal but significant condition.
    Notice,
    /// Informational message.
    Info,
    /// Debug detail, level 1.
    Debug1,
    /// Debug detail, level 2.
    Debug2,
    /// Debug detail, level 3.
    Debug3,
}

impl Severity {
    /// Short label for the level.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Emergency => "Emerg",
            Severity::Alert => "Alert",
            Severity::Critical => "Crit",
            Severity::Error => "Err",
            Severity::Warning => "Warn",
            Severity::Notice => "Notice",
            Severity::Info => "Info",
            Severity::Debug1 => "Debug1",
            Severity::Debug2 => "Debug2",
            Severity::Debug3 => "Debug3",
        }
    }

    /// Returns true for `Error` and anything more severe.
    pub fn is_error(self) -> bool {
        self <= Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A destination for leveled messages.
///
/// Implementations must not panic or block; callers do not check for
/// delivery.
pub trait LogSink {
    /// Records `message` at `level`, with an arbitrary debug-printable context.
    fn log(&self, level: Severity, message: &str, context: &dyn fmt::Debug);
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn log(&self, level: Severity, message: &str, context: &dyn fmt::Debug) {
        (**self).log(level, message, context)
    }
}

/// Forwards messages to the `tracing` ecosystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, level: Severity, message: &str, context: &dyn fmt::Debug) {
        match level {
            Severity::Emergency | Severity::Alert | Severity::Critical | Severity::Error => {
                error!(severity = %level, context = ?context, "{message}")
            }
            Severity::Warning => warn!(severity = %level, context = ?context, "{message}"),
            Severity::Notice | Severity::Info => {
                info!(severity = %level, context = ?context, "{message}")
            }
            Severity::Debug1 => debug!(severity = %level, context = ?context, "{message}"),
            Severity::Debug2 | Severity::Debug3 => {
                trace!(severity = %level, context = ?context, "{message}")
            }
        }
    }
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _level: Severity, _message: &str, _context: &dyn fmt::Debug) {}
}
