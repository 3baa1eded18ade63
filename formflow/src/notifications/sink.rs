//! Toast sink trait and implementations.

use tracing::{debug, info, warn, Level};

use super::toast::{Toast, ToastKind};

/// Receives user-visible notifications.
///
/// Fire-and-forget: implementations must not fail or block the caller.
pub trait ToastSink: Send + Sync {
    /// Shows a toast.
    fn add_toast(&self, toast: Toast);
}

/// A sink that discards all toasts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpToastSink;

impl ToastSink for NoOpToastSink {
    fn add_toast(&self, _toast: Toast) {}
}

/// A sink that logs toasts through `tracing`.
#[derive(Debug, Clone)]
pub struct LoggingToastSink {
    level: Level,
}

impl Default for LoggingToastSink {
    fn default() -> Self {
        Self { level: Level::INFO }
    }
}

impl LoggingToastSink {
    /// Creates a logging sink with the specified level for non-error toasts.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Creates a debug-level logging sink.
    #[must_use]
    pub fn debug() -> Self {
        Self::new(Level::DEBUG)
    }
}

impl ToastSink for LoggingToastSink {
    fn add_toast(&self, toast: Toast) {
        if toast.kind == ToastKind::Error {
            warn!(kind = %toast.kind, title = %toast.title, description = %toast.description, "Toast");
            return;
        }
        match self.level {
            Level::DEBUG | Level::TRACE => {
                debug!(kind = %toast.kind, title = %toast.title, description = %toast.description, "Toast");
            }
            _ => {
                info!(kind = %toast.kind, title = %toast.title, description = %toast.description, "Toast");
            }
        }
    }
}

/// A sink that keeps every toast in memory.
#[derive(Debug, Default)]
pub struct CollectingToastSink {
    toasts: parking_lot::RwLock<Vec<Toast>>,
}

impl CollectingToastSink {
    /// Creates a new collecting sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected toasts.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.read().clone()
    }

    /// Returns the collected toasts of one kind.
    #[must_use]
    pub fn toasts_of_kind(&self, kind: ToastKind) -> Vec<Toast> {
        self.toasts
            .read()
            .iter()
            .filter(|toast| toast.kind == kind)
            .cloned()
            .collect()
    }

    /// Returns the most recent toast.
    #[must_use]
    pub fn last(&self) -> Option<Toast> {
        self.toasts.read().last().cloned()
    }

    /// Returns the number of collected toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.read().len()
    }

    /// Returns true if no toasts have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.read().is_empty()
    }

    /// Clears all collected toasts.
    pub fn clear(&self) {
        self.toasts.write().clear();
    }
}

impl ToastSink for CollectingToastSink {
    fn add_toast(&self, toast: Toast) {
        self.toasts.write().push(toast);
    }
}
