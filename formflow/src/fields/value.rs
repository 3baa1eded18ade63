//! Raw value capabilities for input controls.

use parking_lot::RwLock;
use std::sync::Arc;

/// Capability to read and write the raw value of an input control.
///
/// The registry never caches values: every snapshot goes through
/// [`ValueSource::read`], so it reflects the latest input even if the
/// owning view has not re-rendered.
pub trait ValueSource: Send + Sync {
    /// Reads the current raw value.
    fn read(&self) -> String;

    /// Replaces the current raw value.
    fn write(&self, value: &str);

    /// Clears the raw value.
    fn clear(&self) {
        self.write("");
    }
}

/// A shared mutable cell holding a raw input value.
///
/// Clones share the same storage, so a view can keep one clone while the
/// registry reads through another.
#[derive(Debug, Clone, Default)]
pub struct ValueCell {
    inner: Arc<RwLock<String>>,
}

impl ValueCell {
    /// Creates an empty cell.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cell holding an initial value.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value.into())),
        }
    }

    /// Returns a copy of the current value.
    #[must_use]
    pub fn get(&self) -> String {
        self.inner.read().clone()
    }

    /// Sets the current value.
    pub fn set(&self, value: impl Into<String>) {
        *self.inner.write() = value.into();
    }

    /// Returns true if the current value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl ValueSource for ValueCell {
    fn read(&self) -> String {
        self.get()
    }

    fn write(&self, value: &str) {
        self.set(value);
    }
}
