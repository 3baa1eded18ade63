//! Field handles: one registered input control each.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::value::ValueSource;

/// Presentation state of a field, as consumed by a renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualState {
    /// The control currently has focus.
    pub focused: bool,
    /// The control held a non-empty value at its last blur.
    pub filled: bool,
    /// The field carries an error message.
    pub errored: bool,
}

#[derive(Debug, Default)]
struct FieldState {
    focused: bool,
    filled: bool,
    error: Option<String>,
}

/// A named input registered with a [`FieldRegistry`](super::FieldRegistry).
pub struct FieldHandle {
    name: String,
    source: Arc<dyn ValueSource>,
    state: RwLock<FieldState>,
}

impl FieldHandle {
    /// Creates a new handle reading its value through `source`.
    pub fn new(name: impl Into<String>, source: Arc<dyn ValueSource>) -> Self {
        Self {
            name: name.into(),
            source,
            state: RwLock::new(FieldState::default()),
        }
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads the current raw value from the underlying control.
    #[must_use]
    pub fn value(&self) -> String {
        self.source.read()
    }

    /// Writes a raw value into the underlying control.
    pub fn set_value(&self, value: &str) {
        self.source.write(value);
    }

    /// Marks the field as focused.
    pub fn focus(&self) {
        self.state.write().focused = true;
    }

    /// Marks the field as blurred and recomputes the filled flag.
    pub fn blur(&self) {
        let filled = !self.source.read().is_empty();
        let mut state = self.state.write();
        state.focused = false;
        state.filled = filled;
    }

    /// Returns true if the field is focused.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.state.read().focused
    }

    /// Returns true if the field was non-empty at its last blur.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.state.read().filled
    }

    /// Returns the current error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    /// Sets or clears the error message.
    ///
    /// Presentation only: validation never reads this back.
    pub fn set_error(&self, message: Option<String>) {
        self.state.write().error = message;
    }

    /// Returns the presentation state.
    #[must_use]
    pub fn visual_state(&self) -> VisualState {
        let state = self.state.read();
        VisualState {
            focused: state.focused,
            filled: state.filled,
            errored: state.error.is_some(),
        }
    }

    /// Clears the value, the error and the filled flag.
    pub fn reset(&self) {
        self.source.clear();
        let mut state = self.state.write();
        state.filled = false;
        state.error = None;
    }
}

impl std::fmt::Debug for FieldHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldHandle")
            .field("name", &self.name)
            .field("visual_state", &self.visual_state())
            .finish_non_exhaustive()
    }
}
