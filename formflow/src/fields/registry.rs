//! Form-scoped field registry.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use super::data::FormData;
use super::handle::FieldHandle;
use crate::validation::FieldErrors;

/// Central name-keyed map of the fields mounted in one form.
///
/// Created once per form and shared by `Arc` with every input and with the
/// submission controller. Nothing is shared across forms.
#[derive(Debug, Default)]
pub struct FieldRegistry {
    fields: RwLock<HashMap<String, Arc<FieldHandle>>>,
}

impl FieldRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry behind an `Arc`, ready to hand to inputs.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Inserts a handle, replacing any handle registered under the same name.
    ///
    /// Returns the replaced handle.
    pub fn register(&self, handle: Arc<FieldHandle>) -> Option<Arc<FieldHandle>> {
        let name = handle.name().to_string();
        let previous = self.fields.write().insert(name.clone(), handle);
        debug!(field = %name, replaced = previous.is_some(), "Field registered");
        previous
    }

    /// Removes the handle registered under `name`.
    pub fn unregister(&self, name: &str) -> Option<Arc<FieldHandle>> {
        let removed = self.fields.write().remove(name);
        if removed.is_some() {
            debug!(field = %name, "Field unregistered");
        }
        removed
    }

    /// Removes `handle` only if it is still the registered handle for its name.
    ///
    /// A stale handle that was replaced by a newer registration is ignored.
    pub fn unregister_handle(&self, handle: &Arc<FieldHandle>) -> bool {
        let mut fields = self.fields.write();
        let is_current = fields
            .get(handle.name())
            .is_some_and(|current| Arc::ptr_eq(current, handle));
        if is_current {
            fields.remove(handle.name());
            debug!(field = %handle.name(), "Field unregistered");
        }
        is_current
    }

    /// Returns the handle registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<FieldHandle>> {
        self.fields.read().get(name).cloned()
    }

    /// Returns true if a field is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.read().contains_key(name)
    }

    /// Returns the number of registered fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.read().len()
    }

    /// Returns true if no fields are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.read().is_empty()
    }

    /// Returns the registered field names, sorted.
    #[must_use]
    pub fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.fields.read().keys().cloned().collect();
        names.sort();
        names
    }

    // Handles are cloned out so no registry lock is held while calling into
    // value sources.
    fn handles(&self) -> Vec<Arc<FieldHandle>> {
        self.fields.read().values().cloned().collect()
    }

    /// Reads the current raw value of every registered field.
    #[must_use]
    pub fn snapshot(&self) -> FormData {
        self.handles()
            .iter()
            .map(|handle| (handle.name().to_string(), handle.value()))
            .collect()
    }

    /// Distributes errors onto fields.
    ///
    /// Every registered field receives its matching message or `None`. Paths
    /// with no registered field are ignored.
    pub fn set_errors(&self, errors: &FieldErrors) {
        for handle in self.handles() {
            handle.set_error(errors.get(handle.name()).map(String::from));
        }
        for (path, _) in errors.iter().filter(|(path, _)| !self.contains(path)) {
            debug!(field = %path, "Ignoring error for unregistered field");
        }
    }

    /// Clears every field's error message.
    pub fn clear_errors(&self) {
        for handle in self.handles() {
            handle.set_error(None);
        }
    }

    /// Returns the current error messages of all fields that have one.
    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for handle in self.handles() {
            if let Some(message) = handle.error() {
                errors.insert(handle.name(), message);
            }
        }
        errors
    }

    /// Reads one field's current raw value.
    #[must_use]
    pub fn field_value(&self, name: &str) -> Option<String> {
        self.get(name).map(|handle| handle.value())
    }

    /// Writes one field's raw value. Returns false if the field is unknown.
    pub fn set_field_value(&self, name: &str, value: &str) -> bool {
        let Some(handle) = self.get(name) else {
            return false;
        };
        handle.set_value(value);
        true
    }

    /// Returns one field's error message.
    #[must_use]
    pub fn field_error(&self, name: &str) -> Option<String> {
        self.get(name).and_then(|handle| handle.error())
    }

    /// Sets or clears one field's error message. Returns false if the field
    /// is unknown.
    pub fn set_field_error(&self, name: &str, message: Option<String>) -> bool {
        let Some(handle) = self.get(name) else {
            return false;
        };
        handle.set_error(message);
        true
    }

    /// Clears every field's value, error and filled flag.
    pub fn reset(&self) {
        for handle in self.handles() {
            handle.reset();
        }
    }
}
