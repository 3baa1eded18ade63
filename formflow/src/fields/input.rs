//! The input surface: a mounted, registered field.

use std::sync::{Arc, Weak};

use super::handle::{FieldHandle, VisualState};
use super::registry::FieldRegistry;
use super::value::{ValueCell, ValueSource};

/// A mounted input control.
///
/// The only way to obtain an `Input` is to mount it, and mounting registers
/// it, so no interaction can reach a field before registration. The input
/// keeps only a weak reference to its form: dropping the form drops its
/// fields, whatever inputs are still alive.
#[derive(Debug)]
pub struct Input {
    handle: Arc<FieldHandle>,
    form: Weak<FieldRegistry>,
}

impl Input {
    /// Mounts an empty text input under `name`.
    pub fn mount(form: &Arc<FieldRegistry>, name: impl Into<String>) -> Self {
        Self::mount_with_source(form, name, Arc::new(ValueCell::new()))
    }

    /// Mounts a text input pre-filled with `default_value`.
    pub fn mount_with_default(
        form: &Arc<FieldRegistry>,
        name: impl Into<String>,
        default_value: impl Into<String>,
    ) -> Self {
        Self::mount_with_source(form, name, Arc::new(ValueCell::with_value(default_value)))
    }

    /// Mounts an input backed by an arbitrary value source.
    pub fn mount_with_source(
        form: &Arc<FieldRegistry>,
        name: impl Into<String>,
        source: Arc<dyn ValueSource>,
    ) -> Self {
        let input = Self {
            handle: Arc::new(FieldHandle::new(name, source)),
            form: Arc::downgrade(form),
        };
        input.register();
        input
    }

    /// (Re-)registers this input with its form.
    ///
    /// Idempotent. Returns false if the form no longer exists.
    pub fn register(&self) -> bool {
        match self.form.upgrade() {
            Some(form) => {
                form.register(Arc::clone(&self.handle));
                true
            }
            None => false,
        }
    }

    /// Unmounts the input, removing its handle from the form.
    ///
    /// Returns false if the form is gone or a newer input has taken over the
    /// name.
    pub fn unmount(self) -> bool {
        self.form
            .upgrade()
            .is_some_and(|form| form.unregister_handle(&self.handle))
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.handle.name()
    }

    /// Returns the underlying handle.
    #[must_use]
    pub fn handle(&self) -> &Arc<FieldHandle> {
        &self.handle
    }

    /// Reads the current raw value.
    #[must_use]
    pub fn value(&self) -> String {
        self.handle.value()
    }

    /// Replaces the raw value, as typing would.
    pub fn input(&self, value: &str) {
        self.handle.set_value(value);
    }

    /// Focus event handler.
    pub fn on_focus(&self) {
        self.handle.focus();
    }

    /// Blur event handler.
    pub fn on_blur(&self) {
        self.handle.blur();
    }

    /// Returns the inline error text, if any.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.handle.error()
    }

    /// Returns true if the error indicator should be shown.
    #[must_use]
    pub fn is_errored(&self) -> bool {
        self.handle.visual_state().errored
    }

    /// Returns the presentation state.
    #[must_use]
    pub fn visual_state(&self) -> VisualState {
        self.handle.visual_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_registers() {
        let form = FieldRegistry::shared();
        let input = Input::mount(&form, "password");

        assert!(form.contains("password"));
        input.input("secret");
        assert_eq!(form.snapshot().get("password"), Some("secret"));
    }

    #[test]
    fn test_register_is_idempotent() {
        let form = FieldRegistry::shared();
        let input = Input::mount(&form, "password");
        assert!(input.register());
        assert!(input.register());
        assert_eq!(form.len(), 1);
    }

    #[test]
    fn test_default_value() {
        let form = FieldRegistry::shared();
        let input = Input::mount_with_default(&form, "email", "user@example.com");
        assert_eq!(input.value(), "user@example.com");
    }

    #[test]
    fn test_focus_blur_cycle() {
        let form = FieldRegistry::shared();
        let input = Input::mount(&form, "password");

        input.on_focus();
        assert!(input.visual_state().focused);

        input.input("abc");
        input.on_blur();
        let state = input.visual_state();
        assert!(!state.focused);
        assert!(state.filled);
        assert!(!state.errored);
    }

    #[test]
    fn test_error_projection_from_form() {
        let form = FieldRegistry::shared();
        let input = Input::mount(&form, "password");

        form.set_field_error("password", Some("Password required".to_string()));
        assert!(input.is_errored());
        assert_eq!(input.error().as_deref(), Some("Password required"));
    }

    #[test]
    fn test_unmount() {
        let form = FieldRegistry::shared();
        let input = Input::mount(&form, "password");

        assert!(input.unmount());
        assert!(form.is_empty());
    }

    #[test]
    fn test_unmount_after_replacement_keeps_newer_input() {
        let form = FieldRegistry::shared();
        let old = Input::mount(&form, "password");
        let _new = Input::mount(&form, "password");

        assert!(!old.unmount());
        assert!(form.contains("password"));
    }

    #[test]
    fn test_input_outlives_form() {
        let form = FieldRegistry::shared();
        let input = Input::mount(&form, "password");
        drop(form);

        assert!(!input.register());
        input.on_focus();
        assert!(input.visual_state().focused);
        assert!(!input.unmount());
    }
}
