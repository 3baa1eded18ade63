//! Test assertions for submit cycles.

use crate::core::SubmissionResult;
use crate::fields::FieldRegistry;
use crate::notifications::{CollectingToastSink, ToastKind};

/// Asserts that the cycle succeeded.
pub fn assert_submission_succeeded(result: &SubmissionResult) {
    assert!(
        result.is_success(),
        "Expected success, got: {:?}",
        result
    );
}

/// Asserts that validation rejected exactly the given fields.
pub fn assert_rejected_fields(result: &SubmissionResult, expected: &[&str]) {
    let Some(errors) = result.field_errors() else {
        panic!("Expected a validation rejection, got: {result:?}");
    };
    let mut expected: Vec<String> = expected.iter().map(ToString::to_string).collect();
    expected.sort();
    assert_eq!(errors.paths(), expected, "Unexpected rejected fields");
}

/// Asserts that the cycle failed with an error of `kind`.
pub fn assert_request_failed(result: &SubmissionResult, kind: &str) {
    let Some(cause) = result.cause() else {
        panic!("Expected a failed submission, got: {result:?}");
    };
    assert_eq!(
        cause.kind(),
        kind,
        "Expected failure of kind '{}', got: {}",
        kind,
        cause
    );
}

/// Asserts that no field currently displays an error.
pub fn assert_no_field_errors(registry: &FieldRegistry) {
    let errors = registry.errors();
    assert!(
        errors.is_empty(),
        "Expected no field errors, got: {:?}",
        errors
    );
}

/// Asserts that exactly one toast of `kind` titled `title` was shown.
pub fn assert_toast(sink: &CollectingToastSink, kind: ToastKind, title: &str) {
    let toasts = sink.toasts_of_kind(kind);
    assert_eq!(
        toasts.len(),
        1,
        "Expected one {} toast, got: {:?}",
        kind,
        sink.toasts()
    );
    assert_eq!(toasts[0].title, title);
}
